use crate::config::RenderConfig;
use sigdoc_api::{Signature, SignatureVisitor};

/// Characters that change meaning in CommonMark inline text.
const MARKDOWN_SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>'];

/// Resolves a type name to a documentation URL.
pub trait TypeLinker {
    fn link(&self, name: &str) -> Option<String>;
}

impl TypeLinker for RenderConfig {
    fn link(&self, name: &str) -> Option<String> {
        self.url_for(name)
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Backslash-escapes inline Markdown syntax.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Renders signatures as Markdown, turning every linkable type name into `[Name](url)`.
///
/// Literals and type names are backslash-escaped, so `List<User>` comes out as
/// `List\<User\>` instead of an HTML tag. Names registered with
/// [`with_type_variables`](Self::with_type_variables) are never linked.
pub struct MarkdownLinkRenderer<'a> {
    linker: &'a dyn TypeLinker,
    type_variables: Vec<String>,
    out: String,
    linked: usize,
}

impl<'a> MarkdownLinkRenderer<'a> {
    pub fn new(linker: &'a dyn TypeLinker) -> Self {
        Self {
            linker,
            type_variables: Vec::new(),
            out: String::new(),
            linked: 0,
        }
    }

    /// Type variables in scope; they render as plain names.
    pub fn with_type_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_variables.extend(names.into_iter().map(Into::into));
        self
    }

    /// Number of type names turned into links so far.
    pub fn linked(&self) -> usize {
        self.linked
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn is_type_variable(&self, name: &str) -> bool {
        self.type_variables.iter().any(|v| v == name)
    }
}

impl SignatureVisitor for MarkdownLinkRenderer<'_> {
    fn visit_literal(&mut self, text: &str) {
        push_escaped(&mut self.out, text);
    }

    fn visit_type_name(&mut self, name: &str) {
        let url = if self.is_type_variable(name) {
            None
        } else {
            self.linker.link(name)
        };
        match url {
            Some(url) => {
                self.out.push('[');
                push_escaped(&mut self.out, name);
                self.out.push_str("](");
                self.out.push_str(&url);
                self.out.push(')');
                self.linked += 1;
            }
            None => {
                tracing::trace!("No link for type {}", name);
                push_escaped(&mut self.out, name);
            }
        }
    }
}

pub fn render_markdown(item: &dyn Signature, linker: &dyn TypeLinker) -> String {
    let mut renderer = MarkdownLinkRenderer::new(linker);
    item.visit_signature(&mut renderer);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigdoc_api::{MethodSignature, TypeRef};

    #[test]
    fn links_known_types_and_escapes_literals() {
        let config = RenderConfig::default().with_link("Number", "https://docs/Number.html");
        let t = TypeRef::named("List")
            .with_type_argument(TypeRef::extends(TypeRef::named("Number")));

        assert_eq!(
            render_markdown(&t, &config),
            r"List\<? extends [Number](https://docs/Number.html)\>"
        );
    }

    #[test]
    fn generic_return_type_is_not_an_html_tag() {
        let method = MethodSignature::new("findAll")
            .returning(TypeRef::named("List").with_type_argument(TypeRef::named("User")));

        let out = render_markdown(&method, &RenderConfig::default());
        assert_eq!(out, r"List\<User\> findAll()");
        assert!(!out.replace(r"\<", "").contains('<'));
        assert!(!out.replace(r"\>", "").contains('>'));
    }

    #[test]
    fn names_with_markdown_characters_are_escaped() {
        let config = RenderConfig::default().with_link("My_Type", "https://docs/My_Type.html");
        let t = TypeRef::named("My_Type").with_type_argument(TypeRef::named("Raw_Value"));

        assert_eq!(
            render_markdown(&t, &config),
            r"[My\_Type](https://docs/My_Type.html)\<Raw\_Value\>"
        );
    }

    #[test]
    fn builtins_stay_plain() {
        let config = RenderConfig::default().with_base_url("https://docs.example.org/api");
        let repository = TypeRef::named("org.example.Repository").with_array_dimension();
        let method = MethodSignature::new("size")
            .returning(TypeRef::named("int"))
            .with_parameter("repo", repository);

        let mut renderer = MarkdownLinkRenderer::new(&config);
        method.visit_signature(&mut renderer);
        assert_eq!(renderer.linked(), 1);
        assert_eq!(
            renderer.finish(),
            "int size([org.example.Repository]\
             (https://docs.example.org/api/org/example/Repository.html)\\[\\] repo)"
        );
    }

    #[test]
    fn type_variables_are_never_linked() {
        let config = RenderConfig::default().with_base_url("https://docs.example.org/api");
        let method = MethodSignature::new("first")
            .with_type_parameter("T")
            .returning(TypeRef::named("T"))
            .with_parameter(
                "items",
                TypeRef::named("List").with_type_argument(TypeRef::named("T")),
            );

        let mut renderer =
            MarkdownLinkRenderer::new(&config).with_type_variables(method.type_variables());
        method.visit_signature(&mut renderer);
        assert_eq!(renderer.linked(), 1);
        assert_eq!(
            renderer.finish(),
            r"\<T\> T first([List](https://docs.example.org/api/List.html)\<T\> items)"
        );
    }

    #[test]
    fn custom_linkers_are_supported() {
        struct Prefix;
        impl TypeLinker for Prefix {
            fn link(&self, name: &str) -> Option<String> {
                name.starts_with("Foo").then(|| format!("#{}", name))
            }
        }

        let t = TypeRef::named("FooBar").with_type_argument(TypeRef::named("Baz"));
        assert_eq!(render_markdown(&t, &Prefix), r"[FooBar](#FooBar)\<Baz\>");
    }
}
