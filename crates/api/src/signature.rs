//! Signature rendering.
//!
//! A single walk emits two kinds of fragments: literal text (punctuation, keywords,
//! separators, array and varargs suffixes) and bare type names. Plain-text callers
//! concatenate both; documentation tools can intercept type names (e.g. to turn them
//! into links) and pass literals through.

use crate::models::TypeRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sink for the fragments emitted by a signature walk.
pub trait SignatureVisitor {
    /// Punctuation, keywords, separators and array/varargs suffixes.
    fn visit_literal(&mut self, text: &str);

    /// The bare name of a named type, without generics or suffix.
    fn visit_type_name(&mut self, name: &str);
}

impl SignatureVisitor for String {
    fn visit_literal(&mut self, text: &str) {
        self.push_str(text);
    }

    fn visit_type_name(&mut self, name: &str) {
        self.push_str(name);
    }
}

/// A single emission of a signature walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Fragment {
    Literal(String),
    TypeName(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Literal(s) | Fragment::TypeName(s) => s,
        }
    }
}

impl SignatureVisitor for Vec<Fragment> {
    fn visit_literal(&mut self, text: &str) {
        self.push(Fragment::Literal(text.to_string()));
    }

    fn visit_type_name(&mut self, name: &str) {
        self.push(Fragment::TypeName(name.to_string()));
    }
}

/// Anything that can be rendered through a [`SignatureVisitor`].
pub trait Signature {
    fn visit_signature(&self, visitor: &mut dyn SignatureVisitor);

    /// Flattened text of both fragment channels.
    fn signature(&self) -> String {
        let mut out = String::new();
        self.visit_signature(&mut out);
        out
    }

    fn fragments(&self) -> Vec<Fragment> {
        let mut out = Vec::new();
        self.visit_signature(&mut out);
        out
    }
}

impl Signature for TypeRef {
    /// Emits this node's signature. First matching shape wins:
    /// `?`, `? extends <bound>`, `? super <bound>`, then `Name<Args>[]...`.
    fn visit_signature(&self, visitor: &mut dyn SignatureVisitor) {
        match self {
            TypeRef::Wildcard => visitor.visit_literal("?"),
            TypeRef::Extends { bound } => {
                visitor.visit_literal("? extends ");
                bound.visit_signature(visitor);
            }
            TypeRef::Super { bound } => {
                visitor.visit_literal("? super ");
                bound.visit_signature(visitor);
            }
            TypeRef::Named { name, args, .. } => {
                // Unnamed nodes only occur mid-construction; they render without a name.
                if let Some(name) = name {
                    visitor.visit_type_name(name);
                }
                if !args.is_empty() {
                    visitor.visit_literal("<");
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            visitor.visit_literal(", ");
                        }
                        arg.visit_signature(visitor);
                    }
                    visitor.visit_literal(">");
                }
                let suffix = self.array_suffix();
                if !suffix.is_empty() {
                    visitor.visit_literal(&suffix);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records only type names, dropping literals.
    #[derive(Default)]
    struct NameRecorder(Vec<String>);

    impl SignatureVisitor for NameRecorder {
        fn visit_literal(&mut self, _text: &str) {}

        fn visit_type_name(&mut self, name: &str) {
            self.0.push(name.to_string());
        }
    }

    #[test]
    fn fragments_split_literals_from_type_names() {
        let t = TypeRef::named("Map")
            .with_type_argument(TypeRef::named("String"))
            .with_type_argument(TypeRef::wildcard());

        assert_eq!(
            t.fragments(),
            vec![
                Fragment::TypeName("Map".into()),
                Fragment::Literal("<".into()),
                Fragment::TypeName("String".into()),
                Fragment::Literal(", ".into()),
                Fragment::Literal("?".into()),
                Fragment::Literal(">".into()),
            ]
        );
    }

    #[test]
    fn type_name_channel_excludes_suffixes() {
        let t = TypeRef::named("List")
            .with_type_argument(TypeRef::extends(TypeRef::named("Number").with_array_dimension()))
            .with_varargs();

        let mut recorder = NameRecorder::default();
        t.visit_signature(&mut recorder);
        assert_eq!(recorder.0, vec!["List", "Number"]);
        assert_eq!(t.signature(), "List<? extends Number[]>...");
    }

    #[test]
    fn unnamed_node_renders_only_its_decorations() {
        let t = TypeRef::unnamed().with_array_dimension();
        assert_eq!(t.signature(), "[]");
        assert!(t.fragments().iter().all(|f| matches!(f, Fragment::Literal(_))));
    }

    #[test]
    fn display_matches_signature() {
        let t = TypeRef::super_of(TypeRef::named("Integer"));
        assert_eq!(t.to_string(), t.signature());
        assert_eq!(t.to_string(), "? super Integer");
    }
}
