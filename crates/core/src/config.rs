use crate::error::{Result, SigdocError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Primitive and keyword types that never have a documentation page of their own.
pub const BUILTIN_TYPES: &[&str] = &[
    "void", "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Settings for link-generating renderers, usually read from a JSON file.
///
/// ```json
/// {
///   "base_url": "https://docs.example.org/javadoc",
///   "links": { "String": "https://docs.oracle.com/javase/8/docs/api/java/lang/String.html" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Root for generated links; `a.b.Type` maps to `<base_url>/a/b/Type.html`
    pub base_url: Option<String>,
    /// Explicit links, checked before `base_url`
    pub links: BTreeMap<String, String>,
    /// Link builtin names such as `int` or `void` too
    pub link_builtins: bool,
}

impl RenderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SigdocError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: RenderConfig = serde_json::from_str(&content)
            .map_err(|e| SigdocError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        tracing::debug!(
            "Loaded render config from {} ({} explicit links)",
            path.display(),
            config.links.len()
        );
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.insert(name.into(), url.into());
        self
    }

    /// Documentation URL for a type name, if one can be produced.
    pub fn url_for(&self, name: &str) -> Option<String> {
        if is_builtin(name) && !self.link_builtins {
            return None;
        }
        if let Some(url) = self.links.get(name) {
            return Some(url.clone());
        }
        self.base_url.as_ref().map(|base| {
            format!(
                "{}/{}.html",
                base.trim_end_matches('/'),
                name.replace('.', "/")
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_links_win_over_base_url() {
        let config = RenderConfig::default()
            .with_base_url("https://docs.example.org/api/")
            .with_link("String", "https://jdk.example.org/String.html");

        assert_eq!(
            config.url_for("String").as_deref(),
            Some("https://jdk.example.org/String.html")
        );
        assert_eq!(
            config.url_for("org.example.Repository").as_deref(),
            Some("https://docs.example.org/api/org/example/Repository.html")
        );
    }

    #[test]
    fn builtins_are_not_linked_by_default() {
        let mut config = RenderConfig::default().with_base_url("https://docs.example.org");
        assert_eq!(config.url_for("int"), None);
        assert_eq!(config.url_for("void"), None);

        config.link_builtins = true;
        assert!(config.url_for("int").is_some());
    }

    #[test]
    fn no_base_url_means_only_explicit_links() {
        let config = RenderConfig::default();
        assert_eq!(config.url_for("Repository"), None);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }
}
