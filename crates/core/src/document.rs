use crate::error::Result;
use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sigdoc_api::{
    FieldSignature, MethodSignature, Signature, SignatureVisitor, TypeContainer, TypeRef,
};
use std::path::Path;

/// A documented member whose declared types are [`TypeRef`] trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "member", rename_all = "lowercase")]
pub enum Member {
    Method(MethodSignature),
    Field(FieldSignature),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Method(m) => &m.name,
            Member::Field(f) => &f.name,
        }
    }

    /// Type variables in scope for this member's signature.
    pub fn type_variables(&self) -> Vec<&str> {
        match self {
            Member::Method(m) => m.type_variables().collect(),
            Member::Field(_) => Vec::new(),
        }
    }
}

impl Signature for Member {
    fn visit_signature(&self, visitor: &mut dyn SignatureVisitor) {
        match self {
            Member::Method(m) => m.visit_signature(visitor),
            Member::Field(f) => f.visit_signature(visitor),
        }
    }
}

impl TypeContainer for Member {
    fn visit_types(&self, action: &mut dyn FnMut(&TypeRef)) {
        match self {
            Member::Method(m) => m.visit_types(action),
            Member::Field(f) => f.visit_types(action),
        }
    }
}

impl From<MethodSignature> for Member {
    fn from(method: MethodSignature) -> Self {
        Member::Method(method)
    }
}

impl From<FieldSignature> for Member {
    fn from(field: FieldSignature) -> Self {
        Member::Field(field)
    }
}

/// The member signatures of one owning type, as exchanged with front-ends as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignatureDocument {
    /// Fully qualified name of the declaring type
    pub owner: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl SignatureDocument {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let doc = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded {} members of {} from {}",
            doc.members.len(),
            doc.owner,
            path.display()
        );
        Ok(doc)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?)?;
        tracing::debug!("Saved {} to {}", self.owner, path.display());
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Distinct concrete type names across all members, in first-seen order.
    pub fn referenced_types(&self) -> Vec<String> {
        let names: IndexSet<String> = self
            .members
            .iter()
            .flat_map(|m| m.type_names())
            .collect();
        names.into_iter().collect()
    }

    /// JSON schema of the document format.
    pub fn json_schema() -> Result<serde_json::Value> {
        Ok(serde_json::to_value(schemars::schema_for!(SignatureDocument))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> SignatureDocument {
        SignatureDocument::new("org.example.Repository")
            .with_member(
                MethodSignature::new("findAll")
                    .returning(TypeRef::named("List").with_type_argument(TypeRef::named("User"))),
            )
            .with_member(FieldSignature::new(
                "cache",
                TypeRef::named("Map")
                    .with_type_argument(TypeRef::named("String"))
                    .with_type_argument(TypeRef::named("User")),
            ))
    }

    #[test]
    fn referenced_types_are_distinct_and_ordered() {
        assert_eq!(
            repository().referenced_types(),
            vec!["List", "User", "Map", "String"]
        );
    }

    #[test]
    fn members_are_tagged_in_json() {
        let json = serde_json::to_value(repository()).unwrap();
        assert_eq!(json["members"][0]["member"], "method");
        assert_eq!(json["members"][1]["member"], "field");
        assert_eq!(json["members"][1]["name"], "cache");
    }

    #[test]
    fn member_signatures() {
        let doc = repository();
        let rendered: Vec<String> = doc.members.iter().map(|m| m.signature()).collect();
        assert_eq!(
            rendered,
            vec!["List<User> findAll()", "Map<String, User> cache"]
        );
        assert_eq!(doc.members[0].name(), "findAll");
    }

    #[test]
    fn schema_mentions_members() {
        let schema = SignatureDocument::json_schema().unwrap();
        assert!(schema.to_string().contains("members"));
    }
}
