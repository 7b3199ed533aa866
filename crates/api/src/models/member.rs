use super::type_ref::TypeRef;
use crate::container::TypeContainer;
use crate::signature::{Signature, SignatureVisitor};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A declared method or constructor parameter.
///
/// A trailing variable-arity parameter is expressed through the varargs flag of its
/// type, so it renders as `String... names`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Parameter {
    pub name: String,
    pub type_ref: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }

    pub fn is_varargs(&self) -> bool {
        self.type_ref.is_varargs()
    }
}

impl Signature for Parameter {
    fn visit_signature(&self, visitor: &mut dyn SignatureVisitor) {
        self.type_ref.visit_signature(visitor);
        visitor.visit_literal(" ");
        visitor.visit_literal(&self.name);
    }
}

impl TypeContainer for Parameter {
    fn visit_types(&self, action: &mut dyn FnMut(&TypeRef)) {
        TypeContainer::visit_types(&self.type_ref, action);
    }
}

fn void_type() -> TypeRef {
    TypeRef::VOID
}

/// Signature of a declared method: `<T> List<T> copy(T[] items, int count)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct MethodSignature {
    pub name: String,
    /// Declared type variables, rendered verbatim (e.g. `T`, `K extends Comparable<K>`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
    #[serde(default = "void_type")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl MethodSignature {
    /// A method with no parameters returning `void`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            return_type: TypeRef::VOID,
            parameters: Vec::new(),
        }
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn with_type_parameter(mut self, type_parameter: impl Into<String>) -> Self {
        self.type_parameters.push(type_parameter.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, type_ref));
        self
    }

    pub fn is_varargs(&self) -> bool {
        self.parameters.last().is_some_and(Parameter::is_varargs)
    }

    /// Names of the declared type variables, without their bounds.
    pub fn type_variables(&self) -> impl Iterator<Item = &str> {
        self.type_parameters
            .iter()
            .filter_map(|decl| decl.split_whitespace().next())
    }
}

impl Signature for MethodSignature {
    fn visit_signature(&self, visitor: &mut dyn SignatureVisitor) {
        if !self.type_parameters.is_empty() {
            visitor.visit_literal("<");
            visitor.visit_literal(&self.type_parameters.join(", "));
            visitor.visit_literal("> ");
        }
        self.return_type.visit_signature(visitor);
        visitor.visit_literal(" ");
        visitor.visit_literal(&self.name);
        visitor.visit_literal("(");
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                visitor.visit_literal(", ");
            }
            param.visit_signature(visitor);
        }
        visitor.visit_literal(")");
    }
}

impl TypeContainer for MethodSignature {
    fn visit_types(&self, action: &mut dyn FnMut(&TypeRef)) {
        TypeContainer::visit_types(&self.return_type, action);
        self.parameters.as_slice().visit_types(action);
    }
}

/// Signature of a declared field: `Map<String, Object> properties`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FieldSignature {
    pub name: String,
    pub type_ref: TypeRef,
}

impl FieldSignature {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }
}

impl Signature for FieldSignature {
    fn visit_signature(&self, visitor: &mut dyn SignatureVisitor) {
        self.type_ref.visit_signature(visitor);
        visitor.visit_literal(" ");
        visitor.visit_literal(&self.name);
    }
}

impl TypeContainer for FieldSignature {
    fn visit_types(&self, action: &mut dyn FnMut(&TypeRef)) {
        TypeContainer::visit_types(&self.type_ref, action);
    }
}
