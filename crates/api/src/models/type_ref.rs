use crate::signature::Signature;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One occurrence of a type in a declared signature (return, parameter or field type).
///
/// Exactly one shape applies per node. Bounded wildcards own their bound and the
/// named shape owns its type arguments, so a tree is always finite and acyclic.
///
/// A node is built incrementally through the `set_*` / `add_*` calls and then treated
/// as read-only by renderers. Mutations that do not apply to the current shape are
/// ignored rather than reported: `Wildcard` wins over an upper bound, which wins over
/// a lower bound, which wins over the named shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TypeRef {
    /// Concrete type by name (e.g. `int`, `List<String>[]`, `Object...`)
    Named {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<Cow<'static, str>>,
        /// Explicit `[]` count; the varargs suffix is tracked separately
        #[serde(default, skip_serializing_if = "is_zero")]
        dimensions: usize,
        #[serde(default, skip_serializing_if = "is_false")]
        varargs: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeRef>,
    },

    /// Unbounded wildcard (`?`)
    Wildcard,

    /// Upper-bounded wildcard (`? extends Number`)
    Extends { bound: Box<TypeRef> },

    /// Lower-bounded wildcard (`? super Integer`)
    Super { bound: Box<TypeRef> },
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Named {
            name: None,
            dimensions: 0,
            varargs: false,
            args: Vec::new(),
        }
    }
}

impl TypeRef {
    /// The primitive "no type" marker used for methods without a return value.
    pub const VOID: TypeRef = TypeRef::Named {
        name: Some(Cow::Borrowed("void")),
        dimensions: 0,
        varargs: false,
        args: Vec::new(),
    };

    /// Helper to create a named type
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        TypeRef::Named {
            name: Some(name.into()),
            dimensions: 0,
            varargs: false,
            args: Vec::new(),
        }
    }

    /// A bare named node whose name is filled in later with [`TypeRef::set_name`].
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn wildcard() -> Self {
        TypeRef::Wildcard
    }

    pub fn extends(bound: TypeRef) -> Self {
        TypeRef::Extends {
            bound: Box::new(bound),
        }
    }

    pub fn super_of(bound: TypeRef) -> Self {
        TypeRef::Super {
            bound: Box::new(bound),
        }
    }

    pub fn with_type_argument(mut self, arg: TypeRef) -> Self {
        self.add_type_argument(arg);
        self
    }

    pub fn with_array_dimension(mut self) -> Self {
        self.add_array_dimension();
        self
    }

    pub fn with_varargs(mut self) -> Self {
        self.set_varargs();
        self
    }

    // --- Construction API ---

    pub fn set_name(&mut self, name: impl Into<Cow<'static, str>>) {
        if let TypeRef::Named { name: slot, .. } = self {
            *slot = Some(name.into());
        }
    }

    pub fn add_array_dimension(&mut self) {
        if let TypeRef::Named { dimensions, .. } = self {
            *dimensions += 1;
        }
    }

    pub fn set_varargs(&mut self) {
        if let TypeRef::Named { varargs, .. } = self {
            *varargs = true;
        }
    }

    /// Appends a generic type argument, taking ownership of it. Order is preserved.
    pub fn add_type_argument(&mut self, arg: TypeRef) {
        if let TypeRef::Named { args, .. } = self {
            args.push(arg);
        }
    }

    /// Turns this node into an unbounded wildcard, discarding any other shape.
    pub fn set_wildcard(&mut self) {
        *self = TypeRef::Wildcard;
    }

    /// Turns this node into `? extends bound`. No effect on an unbounded wildcard.
    pub fn set_upper_bound(&mut self, bound: TypeRef) {
        if !matches!(self, TypeRef::Wildcard) {
            *self = TypeRef::extends(bound);
        }
    }

    /// Turns this node into `? super bound`. No effect on a wildcard or an upper-bounded node.
    pub fn set_lower_bound(&mut self, bound: TypeRef) {
        match self {
            TypeRef::Wildcard | TypeRef::Extends { .. } => {}
            _ => *self = TypeRef::super_of(bound),
        }
    }

    // --- Read API ---

    pub fn name(&self) -> Option<&str> {
        match self {
            TypeRef::Named { name, .. } => name.as_deref(),
            _ => None,
        }
    }

    pub fn is_varargs(&self) -> bool {
        matches!(self, TypeRef::Named { varargs: true, .. })
    }

    pub fn type_arguments(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named { args, .. } => args,
            _ => &[],
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, TypeRef::Wildcard)
    }

    pub fn upper_bound(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Extends { bound } => Some(bound.as_ref()),
            _ => None,
        }
    }

    pub fn lower_bound(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Super { bound } => Some(bound.as_ref()),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        *self == TypeRef::VOID
    }

    /// Explicit dimensions plus one for a varargs occurrence.
    pub fn array_dimensions(&self) -> usize {
        match self {
            TypeRef::Named {
                dimensions,
                varargs,
                ..
            } => dimensions + usize::from(*varargs),
            _ => 0,
        }
    }

    /// `[]` per explicit dimension followed by `...` for varargs.
    pub fn array_suffix(&self) -> String {
        match self {
            TypeRef::Named {
                dimensions,
                varargs,
                ..
            } => {
                let mut suffix = "[]".repeat(*dimensions);
                if *varargs {
                    suffix.push_str("...");
                }
                suffix
            }
            _ => String::new(),
        }
    }

    /// Flattening walk: reports every named node reachable from here, parent before
    /// its type arguments. Unbounded wildcards are skipped entirely and bounded
    /// wildcards report only their bound.
    pub fn visit_types<'a, F>(&'a self, mut action: F)
    where
        F: FnMut(&'a TypeRef),
    {
        self.walk_types(&mut action);
    }

    pub(crate) fn walk_types<'a>(&'a self, action: &mut dyn FnMut(&'a TypeRef)) {
        match self {
            TypeRef::Wildcard => {}
            TypeRef::Extends { bound } | TypeRef::Super { bound } => bound.walk_types(action),
            TypeRef::Named { args, .. } => {
                action(self);
                for arg in args {
                    arg.walk_types(action);
                }
            }
        }
    }

    /// Every named node of the flattening walk, in visit order.
    pub fn referenced_types(&self) -> Vec<&TypeRef> {
        let mut types = Vec::new();
        self.visit_types(|t| types.push(t));
        types
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

impl From<&'static str> for TypeRef {
    fn from(name: &'static str) -> Self {
        TypeRef::named(name)
    }
}
