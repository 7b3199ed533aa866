use crate::models::TypeRef;

/// Something that references types, e.g. a method via its return and parameter types.
pub trait TypeContainer {
    /// Invokes `action` for every concrete (named) type occurrence, depth first.
    fn visit_types(&self, action: &mut dyn FnMut(&TypeRef));

    /// Names reported by [`TypeContainer::visit_types`], in visit order, duplicates kept.
    fn type_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.visit_types(&mut |t| {
            if let Some(name) = t.name() {
                names.push(name.to_string());
            }
        });
        names
    }
}

impl TypeContainer for TypeRef {
    fn visit_types(&self, action: &mut dyn FnMut(&TypeRef)) {
        self.walk_types(&mut |t| action(t));
    }
}

impl<T: TypeContainer> TypeContainer for [T] {
    fn visit_types(&self, action: &mut dyn FnMut(&TypeRef)) {
        for item in self {
            item.visit_types(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_visit_in_order() {
        let types = vec![
            TypeRef::named("List").with_type_argument(TypeRef::named("String")),
            TypeRef::wildcard(),
            TypeRef::VOID,
        ];
        assert_eq!(types.as_slice().type_names(), vec!["List", "String", "void"]);
    }
}
