//! Lookup of the definition reachable through a value path.

use std::fmt;

use super::definition::TypeDefinition;
use super::engine::Engine;
use super::errors::TypedefError;
use super::kind::BuiltinKind;
use super::registry::TypeRegistry;

/// One step into a value: a field or map key, or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, ".{}", key),
            Self::Index(index) => write!(f, "[{}]", index),
        }
    }
}

impl Engine {
    /// Walk `path` from `typedef` and return the definition found there.
    ///
    /// The current definition is resolved before each step. Key steps descend
    /// into `objectOf` values or `shape` fields, index steps into `arrayOf`
    /// elements. The returned definition itself is not resolved.
    pub fn get_nested_typedef(
        &self,
        typedef: &TypeDefinition,
        path: &[PathStep],
        registry: Option<&TypeRegistry>,
    ) -> Result<TypeDefinition, TypedefError> {
        let mut current = typedef.clone();

        for step in path {
            let next = {
                let (resolved, kind) = self.resolve_kind(&current, registry)?;
                let incompatible = || TypedefError::IncompatiblePathStep {
                    kind: kind.to_string(),
                    step: step.clone(),
                };

                match (kind, step) {
                    (BuiltinKind::ObjectOf, PathStep::Key(_))
                    | (BuiltinKind::ArrayOf, PathStep::Index(_)) => resolved.of_type()?.clone(),
                    (BuiltinKind::Shape, PathStep::Key(name)) => {
                        resolved.fields()?.get(name).cloned().ok_or_else(incompatible)?
                    }
                    _ => return Err(incompatible()),
                }
            };
            current = next;
        }

        Ok(current)
    }
}

/// Walk `path` from `typedef` with the default engine.
pub fn get_nested_typedef(
    typedef: &TypeDefinition,
    path: &[PathStep],
    registry: Option<&TypeRegistry>,
) -> Result<TypeDefinition, TypedefError> {
    Engine::default().get_nested_typedef(typedef, path, registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> TypeDefinition {
        TypeDefinition::array_of(TypeDefinition::shape([("n", TypeDefinition::int())]))
    }

    #[test]
    fn test_index_then_field() {
        let path = [PathStep::Index(0), PathStep::from("n")];
        assert_eq!(get_nested_typedef(&items(), &path, None).unwrap(), TypeDefinition::int());
    }

    #[test]
    fn test_empty_path_returns_input() {
        let td = TypeDefinition::reference("Unknown");
        assert_eq!(get_nested_typedef(&td, &[], None).unwrap(), td);
    }

    #[test]
    fn test_object_of_key() {
        let td = TypeDefinition::object_of(TypeDefinition::bool());
        let path = [PathStep::from("anything")];
        assert_eq!(get_nested_typedef(&td, &path, None).unwrap(), TypeDefinition::bool());
    }

    #[test]
    fn test_mismatched_steps() {
        let err = get_nested_typedef(&items(), &[PathStep::from("n")], None).unwrap_err();
        assert_eq!(
            err,
            TypedefError::IncompatiblePathStep {
                kind: "arrayOf".into(),
                step: "n".into(),
            }
        );

        let err = get_nested_typedef(&TypeDefinition::array(), &[PathStep::from("n")], None)
            .unwrap_err();
        assert!(matches!(
            err,
            TypedefError::IncompatiblePathStep { ref kind, .. } if kind == "array"
        ));

        let shape = TypeDefinition::shape([("n", TypeDefinition::int())]);
        assert!(get_nested_typedef(&shape, &[PathStep::Index(0)], None).is_err());
        assert!(get_nested_typedef(&shape, &[PathStep::from("missing")], None).is_err());
    }

    #[test]
    fn test_resolves_each_hop() {
        let mut registry = TypeRegistry::new();
        registry
            .register("Item", TypeDefinition::shape([("tag", TypeDefinition::reference("Tag"))]))
            .unwrap();
        registry.register("Tag", TypeDefinition::string()).unwrap();
        let td = TypeDefinition::array_of(TypeDefinition::reference("Item"));

        let path = [PathStep::Index(3), PathStep::from("tag")];
        let found = get_nested_typedef(&td, &path, Some(&registry)).unwrap();
        assert_eq!(found, TypeDefinition::reference("Tag"));

        assert_eq!(
            get_nested_typedef(&td, &path, None),
            Err(TypedefError::UnresolvedType("Item".to_string()))
        );
    }
}
