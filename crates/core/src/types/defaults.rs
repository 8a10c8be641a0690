//! Default value synthesis.

use serde_json::{Map, Value, json};

use super::definition::TypeDefinition;
use super::engine::Engine;
use super::errors::TypedefError;
use super::kind::BuiltinKind;
use super::registry::TypeRegistry;

/// How nullable composites are defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultOptions {
    /// Force the outermost nullable composite to its non-null default.
    pub non_null: bool,
    /// Keep forcing non-null defaults through nested shape fields.
    pub deep_non_null: bool,
}

impl DefaultOptions {
    pub const NULLABLE: Self = Self {
        non_null: false,
        deep_non_null: false,
    };
    pub const NON_NULL: Self = Self {
        non_null: true,
        deep_non_null: false,
    };
    pub const DEEP_NON_NULL: Self = Self {
        non_null: true,
        deep_non_null: true,
    };

    /// Options for the fields of a shape being defaulted with `self`.
    fn for_fields(self) -> Self {
        if self.deep_non_null { Self::DEEP_NON_NULL } else { Self::NULLABLE }
    }
}

impl Engine {
    /// Default value where nullable composites without `notNull` are `null`.
    pub fn make_default_value(
        &self,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<Value, TypedefError> {
        self.make_default_value_with(typedef, registry, DefaultOptions::NULLABLE)
    }

    /// Default value with the outermost nullable composite forced non-null.
    pub fn make_default_non_null_value(
        &self,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<Value, TypedefError> {
        self.make_default_value_with(typedef, registry, DefaultOptions::NON_NULL)
    }

    /// Default value with every nullable shape and shape field forced non-null.
    pub fn make_default_deep_non_null_value(
        &self,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<Value, TypedefError> {
        self.make_default_value_with(typedef, registry, DefaultOptions::DEEP_NON_NULL)
    }

    pub fn make_default_value_with(
        &self,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
        options: DefaultOptions,
    ) -> Result<Value, TypedefError> {
        self.default_at(typedef, registry, options, 0)
    }

    fn default_at(
        &self,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
        options: DefaultOptions,
        depth: usize,
    ) -> Result<Value, TypedefError> {
        let depth = self.descend(depth)?;
        let (typedef, kind) = self.resolve_kind(typedef, registry)?;
        let non_null = typedef.is_not_null() || options.non_null;

        let value = match kind {
            BuiltinKind::String | BuiltinKind::Scalar => json!(""),
            BuiltinKind::Bool => json!(false),
            BuiltinKind::Int | BuiltinKind::Float => json!(0),
            BuiltinKind::OneOf => typedef.options()?[0].value.clone(),
            BuiltinKind::Array | BuiltinKind::ArrayOf => json!([]),
            BuiltinKind::Object | BuiltinKind::ObjectOf if non_null => json!({}),
            BuiltinKind::Shape if non_null => {
                let field_options = options.for_fields();
                let mut map = Map::new();
                for (name, field) in typedef.fields()? {
                    let value = self.default_at(field, registry, field_options, depth)?;
                    map.insert(name.clone(), value);
                }
                Value::Object(map)
            }
            BuiltinKind::Object
            | BuiltinKind::ObjectOf
            | BuiltinKind::Shape
            | BuiltinKind::Func
            | BuiltinKind::Component => Value::Null,
        };
        Ok(value)
    }
}

/// Nullable default with the default engine.
pub fn make_default_value(
    typedef: &TypeDefinition,
    registry: Option<&TypeRegistry>,
) -> Result<Value, TypedefError> {
    Engine::default().make_default_value(typedef, registry)
}

/// Shallow non-null default with the default engine.
pub fn make_default_non_null_value(
    typedef: &TypeDefinition,
    registry: Option<&TypeRegistry>,
) -> Result<Value, TypedefError> {
    Engine::default().make_default_non_null_value(typedef, registry)
}

/// Deep non-null default with the default engine.
pub fn make_default_deep_non_null_value(
    typedef: &TypeDefinition,
    registry: Option<&TypeRegistry>,
) -> Result<Value, TypedefError> {
    Engine::default().make_default_deep_non_null_value(typedef, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::validation::is_valid_value;
    use rstest::rstest;

    #[rstest]
    #[case(TypeDefinition::string(), json!(""))]
    #[case(TypeDefinition::scalar(), json!(""))]
    #[case(TypeDefinition::bool(), json!(false))]
    #[case(TypeDefinition::int(), json!(0))]
    #[case(TypeDefinition::float(), json!(0))]
    #[case(TypeDefinition::one_of(["b", "a"]), json!("b"))]
    #[case(TypeDefinition::array(), json!([]))]
    #[case(TypeDefinition::array_of(TypeDefinition::int()), json!([]))]
    #[case(TypeDefinition::object(), json!(null))]
    #[case(TypeDefinition::object().not_null(), json!({}))]
    #[case(TypeDefinition::func(), json!(null))]
    #[case(TypeDefinition::component(), json!(null))]
    fn test_nullable_defaults(#[case] td: TypeDefinition, #[case] expected: Value) {
        assert_eq!(make_default_value(&td, None).unwrap(), expected);
    }

    #[test]
    fn test_object_of_defaults() {
        let nullable = TypeDefinition::object_of(TypeDefinition::int());
        assert_eq!(make_default_value(&nullable, None).unwrap(), json!(null));
        assert_eq!(make_default_non_null_value(&nullable, None).unwrap(), json!({}));

        let strict = nullable.not_null();
        assert_eq!(make_default_value(&strict, None).unwrap(), json!({}));
        assert_eq!(make_default_non_null_value(&strict, None).unwrap(), json!({}));
    }

    fn nested() -> TypeDefinition {
        TypeDefinition::shape([
            ("title", TypeDefinition::string()),
            ("inner", TypeDefinition::shape([("n", TypeDefinition::int())])),
            ("extra", TypeDefinition::object_of(TypeDefinition::int())),
        ])
    }

    #[test]
    fn test_shape_nullable_default() {
        assert_eq!(make_default_value(&nested(), None).unwrap(), json!(null));
    }

    #[test]
    fn test_shape_shallow_non_null() {
        assert_eq!(
            make_default_non_null_value(&nested(), None).unwrap(),
            json!({"title": "", "inner": null, "extra": null})
        );
    }

    #[test]
    fn test_shape_deep_non_null() {
        assert_eq!(
            make_default_deep_non_null_value(&nested(), None).unwrap(),
            json!({"title": "", "inner": {"n": 0}, "extra": {}})
        );
    }

    #[test]
    fn test_not_null_fields_stay_populated() {
        let td = TypeDefinition::shape([(
            "inner",
            TypeDefinition::shape([("n", TypeDefinition::int())]).not_null(),
        )])
        .not_null();
        let value = make_default_value(&td, None).unwrap();
        assert_eq!(value, json!({"inner": {"n": 0}}));
        assert!(is_valid_value(&value, &td, None).unwrap());
    }

    #[test]
    fn test_fresh_value_per_call() {
        let td = TypeDefinition::object().not_null();
        let mut first = make_default_value(&td, None).unwrap();
        first["mutated"] = json!(true);
        assert_eq!(make_default_value(&td, None).unwrap(), json!({}));
    }

    #[test]
    fn test_reference_default() {
        let mut registry = TypeRegistry::new();
        registry.register("Size", TypeDefinition::one_of(["m", "l"])).unwrap();
        let td = TypeDefinition::reference("Size");
        assert_eq!(make_default_value(&td, Some(&registry)).unwrap(), json!("m"));
        assert!(make_default_value(&td, None).is_err());
    }
}
