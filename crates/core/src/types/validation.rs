//! Value validation against type definitions.

use serde_json::Value;

use super::definition::TypeDefinition;
use super::engine::Engine;
use super::errors::{TypedefError, ValidationError, ValidationResult};
use super::kind::BuiltinKind;
use super::registry::TypeRegistry;
use super::value::{is_integral, is_scalar, json_type_name, values_equal};

impl Engine {
    /// Check whether `value` conforms to `typedef`.
    ///
    /// An invalid value yields `Ok(false)`. Errors are reserved for
    /// definitions that cannot be resolved.
    pub fn is_valid_value(
        &self,
        value: &Value,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<bool, TypedefError> {
        Ok(self.validate_value(value, typedef, registry)?.valid)
    }

    /// Validate `value` against `typedef`, collecting every mismatch.
    pub fn validate_value(
        &self,
        value: &Value,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<ValidationResult, TypedefError> {
        self.validate_at(value, typedef, registry, "$")
    }

    fn validate_at(
        &self,
        value: &Value,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
        path: &str,
    ) -> Result<ValidationResult, TypedefError> {
        // Descent is bounded by the nesting of `value` itself.
        let (typedef, kind) = self.resolve_kind(typedef, registry)?;

        let mismatch = || {
            ValidationResult::single_error(ValidationError::TypeMismatch {
                path: path.to_string(),
                expected: kind.to_string(),
                actual: json_type_name(value),
            })
        };

        // Nullable composites
        if kind.is_nullable() && value.is_null() {
            return Ok(if typedef.is_not_null() {
                ValidationResult::single_error(ValidationError::NullNotAllowed {
                    path: path.to_string(),
                })
            } else {
                ValidationResult::success()
            });
        }

        let type_ok = match kind {
            BuiltinKind::String => value.is_string(),
            BuiltinKind::Bool => value.is_boolean(),
            BuiltinKind::Int => is_integral(value),
            BuiltinKind::Float => value.is_number(),
            BuiltinKind::Scalar => is_scalar(value),
            BuiltinKind::Array | BuiltinKind::ArrayOf => value.is_array(),
            BuiltinKind::Object | BuiltinKind::ObjectOf | BuiltinKind::Shape => {
                value.is_object()
            }
            BuiltinKind::OneOf => {
                let options = typedef.options()?;
                if options.iter().any(|option| values_equal(&option.value, value)) {
                    return Ok(ValidationResult::success());
                }
                return Ok(ValidationResult::single_error(ValidationError::NotAnOption {
                    path: path.to_string(),
                    value: value.to_string(),
                }));
            }
            BuiltinKind::Func | BuiltinKind::Component => true,
        };

        if !type_ok {
            return Ok(mismatch());
        }

        let mut result = ValidationResult::success();

        match (kind, value) {
            (BuiltinKind::ArrayOf, Value::Array(items)) => {
                let of_type = typedef.of_type()?;
                for (i, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, i);
                    result.merge(self.validate_at(item, of_type, registry, &item_path)?);
                }
            }
            (BuiltinKind::ObjectOf, Value::Object(map)) => {
                let of_type = typedef.of_type()?;
                for (key, item) in map {
                    let item_path = format!("{}.{}", path, key);
                    result.merge(self.validate_at(item, of_type, registry, &item_path)?);
                }
            }
            (BuiltinKind::Shape, Value::Object(map)) => {
                for (name, field) in typedef.fields()? {
                    let field_path = format!("{}.{}", path, name);
                    match map.get(name) {
                        Some(item) => {
                            result.merge(self.validate_at(item, field, registry, &field_path)?);
                        }
                        None if field.is_required() => {
                            result.add_error(ValidationError::MissingRequired { path: field_path });
                        }
                        None => {}
                    }
                }
            }
            _ => {}
        }

        Ok(result)
    }
}

/// Check whether `value` conforms to `typedef` with the default engine.
pub fn is_valid_value(
    value: &Value,
    typedef: &TypeDefinition,
    registry: Option<&TypeRegistry>,
) -> Result<bool, TypedefError> {
    Engine::default().is_valid_value(value, typedef, registry)
}

/// Validate `value` against `typedef` with the default engine.
pub fn validate_value(
    value: &Value,
    typedef: &TypeDefinition,
    registry: Option<&TypeRegistry>,
) -> Result<ValidationResult, TypedefError> {
    Engine::default().validate_value(value, typedef, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use rstest::rstest;
    use serde_json::json;

    fn valid(value: Value, typedef: &TypeDefinition) -> bool {
        is_valid_value(&value, typedef, None).unwrap()
    }

    #[rstest]
    #[case(TypeDefinition::string(), json!("hi"), true)]
    #[case(TypeDefinition::string(), json!(1), false)]
    #[case(TypeDefinition::bool(), json!(false), true)]
    #[case(TypeDefinition::bool(), json!("false"), false)]
    #[case(TypeDefinition::int(), json!(42), true)]
    #[case(TypeDefinition::int(), json!(4.0), true)]
    #[case(TypeDefinition::int(), json!(4.5), false)]
    #[case(TypeDefinition::float(), json!(4.5), true)]
    #[case(TypeDefinition::float(), json!(4), true)]
    #[case(TypeDefinition::float(), json!("4.5"), false)]
    #[case(TypeDefinition::scalar(), json!(true), true)]
    #[case(TypeDefinition::scalar(), json!("x"), true)]
    #[case(TypeDefinition::scalar(), json!(null), false)]
    #[case(TypeDefinition::scalar(), json!([]), false)]
    #[case(TypeDefinition::array(), json!([1, "a"]), true)]
    #[case(TypeDefinition::array(), json!({}), false)]
    #[case(TypeDefinition::object(), json!({"a": 1}), true)]
    #[case(TypeDefinition::object(), json!(null), true)]
    #[case(TypeDefinition::object().not_null(), json!(null), false)]
    #[case(TypeDefinition::object(), json!([]), false)]
    #[case(TypeDefinition::func(), json!(null), true)]
    #[case(TypeDefinition::component(), json!({"anything": []}), true)]
    fn test_primitive_kinds(
        #[case] typedef: TypeDefinition,
        #[case] value: Value,
        #[case] ok: bool,
    ) {
        assert_eq!(valid(value, &typedef), ok);
    }

    #[test]
    fn test_one_of() {
        let td = TypeDefinition::one_of([json!("a"), json!(1)]);
        assert!(valid(json!("a"), &td));
        assert!(valid(json!(1.0), &td));
        assert!(!valid(json!("b"), &td));
        assert!(!valid(json!(null), &td));
    }

    #[test]
    fn test_array_of() {
        let td = TypeDefinition::array_of(TypeDefinition::int());
        assert!(valid(json!([]), &td));
        assert!(valid(json!([1, 2, 3]), &td));
        assert!(!valid(json!([1, "2"]), &td));
        assert!(!valid(json!(null), &td));
    }

    #[test]
    fn test_object_of_not_null() {
        let td = TypeDefinition::object_of(TypeDefinition::int()).not_null();
        assert!(valid(json!({"a": 1, "b": 2}), &td));
        assert!(!valid(json!(null), &td));
        assert!(!valid(json!({"a": "1"}), &td));

        let nullable = TypeDefinition::object_of(TypeDefinition::int());
        assert!(valid(json!(null), &nullable));
    }

    #[test]
    fn test_shape_fields() {
        let td = TypeDefinition::shape([
            ("id", TypeDefinition::int().required()),
            ("label", TypeDefinition::string()),
        ]);
        assert!(valid(json!({"id": 1}), &td));
        assert!(valid(json!({"id": 1, "label": "x", "extra": true}), &td));
        assert!(!valid(json!({"label": "x"}), &td));
        assert!(!valid(json!({"id": 1, "label": 2}), &td));
        assert!(valid(json!(null), &td));
        assert!(!valid(json!(null), &td.clone().not_null()));
    }

    #[test]
    fn test_errors_carry_paths() {
        let td = TypeDefinition::array_of(TypeDefinition::shape([
            ("id", TypeDefinition::int().required()),
            ("tags", TypeDefinition::object_of(TypeDefinition::string())),
        ]));
        let value = json!([{"id": 1}, {"tags": {"a": 3}}]);

        let result = validate_value(&value, &td, None).unwrap();
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                ValidationError::MissingRequired {
                    path: "$[1].id".to_string(),
                },
                ValidationError::TypeMismatch {
                    path: "$[1].tags.a".to_string(),
                    expected: "string".to_string(),
                    actual: "int".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_reference_resolved_at_depth() {
        let mut registry = TypeRegistry::new();
        registry.register("Id", TypeDefinition::int()).unwrap();
        let td = TypeDefinition::array_of(TypeDefinition::reference("Id"));

        assert!(is_valid_value(&json!([1]), &td, Some(&registry)).unwrap());
        assert!(!is_valid_value(&json!(["1"]), &td, Some(&registry)).unwrap());
        // Empty arrays never reach the element type.
        assert!(is_valid_value(&json!([]), &td, None).unwrap());
        assert_eq!(
            is_valid_value(&json!([1]), &td, None),
            Err(TypedefError::UnresolvedType("Id".to_string()))
        );
    }

    #[test]
    fn test_recursive_type_validates_finite_value() {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                "Node",
                TypeDefinition::shape([
                    ("value", TypeDefinition::int()),
                    ("next", TypeDefinition::reference("Node")),
                ]),
            )
            .unwrap();
        let td = TypeDefinition::reference("Node");

        let list = json!({"value": 1, "next": {"value": 2, "next": null}});
        assert!(is_valid_value(&list, &td, Some(&registry)).unwrap());
    }

    #[test]
    fn test_value_deeper_than_max_depth() {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                "Node",
                TypeDefinition::shape([
                    ("value", TypeDefinition::int()),
                    ("next", TypeDefinition::reference("Node")),
                ]),
            )
            .unwrap();
        let td = TypeDefinition::reference("Node");

        let mut list = json!(null);
        for i in 0..70 {
            list = json!({"value": i, "next": list});
        }
        assert!(is_valid_value(&list, &td, Some(&registry)).unwrap());

        let engine = Engine::new(EngineConfig { max_depth: 4 });
        assert_eq!(engine.is_valid_value(&list, &td, Some(&registry)), Ok(true));

        // The innermost node still gets checked.
        let mut bad = json!({"value": "x", "next": null});
        for i in 0..70 {
            bad = json!({"value": i, "next": bad});
        }
        let result = engine.validate_value(&bad, &td, Some(&registry)).unwrap();
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }
}
