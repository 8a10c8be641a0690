//! Coercion of values between type definitions.
//!
//! Coercions are keyed by the destination kind and then the source kind:
//!
//! | destination | accepted sources |
//! |-------------|------------------|
//! | `string` | `string`, `int` and `float` (rendered as text) |
//! | `bool` | `bool`, `string` (non-empty), `int` and `float` (non-zero) |
//! | `int` | `int` |
//! | `float` | `float`, `int` |
//! | `scalar`, `oneOf` | same kind |
//! | `array` | `array`, `arrayOf` |
//! | `arrayOf` | `arrayOf`, element by element |
//! | `object` | `object`, `objectOf`, `shape` |
//! | `objectOf` | `objectOf`, value by value |
//! | `shape` | `shape`, field by field |
//!
//! `func` and `component` accept nothing.

use serde_json::{Map, Value};

use super::definition::TypeDefinition;
use super::engine::Engine;
use super::errors::TypedefError;
use super::kind::BuiltinKind;
use super::registry::TypeRegistry;
use super::value::{is_nonzero, number_to_string};

impl Engine {
    /// Convert `value`, built for `from`, into a value for `to`.
    ///
    /// Shape coercion walks the source shape's fields. A source field missing
    /// from the destination shape fails with `MissingTargetField`; fields
    /// absent from the value itself are skipped.
    pub fn coerce_value(
        &self,
        value: &Value,
        from: &TypeDefinition,
        to: &TypeDefinition,
        from_registry: Option<&TypeRegistry>,
        to_registry: Option<&TypeRegistry>,
    ) -> Result<Value, TypedefError> {
        let registries = (from_registry, to_registry);
        self.coerce_at(value, from, to, registries)
    }

    fn coerce_at(
        &self,
        value: &Value,
        from: &TypeDefinition,
        to: &TypeDefinition,
        registries: (Option<&TypeRegistry>, Option<&TypeRegistry>),
    ) -> Result<Value, TypedefError> {
        use BuiltinKind as K;

        // Descent is bounded by the nesting of `value` itself.
        let (from, from_kind) = self.resolve_kind(from, registries.0)?;
        let (to, to_kind) = self.resolve_kind(to, registries.1)?;

        match (to_kind, from_kind) {
            (K::String, K::String)
            | (K::Bool, K::Bool)
            | (K::Int, K::Int)
            | (K::Float, K::Float | K::Int)
            | (K::Scalar, K::Scalar)
            | (K::OneOf, K::OneOf)
            | (K::Array, K::Array | K::ArrayOf)
            | (K::Object, K::Object | K::ObjectOf | K::Shape) => Ok(value.clone()),

            (K::String, K::Int | K::Float) => Ok(match value {
                Value::Number(n) => Value::String(number_to_string(n)),
                other => other.clone(),
            }),
            (K::Bool, K::String) => Ok(match value {
                Value::String(s) => Value::Bool(!s.is_empty()),
                other => other.clone(),
            }),
            (K::Bool, K::Int | K::Float) => Ok(match value {
                Value::Number(n) => Value::Bool(is_nonzero(n)),
                other => other.clone(),
            }),

            (K::ArrayOf, K::ArrayOf) => {
                let (from_of, to_of) = (from.of_type()?, to.of_type()?);
                match value {
                    Value::Array(items) => items
                        .iter()
                        .map(|item| self.coerce_at(item, from_of, to_of, registries))
                        .collect::<Result<Vec<_>, _>>()
                        .map(Value::Array),
                    other => Ok(other.clone()),
                }
            }
            (K::ObjectOf, K::ObjectOf) => {
                let (from_of, to_of) = (from.of_type()?, to.of_type()?);
                match value {
                    Value::Object(map) => {
                        let mut out = Map::new();
                        for (key, item) in map {
                            let item = self.coerce_at(item, from_of, to_of, registries)?;
                            out.insert(key.clone(), item);
                        }
                        Ok(Value::Object(out))
                    }
                    other => Ok(other.clone()),
                }
            }
            (K::Shape, K::Shape) => {
                let (from_fields, to_fields) = (from.fields()?, to.fields()?);
                let mut pairs = Vec::with_capacity(from_fields.len());
                for (name, from_field) in from_fields {
                    let Some(to_field) = to_fields.get(name) else {
                        tracing::debug!("shape coercion: no destination field {}", name);
                        return Err(TypedefError::MissingTargetField {
                            field: name.clone(),
                        });
                    };
                    pairs.push((name, from_field, to_field));
                }

                match value {
                    Value::Object(map) => {
                        let mut out = Map::new();
                        for (name, from_field, to_field) in pairs {
                            if let Some(item) = map.get(name) {
                                let item =
                                    self.coerce_at(item, from_field, to_field, registries)?;
                                out.insert(name.clone(), item);
                            }
                        }
                        Ok(Value::Object(out))
                    }
                    other => Ok(other.clone()),
                }
            }

            _ => {
                tracing::debug!("no coercion from {} to {}", from_kind, to_kind);
                Err(TypedefError::UncoercibleType {
                    from: from_kind.to_string(),
                    to: to_kind.to_string(),
                })
            }
        }
    }
}

/// Coerce a value with the default engine.
pub fn coerce_value(
    value: &Value,
    from: &TypeDefinition,
    to: &TypeDefinition,
    from_registry: Option<&TypeRegistry>,
    to_registry: Option<&TypeRegistry>,
) -> Result<Value, TypedefError> {
    Engine::default().coerce_value(value, from, to, from_registry, to_registry)
}
