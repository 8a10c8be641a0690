//! Structural equality and directional compatibility of type definitions.

use super::definition::{OneOfOption, TypeDefinition};
use super::engine::Engine;
use super::errors::TypedefError;
use super::kind::BuiltinKind;
use super::registry::TypeRegistry;
use super::value::values_equal;

impl Engine {
    /// Check whether two definitions describe the same type.
    ///
    /// `func` is never equal to anything, itself included.
    pub fn is_equal_type(
        &self,
        left: &TypeDefinition,
        right: &TypeDefinition,
        left_registry: Option<&TypeRegistry>,
        right_registry: Option<&TypeRegistry>,
    ) -> Result<bool, TypedefError> {
        let registries = Registries {
            source: left_registry,
            target: right_registry,
        };
        self.equal_at(left, right, registries, 0)
    }

    /// Check whether a value of `source` may be used where `target` is expected.
    ///
    /// Each rule is stated from the target's side: a `string` target accepts
    /// `int` and `float`, a `bool` target accepts `string` and numbers, a
    /// `float` target accepts `int`, and a not-null composite target only
    /// accepts not-null sources.
    pub fn is_compatible_type(
        &self,
        source: &TypeDefinition,
        target: &TypeDefinition,
        source_registry: Option<&TypeRegistry>,
        target_registry: Option<&TypeRegistry>,
    ) -> Result<bool, TypedefError> {
        let registries = Registries {
            source: source_registry,
            target: target_registry,
        };
        self.compatible_at(source, target, registries, 0)
    }

    fn equal_at(
        &self,
        left: &TypeDefinition,
        right: &TypeDefinition,
        registries: Registries<'_>,
        depth: usize,
    ) -> Result<bool, TypedefError> {
        let depth = self.descend(depth)?;
        let (left, left_kind) = self.resolve_kind(left, registries.source)?;
        let (right, right_kind) = self.resolve_kind(right, registries.target)?;

        if left_kind != right_kind {
            return Ok(false);
        }

        match left_kind {
            BuiltinKind::String
            | BuiltinKind::Bool
            | BuiltinKind::Int
            | BuiltinKind::Float
            | BuiltinKind::Array
            | BuiltinKind::Component => Ok(true),
            BuiltinKind::Func => Ok(false),
            BuiltinKind::Scalar => Ok(left.name == right.name),
            BuiltinKind::OneOf => Ok(same_options(left.options()?, right.options()?)),
            BuiltinKind::Object => Ok(left.is_not_null() == right.is_not_null()),
            BuiltinKind::ArrayOf => {
                self.equal_at(left.of_type()?, right.of_type()?, registries, depth)
            }
            BuiltinKind::ObjectOf => Ok(left.is_not_null() == right.is_not_null()
                && self.equal_at(left.of_type()?, right.of_type()?, registries, depth)?),
            BuiltinKind::Shape => {
                if left.is_not_null() != right.is_not_null() {
                    return Ok(false);
                }
                let (left_fields, right_fields) = (left.fields()?, right.fields()?);
                if left_fields.len() != right_fields.len() {
                    return Ok(false);
                }
                for (name, left_field) in left_fields {
                    let Some(right_field) = right_fields.get(name) else {
                        return Ok(false);
                    };
                    if left_field.is_required() != right_field.is_required()
                        || !self.equal_at(left_field, right_field, registries, depth)?
                    {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }

    fn compatible_at(
        &self,
        source: &TypeDefinition,
        target: &TypeDefinition,
        registries: Registries<'_>,
        depth: usize,
    ) -> Result<bool, TypedefError> {
        use BuiltinKind as K;

        let depth = self.descend(depth)?;
        let (source, source_kind) = self.resolve_kind(source, registries.source)?;
        let (target, target_kind) = self.resolve_kind(target, registries.target)?;

        // A not-null target must not receive null.
        let null_ok = !target.is_not_null() || source.is_not_null();

        match target_kind {
            K::String => Ok(matches!(source_kind, K::String | K::Int | K::Float)),
            K::Bool => Ok(matches!(source_kind, K::Bool | K::String | K::Int | K::Float)),
            K::Int => Ok(source_kind == K::Int),
            K::Float => Ok(matches!(source_kind, K::Float | K::Int)),
            K::Scalar => Ok(source_kind == K::Scalar && source.name == target.name),
            K::OneOf => Ok(source_kind == K::OneOf
                && same_options(source.options()?, target.options()?)),
            K::Array => Ok(matches!(source_kind, K::Array | K::ArrayOf)),
            K::ArrayOf => Ok(source_kind == K::ArrayOf
                && self.compatible_at(source.of_type()?, target.of_type()?, registries, depth)?),
            K::Object => Ok(matches!(source_kind, K::Object | K::ObjectOf | K::Shape) && null_ok),
            K::ObjectOf => Ok(source_kind == K::ObjectOf
                && null_ok
                && self.compatible_at(source.of_type()?, target.of_type()?, registries, depth)?),
            K::Shape => {
                if source_kind != K::Shape || !null_ok {
                    return Ok(false);
                }
                let (source_fields, target_fields) = (source.fields()?, target.fields()?);
                if source_fields.len() != target_fields.len() {
                    return Ok(false);
                }
                for (name, source_field) in source_fields {
                    let Some(target_field) = target_fields.get(name) else {
                        return Ok(false);
                    };
                    if target_field.is_required() && !source_field.is_required() {
                        return Ok(false);
                    }
                    if !self.compatible_at(source_field, target_field, registries, depth)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            K::Component => Ok(source_kind == K::Component),
            K::Func => Ok(false),
        }
    }
}

/// Registries for the two sides of a comparison.
#[derive(Clone, Copy)]
struct Registries<'r> {
    source: Option<&'r TypeRegistry>,
    target: Option<&'r TypeRegistry>,
}

/// Same option values, ignoring order.
fn same_options(left: &[OneOfOption], right: &[OneOfOption]) -> bool {
    let covers = |a: &[OneOfOption], b: &[OneOfOption]| {
        a.iter().all(|x| b.iter().any(|y| values_equal(&x.value, &y.value)))
    };
    covers(left, right) && covers(right, left)
}

/// Check type equality with the default engine.
pub fn is_equal_type(
    left: &TypeDefinition,
    right: &TypeDefinition,
    left_registry: Option<&TypeRegistry>,
    right_registry: Option<&TypeRegistry>,
) -> Result<bool, TypedefError> {
    Engine::default().is_equal_type(left, right, left_registry, right_registry)
}

/// Check directional compatibility with the default engine.
pub fn is_compatible_type(
    source: &TypeDefinition,
    target: &TypeDefinition,
    source_registry: Option<&TypeRegistry>,
    target_registry: Option<&TypeRegistry>,
) -> Result<bool, TypedefError> {
    Engine::default().is_compatible_type(source, target, source_registry, target_registry)
}
