//! Resolution of user-defined type references.

use std::borrow::Cow;

use super::definition::TypeDefinition;
use super::engine::Engine;
use super::errors::TypedefError;
use super::kind::Kind;
use super::registry::TypeRegistry;

impl Engine {
    /// Turn a possibly referencing definition into a built-in-kinded one.
    ///
    /// Built-in definitions are returned as-is. A reference is looked up in
    /// `registry` and its own attributes are laid over the registry entry, the
    /// reference winning on conflict. Entries that are themselves references
    /// are followed until a built-in kind is reached.
    pub fn resolve_typedef<'a>(
        &self,
        typedef: &'a TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<Cow<'a, TypeDefinition>, TypedefError> {
        let mut resolved = Cow::Borrowed(typedef);
        let mut hops = 0;

        while let Kind::Reference(name) = &resolved.kind {
            let name = name.clone();
            hops = self.descend(hops)?;

            let Some(entry) = registry.and_then(|r| r.get(&name)) else {
                tracing::debug!("unresolved type reference: {}", name);
                return Err(TypedefError::UnresolvedType(name));
            };
            tracing::trace!("resolved {} to {}", name, entry.kind);

            let merged = merge(&resolved, &entry);
            resolved = Cow::Owned(merged);
        }

        Ok(resolved)
    }
}

/// Lay the attributes of `reference` over `entry`. The kind always comes
/// from the entry.
fn merge(reference: &TypeDefinition, entry: &TypeDefinition) -> TypeDefinition {
    TypeDefinition {
        kind: entry.kind.clone(),
        not_null: reference.not_null.or(entry.not_null),
        of_type: reference.of_type.clone().or_else(|| entry.of_type.clone()),
        fields: reference.fields.clone().or_else(|| entry.fields.clone()),
        options: reference.options.clone().or_else(|| entry.options.clone()),
        required: reference.required.or(entry.required),
        name: reference.name.clone().or_else(|| entry.name.clone()),
    }
}

/// Resolve `typedef` against `registry` with the default engine.
pub fn resolve_typedef<'a>(
    typedef: &'a TypeDefinition,
    registry: Option<&TypeRegistry>,
) -> Result<Cow<'a, TypeDefinition>, TypedefError> {
    Engine::default().resolve_typedef(typedef, registry)
}
