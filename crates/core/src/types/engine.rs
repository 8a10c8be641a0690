//! The engine: configuration plus the depth guard for type-driven recursion.

use std::borrow::Cow;

use super::definition::TypeDefinition;
use super::errors::TypedefError;
use super::kind::{BuiltinKind, Kind};
use super::registry::TypeRegistry;
use crate::config::EngineConfig;

/// Entry point for every operation on type definitions.
///
/// The engine holds configuration only. Registries are passed per call and
/// every result is freshly built, so one engine can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Step one level deeper, failing once the configured limit is passed.
    pub(crate) fn descend(&self, depth: usize) -> Result<usize, TypedefError> {
        let next = depth + 1;
        if next > self.config.max_depth {
            tracing::debug!("recursion limit {} exceeded", self.config.max_depth);
            return Err(TypedefError::RecursionLimit {
                limit: self.config.max_depth,
            });
        }
        Ok(next)
    }

    /// Resolve a definition and return its built-in kind alongside it.
    pub(crate) fn resolve_kind<'a>(
        &self,
        typedef: &'a TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<(Cow<'a, TypeDefinition>, BuiltinKind), TypedefError> {
        let resolved = self.resolve_typedef(typedef, registry)?;
        let kind = match &resolved.kind {
            Kind::Builtin(kind) => *kind,
            Kind::Reference(name) => return Err(TypedefError::UnresolvedType(name.clone())),
        };
        Ok((resolved, kind))
    }
}
