//! Registry of user-defined type names.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::definition::TypeDefinition;
use super::errors::TypedefError;
use super::kind::is_builtin_kind;

/// Mapping from user-defined type names to their definitions.
///
/// The registry is passed explicitly to every operation; the engine keeps no
/// registry of its own. Populating it is up to the caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, TypeDefinition>")]
pub struct TypeRegistry {
    types: HashMap<String, Arc<TypeDefinition>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type definition under `name`.
    ///
    /// Fails if the name is a built-in kind or is already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        typedef: TypeDefinition,
    ) -> Result<(), TypedefError> {
        let name = name.into();
        if is_builtin_kind(&name) {
            return Err(TypedefError::ReservedName(name));
        }
        if self.types.contains_key(&name) {
            return Err(TypedefError::Duplicate(name));
        }
        self.types.insert(name, Arc::new(typedef));
        Ok(())
    }

    /// Insert or replace a type definition.
    ///
    /// Built-in names are still rejected since they could never be looked up.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        typedef: TypeDefinition,
    ) -> Result<Option<Arc<TypeDefinition>>, TypedefError> {
        let name = name.into();
        if is_builtin_kind(&name) {
            return Err(TypedefError::ReservedName(name));
        }
        Ok(self.types.insert(name, Arc::new(typedef)))
    }

    /// Get a type definition by name.
    pub fn get(&self, name: &str) -> Option<Arc<TypeDefinition>> {
        self.types.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// List registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a registry from pairs, later entries replacing earlier ones.
    ///
    /// Unlike `collect`, a built-in name fails with `ReservedName`.
    pub fn try_from_iter<K, I>(iter: I) -> Result<Self, TypedefError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypeDefinition)>,
    {
        let mut registry = Self::new();
        for (name, typedef) in iter {
            registry.insert(name, typedef)?;
        }
        Ok(registry)
    }
}

impl TryFrom<BTreeMap<String, TypeDefinition>> for TypeRegistry {
    type Error = TypedefError;

    fn try_from(map: BTreeMap<String, TypeDefinition>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        for (name, typedef) in map {
            registry.register(name, typedef)?;
        }
        Ok(registry)
    }
}

impl Serialize for TypeRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.types.len()))?;
        for name in self.names() {
            map.serialize_entry(name, self.types[name].as_ref())?;
        }
        map.end()
    }
}

/// Collect pairs, later entries replacing earlier ones.
///
/// Pairs named after a built-in kind are skipped. Use
/// [`TypeRegistry::try_from_iter`] to reject them instead.
impl<K: Into<String>> FromIterator<(K, TypeDefinition)> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = (K, TypeDefinition)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

/// Insert pairs, replacing existing entries. Pairs named after a built-in
/// kind are skipped.
impl<K: Into<String>> Extend<(K, TypeDefinition)> for TypeRegistry {
    fn extend<I: IntoIterator<Item = (K, TypeDefinition)>>(&mut self, iter: I) {
        for (name, typedef) in iter {
            if let Err(e) = self.insert(name, typedef) {
                tracing::debug!("skipping registry entry: {}", e);
            }
        }
    }
}
