use serde::Deserialize;

/// Tunables for an [`Engine`](crate::types::Engine).
///
/// ```toml
/// max_depth = 128
/// ```
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum nesting of type-driven recursion and reference chains before
    /// failing with `RecursionLimit`.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    64
}
