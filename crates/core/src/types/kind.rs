//! Kind tags for type definitions.

use serde::{Deserialize, Serialize};

/// Built-in kind of a type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    /// String value.
    String,
    /// Boolean value.
    Bool,
    /// Integral number.
    Int,
    /// Any number.
    Float,
    /// Number, boolean or string, optionally tagged with a name.
    Scalar,
    /// One of a fixed set of scalar options.
    OneOf,
    /// Object with a declared set of fields.
    Shape,
    /// Untyped object.
    Object,
    /// Object whose values all share one type.
    ObjectOf,
    /// Untyped sequence.
    Array,
    /// Sequence whose elements all share one type.
    ArrayOf,
    /// Function payload, never inspected.
    Func,
    /// Component payload, never inspected.
    Component,
}

impl BuiltinKind {
    /// Every built-in kind, in declaration order.
    pub const ALL: [BuiltinKind; 13] = [
        Self::String,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Scalar,
        Self::OneOf,
        Self::Shape,
        Self::Object,
        Self::ObjectOf,
        Self::Array,
        Self::ArrayOf,
        Self::Func,
        Self::Component,
    ];

    /// Get the tag name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Scalar => "scalar",
            Self::OneOf => "oneOf",
            Self::Shape => "shape",
            Self::Object => "object",
            Self::ObjectOf => "objectOf",
            Self::Array => "array",
            Self::ArrayOf => "arrayOf",
            Self::Func => "func",
            Self::Component => "component",
        }
    }

    /// Whether `null` can be a value of this kind.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Object | Self::ObjectOf | Self::Shape)
    }
}

impl std::fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BuiltinKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown builtin kind: {}", s))
    }
}

/// Kind tag of a type definition: a built-in kind or the name of a
/// user-defined type that must be resolved through a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Builtin(BuiltinKind),
    Reference(String),
}

impl Kind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Builtin(kind) => kind.as_str(),
            Self::Reference(name) => name,
        }
    }

    pub fn builtin(&self) -> Option<BuiltinKind> {
        match self {
            Self::Builtin(kind) => Some(*kind),
            Self::Reference(_) => None,
        }
    }
}

impl From<BuiltinKind> for Kind {
    fn from(kind: BuiltinKind) -> Self {
        Self::Builtin(kind)
    }
}

impl From<&str> for Kind {
    fn from(s: &str) -> Self {
        match s.parse::<BuiltinKind>() {
            Ok(kind) => Self::Builtin(kind),
            Err(_) => Self::Reference(s.to_string()),
        }
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        match s.parse::<BuiltinKind>() {
            Ok(kind) => Self::Builtin(kind),
            Err(_) => Self::Reference(s),
        }
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Builtin(kind) => kind.as_str().to_string(),
            Kind::Reference(name) => name,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether `kind` names a built-in kind.
pub fn is_builtin_kind(kind: &str) -> bool {
    kind.parse::<BuiltinKind>().is_ok()
}

/// Check whether `kind` names a built-in kind that admits `null`
/// (`object`, `objectOf`, `shape`).
pub fn is_nullable_kind(kind: &str) -> bool {
    kind.parse::<BuiltinKind>().is_ok_and(|k| k.is_nullable())
}
