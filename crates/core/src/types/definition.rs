//! Type definition structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::TypedefError;
use super::kind::{BuiltinKind, Kind};

/// Declarative description of a value's shape.
///
/// Attributes that do not apply to the kind are ignored. All of them are
/// optional so a reference can override any subset of its registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    /// Built-in kind or user-defined type name.
    pub kind: Kind,

    /// Whether `null` is rejected (`shape`, `object`, `objectOf`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_null: Option<bool>,

    /// Element type of `arrayOf`, value type of `objectOf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of_type: Option<Box<TypeDefinition>>,

    /// Declared fields of a `shape`, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IndexMap<String, TypeDefinition>>,

    /// Options of a `oneOf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OneOfOption>>,

    /// Whether the field is mandatory when this definition is a shape field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Tag distinguishing otherwise identical `scalar` kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A single `oneOf` option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOfOption {
    /// Display text key, not used by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_key: Option<String>,

    /// Scalar option value.
    pub value: Value,
}

impl OneOfOption {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            text_key: None,
            value: value.into(),
        }
    }
}

impl TypeDefinition {
    /// Create a definition of the given kind with no attributes.
    pub fn of_kind(kind: impl Into<Kind>) -> Self {
        Self {
            kind: kind.into(),
            not_null: None,
            of_type: None,
            fields: None,
            options: None,
            required: None,
            name: None,
        }
    }

    pub fn string() -> Self {
        Self::of_kind(BuiltinKind::String)
    }

    pub fn bool() -> Self {
        Self::of_kind(BuiltinKind::Bool)
    }

    pub fn int() -> Self {
        Self::of_kind(BuiltinKind::Int)
    }

    pub fn float() -> Self {
        Self::of_kind(BuiltinKind::Float)
    }

    pub fn scalar() -> Self {
        Self::of_kind(BuiltinKind::Scalar)
    }

    pub fn object() -> Self {
        Self::of_kind(BuiltinKind::Object)
    }

    pub fn array() -> Self {
        Self::of_kind(BuiltinKind::Array)
    }

    pub fn func() -> Self {
        Self::of_kind(BuiltinKind::Func)
    }

    pub fn component() -> Self {
        Self::of_kind(BuiltinKind::Component)
    }

    /// Create a `oneOf` definition from option values.
    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            options: Some(values.into_iter().map(OneOfOption::new).collect()),
            ..Self::of_kind(BuiltinKind::OneOf)
        }
    }

    /// Create a `shape` definition from `(name, definition)` pairs.
    pub fn shape<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, TypeDefinition)>,
        K: Into<String>,
    {
        Self {
            fields: Some(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            ..Self::of_kind(BuiltinKind::Shape)
        }
    }

    pub fn array_of(of_type: TypeDefinition) -> Self {
        Self {
            of_type: Some(Box::new(of_type)),
            ..Self::of_kind(BuiltinKind::ArrayOf)
        }
    }

    pub fn object_of(of_type: TypeDefinition) -> Self {
        Self {
            of_type: Some(Box::new(of_type)),
            ..Self::of_kind(BuiltinKind::ObjectOf)
        }
    }

    /// Create a reference to a user-defined type.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::of_kind(Kind::Reference(name.into()))
    }

    /// Mark the definition as rejecting `null`.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = Some(true);
        self
    }

    /// Mark the definition as a required shape field.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Set the scalar name tag.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_not_null(&self) -> bool {
        self.not_null.unwrap_or(false)
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Element or value type of an `arrayOf`/`objectOf`.
    pub fn of_type(&self) -> Result<&TypeDefinition, TypedefError> {
        self.of_type.as_deref().ok_or_else(|| self.invalid("missing ofType"))
    }

    /// Declared fields of a `shape`.
    pub fn fields(&self) -> Result<&IndexMap<String, TypeDefinition>, TypedefError> {
        self.fields.as_ref().ok_or_else(|| self.invalid("missing fields"))
    }

    /// Options of a `oneOf`; never empty.
    pub fn options(&self) -> Result<&[OneOfOption], TypedefError> {
        match self.options.as_deref() {
            Some([]) => Err(self.invalid("options must not be empty")),
            Some(options) => Ok(options),
            None => Err(self.invalid("missing options")),
        }
    }

    fn invalid(&self, message: &str) -> TypedefError {
        TypedefError::InvalidDefinition {
            kind: self.kind.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_nested() {
        let td: TypeDefinition = serde_json::from_value(json!({
            "kind": "shape",
            "notNull": true,
            "fields": {
                "tags": { "kind": "arrayOf", "ofType": { "kind": "string" } },
                "size": { "kind": "oneOf", "options": [
                    { "textKey": "small", "value": "s" },
                    { "value": "l" }
                ]},
                "origin": { "kind": "Point", "required": true }
            }
        }))
        .unwrap();

        assert_eq!(td.kind, Kind::Builtin(BuiltinKind::Shape));
        assert!(td.is_not_null());
        let fields = td.fields().unwrap();
        let names: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["tags", "size", "origin"]);
        assert_eq!(fields["tags"].of_type().unwrap(), &TypeDefinition::string());
        assert_eq!(fields["size"].options().unwrap()[0].text_key.as_deref(), Some("small"));
        assert_eq!(fields["origin"], TypeDefinition::reference("Point").required());
    }

    #[test]
    fn test_serialize_skips_absent_attributes() {
        let td = TypeDefinition::object_of(TypeDefinition::int()).not_null();
        assert_eq!(
            serde_json::to_value(&td).unwrap(),
            json!({ "kind": "objectOf", "notNull": true, "ofType": { "kind": "int" } })
        );
    }

    #[test]
    fn test_checked_accessors() {
        let bad = TypeDefinition::of_kind(BuiltinKind::ArrayOf);
        assert!(matches!(bad.of_type(), Err(TypedefError::InvalidDefinition { .. })));

        let bad = TypeDefinition::of_kind(BuiltinKind::Shape);
        assert!(bad.fields().is_err());

        let empty = TypeDefinition::one_of(Vec::<Value>::new());
        assert!(empty.options().is_err());
    }

    #[test]
    fn test_flags_default_to_false() {
        let td = TypeDefinition::shape(Vec::<(String, TypeDefinition)>::new());
        assert!(!td.is_not_null());
        assert!(!td.is_required());
        assert!(td.fields().unwrap().is_empty());
    }
}
