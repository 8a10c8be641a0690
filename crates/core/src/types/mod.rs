//! Structural type definitions and the operations over them.
//!
//! A [`TypeDefinition`] describes the shape of a value: a built-in kind such
//! as `int` or `shape`, or a reference to a user-defined type that is looked
//! up in a [`TypeRegistry`]. The engine:
//! - validates values against definitions
//! - compares definitions for equality and one-way compatibility
//! - synthesizes default values
//! - coerces values between definitions
//! - finds the definition reachable through a value path
//!
//! Registries are always passed explicitly; `None` means no user-defined
//! types are available.
//!
//! # Example
//!
//! ```
//! use proptype_core::types::{TypeDefinition, TypeRegistry, is_valid_value};
//! use serde_json::json;
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register("Point", TypeDefinition::shape([("x", TypeDefinition::int().required())]))
//!     .unwrap();
//!
//! let points = TypeDefinition::array_of(TypeDefinition::reference("Point").not_null());
//! assert!(is_valid_value(&json!([{ "x": 1 }]), &points, Some(&registry)).unwrap());
//! assert!(!is_valid_value(&json!([{ "y": 1 }]), &points, Some(&registry)).unwrap());
//! ```

pub mod coerce;
pub mod compare;
pub mod defaults;
pub mod definition;
pub mod engine;
pub mod errors;
pub mod kind;
pub mod path;
pub mod print;
pub mod registry;
pub mod resolve;
pub mod validation;
mod value;

// Re-export commonly used types
pub use coerce::coerce_value;
pub use compare::{is_compatible_type, is_equal_type};
pub use defaults::{
    DefaultOptions, make_default_deep_non_null_value, make_default_non_null_value,
    make_default_value,
};
pub use definition::{OneOfOption, TypeDefinition};
pub use engine::Engine;
pub use errors::{TypedefError, ValidationError, ValidationResult};
pub use kind::{BuiltinKind, Kind, is_builtin_kind, is_nullable_kind};
pub use path::{PathStep, get_nested_typedef};
pub use print::print_type;
pub use registry::TypeRegistry;
pub use resolve::resolve_typedef;
pub use validation::{is_valid_value, validate_value};
