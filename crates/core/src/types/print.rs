//! Human-readable rendering of type definitions.

use super::definition::TypeDefinition;
use super::engine::Engine;
use super::errors::TypedefError;
use super::kind::BuiltinKind;
use super::registry::TypeRegistry;

impl Engine {
    /// Render a definition for diagnostics, e.g. `shape(id*:int, tags:arrayOf(string))!`.
    ///
    /// References are printed as what they resolve to. A `!` suffix marks a
    /// not-null composite and a `*` suffix marks a required shape field.
    pub fn print_type(
        &self,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
    ) -> Result<String, TypedefError> {
        let mut out = String::new();
        self.print_at(typedef, registry, &mut out, 0)?;
        Ok(out)
    }

    fn print_at(
        &self,
        typedef: &TypeDefinition,
        registry: Option<&TypeRegistry>,
        out: &mut String,
        depth: usize,
    ) -> Result<(), TypedefError> {
        let depth = self.descend(depth)?;
        let (typedef, kind) = self.resolve_kind(typedef, registry)?;

        out.push_str(kind.as_str());
        match kind {
            BuiltinKind::Scalar => {
                if let Some(name) = &typedef.name {
                    out.push(':');
                    out.push_str(name);
                }
            }
            BuiltinKind::OneOf => {
                let values: Vec<String> =
                    typedef.options()?.iter().map(|option| option.value.to_string()).collect();
                out.push('(');
                out.push_str(&values.join(", "));
                out.push(')');
            }
            BuiltinKind::ArrayOf | BuiltinKind::ObjectOf => {
                out.push('(');
                self.print_at(typedef.of_type()?, registry, out, depth)?;
                out.push(')');
            }
            BuiltinKind::Shape => {
                out.push('(');
                for (i, (name, field)) in typedef.fields()?.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(name);
                    if field.is_required() {
                        out.push('*');
                    }
                    out.push(':');
                    self.print_at(field, registry, out, depth)?;
                }
                out.push(')');
            }
            _ => {}
        }

        if kind.is_nullable() && typedef.is_not_null() {
            out.push('!');
        }
        Ok(())
    }
}

/// Render a definition with the default engine.
pub fn print_type(
    typedef: &TypeDefinition,
    registry: Option<&TypeRegistry>,
) -> Result<String, TypedefError> {
    Engine::default().print_type(typedef, registry)
}
