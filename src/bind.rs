//! The recursive descent binder.
//!
//! Walks a [`Bindable`] target field by field, and for each one resolves the
//! value with a fixed precedence:
//!
//! 1. Environment (explicit binding, then automatic mapping), coerced with
//!    the string rules.
//! 2. The document tree, coerced with the native rules.
//! 3. Neither: the field keeps its prior value.
//!
//! Nested targets are entered even when the document has no matching section,
//! so an environment binding like `api.apikey` can populate a deep field of
//! an otherwise empty document. The walk carries no state beyond the call
//! stack; binding is not transactional, so fields set before a coercion
//! failure stay set.

use std::collections::HashMap;

use toml::{Table, Value};

use crate::coerce;
use crate::env::EnvBindings;
use crate::error::EnvfigError;
use crate::target::{Bindable, Target};

/// Bind `table` (and any environment overrides) into `target`.
///
/// `prefix` is the dotted path of `table` within the document; pass `""` at
/// the root. Operates on pre-loaded data with no I/O, so the full pipeline is
/// testable with synthetic tables and environment snapshots.
pub fn bind(
    table: &Table,
    target: &mut dyn Bindable,
    prefix: &str,
    bindings: &EnvBindings,
    env: &HashMap<String, String>,
) -> Result<(), EnvfigError> {
    for field in target.fields() {
        let name = field.name.to_lowercase();
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        // Environment wins over the document, even when both supply a value.
        if let Some(raw) = bindings.resolve(&path, env) {
            coerce::set_from_string(field.target, &raw, &path)?;
            continue;
        }

        match table.get(&name) {
            // Absent sections are still entered, so environment-only values
            // deep in the tree can land.
            None => {
                if let Target::Nested(inner) = field.target {
                    bind(&Table::new(), inner, &path, bindings, env)?;
                }
            }
            Some(value) => match field.target {
                Target::Nested(inner) => {
                    if let Value::Table(section) = value {
                        bind(section, inner, &path, bindings, env)?;
                    }
                }
                scalar => coerce::set_from_value(scalar, value),
            },
        }
    }
    Ok(())
}
