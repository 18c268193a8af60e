//! Scalar and sequence coercion into [`Target`] slots.
//!
//! Two entry points with deliberately different error policies, matching the
//! two value sources:
//!
//! - [`set_from_string`] handles environment-sourced values, which are always
//!   strings. A string that fails to parse as the field's numeric type is a
//!   hard [`EnvfigError::Coercion`]; the caller asked for an override and got
//!   garbage.
//! - [`set_from_value`] handles document-native values, which already carry a
//!   type. A mismatch (wrong kind, negative into unsigned) silently leaves
//!   the field at its prior value; config files are decoded best-effort.

use toml::Value;

use crate::error::EnvfigError;
use crate::target::Target;

/// Coerce an environment string into `target`. `key` is the dotted path,
/// used only in error reporting.
///
/// Booleans are permissive: `"true"` and `"1"` are true, anything else is
/// false. Sequence and nested targets have no string form and are left
/// untouched without error.
pub fn set_from_string(target: Target<'_>, raw: &str, key: &str) -> Result<(), EnvfigError> {
    let coercion = |source| EnvfigError::Coercion {
        key: key.to_string(),
        value: raw.to_string(),
        source,
    };

    match target {
        Target::Str(slot) => *slot = raw.to_string(),
        Target::Int(slot) => *slot = raw.parse().map_err(coercion)?,
        Target::Uint(slot) => *slot = raw.parse().map_err(coercion)?,
        Target::Bool(slot) => *slot = raw == "true" || raw == "1",
        _ => {}
    }
    Ok(())
}

/// Coerce a document-native value into `target`. Never fails; kind
/// mismatches are skipped. [`Target::Nested`] is the binder's job and is
/// ignored here.
pub fn set_from_value(target: Target<'_>, value: &Value) {
    match (target, value) {
        (Target::Str(slot), Value::String(s)) => *slot = s.clone(),
        (Target::Int(slot), Value::Integer(i)) => *slot = *i,
        // Floating document values truncate toward zero.
        (Target::Int(slot), Value::Float(f)) => *slot = *f as i64,
        (Target::Uint(slot), Value::Integer(i)) if *i >= 0 => *slot = *i as u64,
        (Target::Uint(slot), Value::Float(f)) if *f >= 0.0 => *slot = *f as u64,
        (Target::Bool(slot), Value::Boolean(b)) => *slot = *b,
        (Target::StrList(slot), Value::Array(items)) => {
            *slot = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    _ => String::new(),
                })
                .collect();
        }
        (Target::IntList(slot), Value::Array(items)) => {
            *slot = items
                .iter()
                .map(|item| match item {
                    Value::Integer(i) => *i,
                    Value::Float(f) => *f as i64,
                    _ => 0,
                })
                .collect();
        }
        (Target::UintList(slot), Value::Array(items)) => {
            *slot = items
                .iter()
                .map(|item| match item {
                    Value::Integer(i) if *i >= 0 => *i as u64,
                    Value::Float(f) if *f >= 0.0 => *f as u64,
                    _ => 0,
                })
                .collect();
        }
        (Target::BoolList(slot), Value::Array(items)) => {
            *slot = items
                .iter()
                .map(|item| match item {
                    Value::Boolean(b) => *b,
                    _ => false,
                })
                .collect();
        }
        _ => {}
    }
}
