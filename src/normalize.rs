use toml::{Table, Value};

/// Lowercase every mapping key in `table`, recursively.
///
/// Document lookups during binding are by lowercased key, so folding the tree
/// once after parsing makes key matching case-insensitive. Only mapping keys
/// are touched; scalars and array elements pass through unchanged. If two
/// keys collide after folding, the later one wins. Idempotent.
pub fn fold_keys(table: Table) -> Table {
    let mut folded = Table::new();
    for (key, value) in table {
        let value = match value {
            Value::Table(inner) => Value::Table(fold_keys(inner)),
            other => other,
        };
        folded.insert(key.to_lowercase(), value);
    }
    folded
}
