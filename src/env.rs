//! Environment variable resolution for dotted config keys.
//!
//! Two mechanisms, checked in order:
//!
//! 1. **Explicit bindings** (`bind_env("db.url", "DATABASE_URL")`) map a
//!    dotted key directly to a variable name. A bound variable that is set
//!    counts as found even when its value is empty; a bound variable that is
//!    unset ends resolution for that key (no fallback to automatic mapping).
//! 2. **Automatic mapping** (`automatic_env()`) derives a candidate name by
//!    uppercasing the dotted key and applying the configured [`KeyReplacer`]
//!    (identity if none). The candidate only matches when the variable is set
//!    and non-empty.
//!
//! Resolution reads from an environment snapshot (`HashMap`) rather than
//! `std::env` directly, so tests can pass synthetic data.

use std::collections::HashMap;

/// Ordered literal substitutions applied to derived environment variable
/// names, e.g. `KeyReplacer::new([(".", "_")])` maps `http.port` to
/// `HTTP_PORT` under automatic mapping.
#[derive(Debug, Clone, Default)]
pub struct KeyReplacer {
    pairs: Vec<(String, String)>,
}

impl KeyReplacer {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// Apply each substitution pair in order.
    pub fn replace(&self, key: &str) -> String {
        let mut out = key.to_string();
        for (from, to) in &self.pairs {
            out = out.replace(from, to);
        }
        out
    }
}

/// The binding table plus the automatic-env switch and key transform.
///
/// Grows monotonically through the decoder's setup calls and is read-only
/// during binding.
#[derive(Debug, Default)]
pub struct EnvBindings {
    bindings: HashMap<String, String>,
    auto_env: bool,
    replacer: Option<KeyReplacer>,
}

impl EnvBindings {
    /// Register an explicit dotted-key to variable-name binding.
    /// The key is stored lowercased.
    pub fn bind(&mut self, key: &str, var: &str) {
        self.bindings.insert(key.to_lowercase(), var.to_string());
    }

    pub fn set_automatic(&mut self) {
        self.auto_env = true;
    }

    pub fn set_replacer(&mut self, replacer: KeyReplacer) {
        self.replacer = Some(replacer);
    }

    /// Resolve `path` (lowercase dotted key) against an environment snapshot.
    ///
    /// Explicit bindings win over automatic mapping, and an explicitly bound
    /// variable that is set-but-empty still counts as found.
    pub fn resolve(&self, path: &str, env: &HashMap<String, String>) -> Option<String> {
        if let Some(var) = self.bindings.get(path) {
            return env.get(var).cloned();
        }

        if self.auto_env {
            let candidate = match &self.replacer {
                Some(replacer) => replacer.replace(&path.to_uppercase()),
                None => path.to_uppercase(),
            };
            return env.get(&candidate).filter(|value| !value.is_empty()).cloned();
        }

        None
    }
}
