//! The decoder instance: owns the document tree and the binding table.

use std::collections::HashMap;
use std::path::PathBuf;

use toml::Table;

use crate::bind;
use crate::env::{EnvBindings, KeyReplacer};
use crate::error::EnvfigError;
use crate::file;
use crate::normalize;
use crate::target::Bindable;

const DEFAULT_CONFIG_TYPE: &str = "toml";

/// A configuration decoder.
///
/// Setup calls (`set_config_name`, `add_config_path`, `bind_env`,
/// `automatic_env`, ...) are additive and persist for the instance's
/// lifetime. [`read_in_config`](Self::read_in_config) loads the document
/// tree, replacing any previous one wholesale;
/// [`unmarshal`](Self::unmarshal) decodes it into a [`Bindable`] target,
/// applying environment overrides.
///
/// ```no_run
/// use envfig::{Envfig, KeyReplacer};
///
/// #[derive(Default)]
/// struct Http {
///     port: u64,
/// }
/// envfig::bindable!(Http { port => Uint });
///
/// #[derive(Default)]
/// struct Config {
///     http: Http,
/// }
/// envfig::bindable!(Config { http => Nested });
///
/// # fn main() -> Result<(), envfig::EnvfigError> {
/// let mut fig = Envfig::new();
/// fig.set_config_name("application");
/// fig.add_config_path(".");
/// fig.set_env_key_replacer(KeyReplacer::new([(".", "_")]));
/// fig.automatic_env();
/// fig.read_in_config()?;
///
/// let mut config = Config::default();
/// fig.unmarshal(&mut config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Envfig {
    config_name: Option<String>,
    config_type: Option<String>,
    config_paths: Vec<PathBuf>,
    bindings: EnvBindings,
    values: Table,
}

impl Envfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the config file name without extension (e.g. `"application"`).
    pub fn set_config_name(&mut self, name: &str) {
        self.config_name = Some(name.to_string());
    }

    /// Set the config file format. Only `"toml"` is supported; the value is
    /// validated when the file is read.
    pub fn set_config_type(&mut self, typ: &str) {
        self.config_type = Some(typ.to_string());
    }

    /// Add a directory to search for the config file. Directories are
    /// searched in the order they were added; the first hit wins.
    pub fn add_config_path(&mut self, path: impl Into<PathBuf>) {
        self.config_paths.push(path.into());
    }

    /// Set the [`KeyReplacer`] used to derive environment variable names
    /// under [`automatic_env`](Self::automatic_env). For example,
    /// `KeyReplacer::new([(".", "_")])` maps `http.port` to `HTTP_PORT`.
    pub fn set_env_key_replacer(&mut self, replacer: KeyReplacer) {
        self.bindings.set_replacer(replacer);
    }

    /// Enable automatic environment overrides: before using a document value,
    /// [`unmarshal`](Self::unmarshal) checks for a variable derived from the
    /// field's dotted key.
    pub fn automatic_env(&mut self) {
        self.bindings.set_automatic();
    }

    /// Bind a dotted config key to a specific environment variable.
    /// Explicit bindings take precedence over [`automatic_env`](Self::automatic_env).
    pub fn bind_env(&mut self, key: &str, var: &str) {
        self.bindings.bind(key, var);
    }

    /// Search the configured paths for the config file, parse it, and store
    /// the key-normalized document tree, replacing any previously loaded one.
    pub fn read_in_config(&mut self) -> Result<(), EnvfigError> {
        let name = self
            .config_name
            .as_deref()
            .ok_or(EnvfigError::ConfigNameNotSet)?;
        let typ = self.config_type.as_deref().unwrap_or(DEFAULT_CONFIG_TYPE);

        let file_name = format!("{name}.{typ}");
        let (path, content) = file::read_first_match(&self.config_paths, &file_name)?;

        if typ != "toml" {
            return Err(EnvfigError::UnsupportedConfigType(typ.to_string()));
        }

        let table = file::parse_table(&path, &content)?;
        self.values = normalize::fold_keys(table);
        Ok(())
    }

    /// Decode the loaded document into `target`, with overrides from the
    /// process environment.
    pub fn unmarshal<T: Bindable>(&self, target: &mut T) -> Result<(), EnvfigError> {
        self.unmarshal_with_vars(target, std::env::vars())
    }

    /// Like [`unmarshal`](Self::unmarshal), but resolving environment
    /// overrides against a caller-supplied set of variables instead of the
    /// process environment. Lets tests pass synthetic data.
    pub fn unmarshal_with_vars<T: Bindable>(
        &self,
        target: &mut T,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), EnvfigError> {
        let env: HashMap<String, String> = vars.into_iter().collect();
        bind::bind(&self.values, target, "", &self.bindings, &env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{AppConfig, TestConfig};
    use std::fs;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn decoder_for(dir: &TempDir, content: &str) -> Envfig {
        fs::write(dir.path().join("application.toml"), content).unwrap();
        let mut fig = Envfig::new();
        fig.set_config_name("application");
        fig.add_config_path(dir.path());
        fig
    }

    #[test]
    fn read_and_unmarshal() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "[http]\nport = 8080\n");
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[])).unwrap();
        assert_eq!(cfg.http.port, 8080);
    }

    #[test]
    fn config_type_defaults_to_toml() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "[db]\nurl = \"x\"\n");
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[])).unwrap();
        assert_eq!(cfg.db.url, "x");
    }

    #[test]
    fn mixed_case_document_keys_bind() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "[Http]\nPort = 8080\n");
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[])).unwrap();
        assert_eq!(cfg.http.port, 8080);
    }

    #[test]
    fn missing_config_name_errors() {
        let mut fig = Envfig::new();
        fig.add_config_path(TempDir::new().unwrap().path());
        let err = fig.read_in_config().unwrap_err();
        assert!(matches!(err, EnvfigError::ConfigNameNotSet));
    }

    #[test]
    fn missing_config_file_errors() {
        let mut fig = Envfig::new();
        fig.set_config_name("application");
        fig.add_config_path(TempDir::new().unwrap().path());
        let err = fig.read_in_config().unwrap_err();
        assert!(matches!(err, EnvfigError::FileNotFound { .. }));
        assert!(err.to_string().contains("application.toml"));
    }

    #[test]
    fn unsupported_config_type_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("application.yaml"), "key: value\n").unwrap();

        let mut fig = Envfig::new();
        fig.set_config_name("application");
        fig.set_config_type("yaml");
        fig.add_config_path(dir.path());

        let err = fig.read_in_config().unwrap_err();
        assert!(matches!(err, EnvfigError::UnsupportedConfigType(_)));
    }

    #[test]
    fn parse_error_propagates() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "not toml [[[");
        let err = fig.read_in_config().unwrap_err();
        assert!(matches!(err, EnvfigError::Parse { .. }));
    }

    #[test]
    fn first_config_path_wins() {
        let dir1 = TempDir::new().unwrap();
        let dir2 = TempDir::new().unwrap();
        fs::write(dir1.path().join("application.toml"), "[http]\nport = 1\n").unwrap();
        fs::write(dir2.path().join("application.toml"), "[http]\nport = 2\n").unwrap();

        let mut fig = Envfig::new();
        fig.set_config_name("application");
        fig.add_config_path(dir1.path());
        fig.add_config_path(dir2.path());
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[])).unwrap();
        assert_eq!(cfg.http.port, 1);
    }

    #[test]
    fn reload_replaces_document_wholesale() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "[http]\nport = 1\n[db]\nurl = \"a\"\n");
        fig.read_in_config().unwrap();

        fs::write(dir.path().join("application.toml"), "[http]\nport = 2\n").unwrap();
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[])).unwrap();
        assert_eq!(cfg.http.port, 2);
        // db section is gone from the reloaded tree; the field keeps its default.
        assert_eq!(cfg.db.url, "");
    }

    #[test]
    fn automatic_env_overrides_file_value() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "[http]\nport = 8080\n");
        fig.set_env_key_replacer(KeyReplacer::new([(".", "_")]));
        fig.automatic_env();
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[("HTTP_PORT", "9091")]))
            .unwrap();
        assert_eq!(cfg.http.port, 9091);
    }

    #[test]
    fn bound_env_overrides_file_value() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "[db]\nurl = \"postgres://from-config\"\n");
        fig.bind_env("db.url", "DATABASE_URL");
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[("DATABASE_URL", "postgres://from-env")]))
            .unwrap();
        assert_eq!(cfg.db.url, "postgres://from-env");
    }

    #[test]
    fn invalid_env_number_is_coercion_error() {
        let dir = TempDir::new().unwrap();
        let mut fig = decoder_for(&dir, "[http]\nport = 8080\n");
        fig.set_env_key_replacer(KeyReplacer::new([(".", "_")]));
        fig.automatic_env();
        fig.read_in_config().unwrap();

        let mut cfg = TestConfig::default();
        let err = fig
            .unmarshal_with_vars(&mut cfg, vars(&[("HTTP_PORT", "not-a-number")]))
            .unwrap_err();
        assert!(matches!(err, EnvfigError::Coercion { .. }));
    }

    #[test]
    fn unmarshal_without_read_uses_empty_document() {
        let mut fig = Envfig::new();
        fig.bind_env("api.apikey", "MY_API_KEY");

        let mut cfg = AppConfig::default();
        fig.unmarshal_with_vars(&mut cfg, vars(&[("MY_API_KEY", "secret")]))
            .unwrap();
        assert_eq!(cfg.api.api_key, "secret");
    }

    #[test]
    fn unmarshal_reads_process_environment() {
        // No file, no bindings: the process env path is exercised without
        // depending on any particular variable being set.
        let fig = Envfig::new();
        let mut cfg = TestConfig::default();
        fig.unmarshal(&mut cfg).unwrap();
        assert_eq!(cfg, TestConfig::default());
    }
}
