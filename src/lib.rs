//! Viper-style configuration for Rust: read a TOML file into a generic
//! document tree, then decode it into your own nested structs, with
//! environment variables able to override any file value.
//!
//! ```no_run
//! use envfig::{Envfig, KeyReplacer};
//!
//! #[derive(Default)]
//! struct HttpConfig {
//!     port: u64,
//! }
//! envfig::bindable!(HttpConfig { port => Uint });
//!
//! #[derive(Default)]
//! struct Config {
//!     http: HttpConfig,
//! }
//! envfig::bindable!(Config { http => Nested });
//!
//! # fn main() -> Result<(), envfig::EnvfigError> {
//! let mut fig = Envfig::new();
//! fig.set_config_name("application");
//! fig.add_config_path(".");
//! fig.set_env_key_replacer(KeyReplacer::new([(".", "_")]));
//! fig.automatic_env();
//! fig.read_in_config()?;
//!
//! let mut config = Config::default();
//! fig.unmarshal(&mut config)?;
//! // With HTTP_PORT=9091 in the environment, config.http.port is 9091
//! // regardless of what application.toml says.
//! # Ok(())
//! # }
//! ```
//!
//! # Value precedence
//!
//! ```text
//! Config file value
//!        ↑ overridden by
//! Automatic env mapping    automatic_env() + KeyReplacer
//!        ↑ overridden by
//! Explicit binding         bind_env("db.url", "DATABASE_URL")
//! ```
//!
//! Every layer is sparse: an environment variable targets a single key, and
//! keys absent from every layer leave the target field at whatever value it
//! already holds. A nested section absent from the file is still descended
//! into, so a binding like `bind_env("api.apikey", "MY_API_KEY")` populates
//! a deep field of a completely empty document.
//!
//! # Describing targets
//!
//! There is no runtime reflection: a decodable struct implements
//! [`Bindable`], describing its fields as `(name, slot)` pairs. The
//! [`bindable!`] macro writes the impl:
//!
//! ```
//! #[derive(Default)]
//! struct DbConfig {
//!     url: String,
//!     pool_size: u64,
//! }
//!
//! envfig::bindable!(DbConfig {
//!     url => Str,
//!     pool_size => Uint,
//! });
//! ```
//!
//! Document keys are matched case-insensitively: the parsed tree is folded to
//! lowercase once at load time, and field names (or their `as "..."` renames)
//! are lowercased during the walk. Keys in the document with no matching
//! field are ignored.
//!
//! # Coercion
//!
//! Environment values are strings, and asking for an override with an
//! unparseable value is an error: `"abc"` into a numeric field fails the
//! whole `unmarshal` call with [`EnvfigError::Coercion`]. Document values
//! already carry a type, and mismatches there are skipped instead: a string
//! where an integer is expected, or a negative number for an unsigned field,
//! leaves the field untouched. Boolean env values are permissive
//! (`"true"`/`"1"` are true, everything else is false). Sequences decode
//! element-wise, preserving order.
//!
//! # Concurrency
//!
//! Setup methods take `&mut self` and [`unmarshal`](Envfig::unmarshal) takes
//! `&self`: once setup is done, a shared `&Envfig` can decode into distinct
//! targets from many threads without locks.

pub mod error;
pub mod target;

mod bind;
mod coerce;
mod decoder;
mod env;
mod file;
mod normalize;

#[cfg(test)]
mod fixtures;

pub use decoder::Envfig;
pub use env::KeyReplacer;
pub use error::EnvfigError;
pub use target::{Bindable, Field, Target};
