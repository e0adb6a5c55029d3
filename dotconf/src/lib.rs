//! Typed settings from dotenv files
//!
//! `dotconf` reads a dotenv-formatted source once at startup and hands out typed
//! values on demand. Unlike dotenv loaders that export into the process
//! environment, the values stay in a [`DotEnv`] store you own and query.
//!
//! # Features
//!
//! - **Forgiving parser**: `export` prefixes, quoted values, trailing comments,
//!   `key: value` lines
//! - **Typed getters**: strings, integers and booleans, plus any [`FromValue`] type
//! - **Declarative**: build a struct with `#[derive(DotConf)]`
//! - **Distinct errors**: a missing key is never confused with a malformed value
//!
//! # File Format
//!
//! ```text
//! # comments and blank lines are ignored
//! DATABASE_URL=postgres://localhost/db
//! export PORT=8080                 # `export` and trailing comments are dropped
//! GREETING="hello # world\nbye"    # quotes keep `#`; \n and \" are expanded
//! debug: true                      # YAML-style lines work when there is no `=`
//! ```
//!
//! Lines that have neither `=` nor `:` are skipped. When a key appears twice
//! the later value wins.
//!
//! # Value Parsing
//!
//! - Strings: returned verbatim
//! - Integers: `42`, and float notation truncated toward zero (`1.0` reads as `1`)
//! - Booleans: `1 t T TRUE true True` / `0 f F FALSE false False`
//!
//! # Example
//!
//! ```rust
//! use dotconf::DotEnv;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut env = DotEnv::from_contents("S3_BUCKET=YOURS3BUCKET\nINT=1\n");
//! env.setup()?;
//!
//! assert_eq!(env.string("S3_BUCKET")?, "YOURS3BUCKET");
//! assert_eq!(env.int("INT")?, 1);
//! assert!(env.string("this-message-does-not-exist").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Derive
//!
//! ```rust
//! use dotconf::{DotConf, DotEnv};
//!
//! #[derive(Debug, DotConf)]
//! #[conf(prefix = "APP_")]
//! struct Config {
//!     pub database_url: String,
//!
//!     #[conf(default = 8080)]
//!     pub port: u16,
//!
//!     #[conf(name = "VERBOSE")]
//!     pub debug: Option<bool>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut env = DotEnv::from_contents("APP_DATABASE_URL=postgres://localhost/db\n");
//! env.setup()?;
//!
//! let config = Config::from_dotenv(&env)?;
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.debug, None);
//! # Ok(())
//! # }
//! ```
//!
//! ## `#[conf(name = "KEY")]`
//!
//! Read a key different from the upper-cased field name. The struct prefix
//! still applies.
//!
//! ## `#[conf(default)]` / `#[conf(default = value)]`
//!
//! Use `Default::default()` or the given value when the key is missing.
//!
//! ## `#[conf(deserializer = "function")]`
//!
//! Convert the raw string with `fn(&str) -> Result<T, E>` where `E: Display`,
//! for example `serde_json::from_str`.

#[doc(hidden)]
pub mod de;

mod error;
pub mod parser;
mod store;
mod value;

pub use dotconf_derive::DotConf;
pub use error::{DotEnvError, LineError};
pub use store::DotEnv;
pub use value::{FromValue, ValueError};

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;
