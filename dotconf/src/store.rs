//! The dotenv store and its typed accessors

use crate::de;
use crate::error::DotEnvError;
use crate::parser;
use crate::value::FromValue;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;

type Generator = Box<dyn Fn() -> io::Result<Box<dyn Read>> + Send + Sync>;

/// Key/value settings read from a dotenv source.
///
/// A `DotEnv` is built around a generator that produces a readable source.
/// Nothing is read until [`setup`](Self::setup) is called; afterwards the
/// store is only read from, so a loaded `DotEnv` can be shared freely.
///
/// ```rust
/// use dotconf::DotEnv;
///
/// let mut env = DotEnv::from_contents("PORT=8080\nexport DEBUG=true\n");
/// env.setup()?;
///
/// assert_eq!(env.int("PORT")?, 8080);
/// assert!(env.bool("DEBUG")?);
/// assert!(env.string("MISSING").is_err());
/// # Ok::<(), dotconf::DotEnvError>(())
/// ```
pub struct DotEnv {
    values: HashMap<String, String>,
    origin: String,
    generator: Generator,
}

impl DotEnv {
    /// Create a loader around a source generator.
    ///
    /// `generator` is called once per [`setup`](Self::setup).
    pub fn new<F, R>(generator: F) -> Self
    where
        F: Fn() -> io::Result<R> + Send + Sync + 'static,
        R: Read + 'static,
    {
        Self::with_origin("<reader>", generator)
    }

    /// Create a loader reading the file at `path`.
    ///
    /// The file is opened on every [`setup`](Self::setup), not here.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let origin = path.display().to_string();
        Self::with_origin(origin, move || File::open(&path))
    }

    /// Create a loader over in-memory dotenv text.
    pub fn from_contents(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::with_origin("<memory>", move || Ok(Cursor::new(text.clone().into_bytes())))
    }

    /// Open and load the file at `path` in one step.
    ///
    /// # Errors
    ///
    /// Returns [`DotEnvError::Read`] if the file cannot be opened or read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DotEnvError> {
        let mut env = Self::from_file(path);
        env.setup()?;
        Ok(env)
    }

    fn with_origin<F, R>(origin: impl Into<String>, generator: F) -> Self
    where
        F: Fn() -> io::Result<R> + Send + Sync + 'static,
        R: Read + 'static,
    {
        Self {
            values: HashMap::new(),
            origin: origin.into(),
            generator: Box::new(move || generator().map(|r| Box::new(r) as Box<dyn Read>)),
        }
    }

    /// Read the whole source and rebuild the store.
    ///
    /// Malformed lines are skipped. On failure the store is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`DotEnvError::Read`] if the source cannot be produced or read.
    pub fn setup(&mut self) -> Result<(), DotEnvError> {
        tracing::debug!(origin = %self.origin, "Loading dotenv source");
        self.values.clear();

        let parsed = (self.generator)()
            .and_then(|reader| parser::parse_lines(BufReader::new(reader).lines()))
            .map_err(|source| DotEnvError::Read {
                origin: self.origin.clone(),
                source,
            });

        match parsed {
            Ok(parsed) => {
                tracing::debug!(
                    origin = %self.origin,
                    entries = parsed.values.len(),
                    skipped = parsed.skipped,
                    "Loaded dotenv source"
                );
                self.values = parsed.values;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to load dotenv source");
                Err(e)
            }
        }
    }

    /// Name of the source, as shown in errors and logs.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub(crate) fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The stored string for `name`, verbatim.
    ///
    /// # Errors
    ///
    /// [`DotEnvError::Missing`] if the key is not defined.
    pub fn string(&self, name: &str) -> Result<&str, DotEnvError> {
        de::get_value(self, name)
    }

    /// The value for `name` as an integer.
    ///
    /// Float notation is accepted and truncated, so `"1.0"` reads as `1`.
    ///
    /// # Errors
    ///
    /// [`DotEnvError::Missing`] if the key is not defined,
    /// [`DotEnvError::Parse`] if the value is not a number.
    pub fn int(&self, name: &str) -> Result<i64, DotEnvError> {
        self.get(name)
    }

    /// The value for `name` as a boolean.
    ///
    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts.
    ///
    /// # Errors
    ///
    /// [`DotEnvError::Missing`] if the key is not defined,
    /// [`DotEnvError::Parse`] if the value is not a boolean token.
    pub fn bool(&self, name: &str) -> Result<bool, DotEnvError> {
        self.get(name)
    }

    /// The value for `name` converted to `T`.
    ///
    /// # Errors
    ///
    /// [`DotEnvError::Missing`] if the key is not defined,
    /// [`DotEnvError::Parse`] if the conversion fails.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, DotEnvError> {
        de::deserialize_required(self, name)
    }

    /// Like [`get`](Self::get), but returns `default` when the key is missing.
    ///
    /// # Errors
    ///
    /// [`DotEnvError::Parse`] if the key is defined but the conversion fails.
    pub fn get_or<T: FromValue>(&self, name: &str, default: T) -> Result<T, DotEnvError> {
        de::deserialize_with_default(self, name, default)
    }

    /// Like [`get`](Self::get), but returns `None` when the key is missing.
    ///
    /// # Errors
    ///
    /// [`DotEnvError::Parse`] if the key is defined but the conversion fails.
    pub fn get_opt<T: FromValue>(&self, name: &str) -> Result<Option<T>, DotEnvError> {
        de::deserialize_optional(self, name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Defined keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Values are left out; dotenv files usually carry secrets.
impl fmt::Debug for DotEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("DotEnv")
            .field("origin", &self.origin)
            .field("keys", &keys)
            .finish()
    }
}
