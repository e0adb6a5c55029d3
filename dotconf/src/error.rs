//! Error types for dotenv loading and typed lookups

/// Errors that can occur when loading a dotenv source or reading values from it.
///
/// This error type covers three failure scenarios:
/// - The source could not be opened or read during setup
/// - A requested key is not present in the store
/// - A stored value cannot be converted to the requested type
#[derive(Debug, thiserror::Error)]
pub enum DotEnvError {
    /// The dotenv source could not be opened or read.
    ///
    /// Returned by [`DotEnv::setup`](crate::DotEnv::setup). The store is left
    /// empty until a later setup succeeds.
    #[error("Failed to read dotenv source '{origin}': {source}")]
    Read {
        /// Human-readable name of the source (file path or `<reader>`)
        origin: String,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },

    /// The requested key is not defined in the dotenv source.
    #[error("Key '{name}' is not defined in the dotenv source")]
    Missing {
        /// Name of the missing key
        name: String,
    },

    /// The stored value could not be converted to the requested type.
    ///
    /// The value itself is never included in the message; dotenv files
    /// commonly hold secrets.
    #[error("Failed to parse dotenv key '{name}' as {type_name}: {message}")]
    Parse {
        /// Name of the key being parsed
        name: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the conversion (built-in or custom deserializer)
        message: String,
    },
}

impl DotEnvError {
    /// Create a parse error (used by macro-generated code)
    #[doc(hidden)]
    pub fn parse_error<T>(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            name: name.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing key error
    #[doc(hidden)]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Whether this error means the key was absent, as opposed to malformed.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

/// Reasons a single non-ignorable line is not stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// Neither `=` nor `:` separates a key from a value.
    #[error("can't separate key from value")]
    MissingSeparator,
}
