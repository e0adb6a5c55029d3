//! Typed lookups against a loaded store

use crate::error::DotEnvError;
use crate::store::DotEnv;
use crate::value::FromValue;

/// Load a required value using [`FromValue`]
///
/// Used by the derive macro for fields without default values.
#[doc(hidden)]
pub fn deserialize_required<T: FromValue>(env: &DotEnv, name: &str) -> Result<T, DotEnvError> {
    let value = get_value(env, name)?;
    T::from_value(value).map_err(|e| DotEnvError::parse_error::<T>(name, e))
}

/// Load a value with a default using [`FromValue`]
///
/// Only a missing key falls back to `default`; a value that fails to convert
/// is still an error. Used by the derive macro for fields with default values.
#[doc(hidden)]
pub fn deserialize_with_default<T: FromValue>(
    env: &DotEnv,
    name: &str,
    default: T,
) -> Result<T, DotEnvError> {
    match deserialize_required(env, name) {
        Err(DotEnvError::Missing { .. }) => Ok(default),
        other => other,
    }
}

/// Load an optional value using [`FromValue`]
///
/// Returns `None` if the key is not defined, `Some(T)` if it is.
/// Used by the derive macro for `Option<T>` fields.
#[doc(hidden)]
pub fn deserialize_optional<T: FromValue>(
    env: &DotEnv,
    name: &str,
) -> Result<Option<T>, DotEnvError> {
    match deserialize_required(env, name) {
        Ok(value) => Ok(Some(value)),
        Err(DotEnvError::Missing { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Get the raw stored string for `name`
///
/// Used by macro-generated code for fields with a custom deserializer.
#[doc(hidden)]
pub fn get_value<'a>(env: &'a DotEnv, name: &str) -> Result<&'a str, DotEnvError> {
    env.raw(name).ok_or_else(|| DotEnvError::missing(name))
}
