//! Conversion of stored strings into typed values

use std::path::PathBuf;

/// Reasons a stored string cannot be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The value is neither an integer nor a float.
    #[error("not a number")]
    InvalidNumber,
    /// The number does not fit the target type.
    #[error("number out of range for the target type")]
    OutOfRange,
    /// The value is not one of the accepted boolean tokens.
    #[error("not a boolean (expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False)")]
    InvalidBool,
    /// The value is empty or longer than one character.
    #[error("expected exactly one character")]
    InvalidChar,
}

/// Types that can be read out of a dotenv store.
///
/// Conversions happen at lookup time; the store only ever holds strings.
///
/// Implement this for your own types to use them with
/// [`DotEnv::get`](crate::DotEnv::get) and `#[derive(DotConf)]`:
///
/// ```rust
/// use dotconf::{FromValue, ValueError};
///
/// struct Port(u16);
///
/// impl FromValue for Port {
///     fn from_value(raw: &str) -> Result<Self, ValueError> {
///         u16::from_value(raw).map(Port)
///     }
/// }
///
/// assert_eq!(Port::from_value("8080").unwrap().0, 8080);
/// ```
pub trait FromValue: Sized {
    /// Convert the raw stored string.
    fn from_value(raw: &str) -> Result<Self, ValueError>;
}

impl FromValue for String {
    fn from_value(raw: &str) -> Result<Self, ValueError> {
        Ok(raw.to_string())
    }
}

impl FromValue for PathBuf {
    fn from_value(raw: &str) -> Result<Self, ValueError> {
        Ok(PathBuf::from(raw))
    }
}

impl FromValue for char {
    fn from_value(raw: &str) -> Result<Self, ValueError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ValueError::InvalidChar),
        }
    }
}

/// Accepts the same tokens as Go's `strconv.ParseBool`, which most dotenv
/// files in the wild are written against.
impl FromValue for bool {
    fn from_value(raw: &str) -> Result<Self, ValueError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ValueError::InvalidBool),
        }
    }
}

impl FromValue for f64 {
    fn from_value(raw: &str) -> Result<Self, ValueError> {
        raw.parse().map_err(|_| ValueError::InvalidNumber)
    }
}

impl FromValue for f32 {
    fn from_value(raw: &str) -> Result<Self, ValueError> {
        raw.parse().map_err(|_| ValueError::InvalidNumber)
    }
}

/// Parse an integer, accepting float notation (`"1.0"`, `"2.5e3"`) and
/// truncating toward zero.
///
/// Plain integers are parsed exactly so large values keep full precision.
pub(crate) fn parse_integer(raw: &str) -> Result<i128, ValueError> {
    if let Ok(i) = raw.parse::<i128>() {
        return Ok(i);
    }

    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f > i128::MIN as f64 && f < i128::MAX as f64 => {
            Ok(f.trunc() as i128)
        }
        Ok(f) if f.is_finite() => Err(ValueError::OutOfRange),
        _ => Err(ValueError::InvalidNumber),
    }
}

macro_rules! impl_from_value_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(raw: &str) -> Result<Self, ValueError> {
                    let wide = parse_integer(raw)?;
                    <$ty>::try_from(wide).map_err(|_| ValueError::OutOfRange)
                }
            }
        )*
    };
}

impl_from_value_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
