//! Scalar coercion for raw attribute values.
//!
//! Attribute values arrive as strings; at leaf assignment they are coerced
//! into the most specific scalar that matches, in priority order: number,
//! boolean, string. The function is total — anything that is neither a
//! numeric literal nor a boolean keyword stays a string.

use crate::{Number, Value};

/// Coerces one raw attribute value into a scalar [`Value`].
///
/// Priority order:
/// 1. `i64` literal → [`Number::Integer`]
/// 2. finite `f64` literal → [`Number::Float`]
/// 3. case-insensitive `"true"` / `"false"` → [`Value::Bool`]
/// 4. anything else → [`Value::String`], unchanged
///
/// Parsing is strict: the whole string must be the literal, with no
/// surrounding text or whitespace (no prefix scanning). Rust's float parser
/// also accepts `"inf"` and `"nan"`; the finite filter keeps those as
/// strings so every produced number is an ordinary decimal value.
///
/// # Examples
///
/// ```rust
/// use attrson::{coerce, Number, Value};
///
/// assert_eq!(coerce("42"), Value::Number(Number::Integer(42)));
/// assert_eq!(coerce("13.37"), Value::Number(Number::Float(13.37)));
/// assert_eq!(coerce("TRUE"), Value::Bool(true));
/// assert_eq!(coerce("42 items"), Value::String("42 items".to_string()));
/// ```
#[must_use]
pub fn coerce(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Number(Number::Integer(i));
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::Number(Number::Float(f));
        }
    }
    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(coerce("0"), Value::Number(Number::Integer(0)));
        assert_eq!(coerce("5"), Value::Number(Number::Integer(5)));
        assert_eq!(coerce("-17"), Value::Number(Number::Integer(-17)));
        assert_eq!(coerce("+3"), Value::Number(Number::Integer(3)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(coerce("13.37"), Value::Number(Number::Float(13.37)));
        assert_eq!(coerce("-0.5"), Value::Number(Number::Float(-0.5)));
        assert_eq!(coerce("1e3"), Value::Number(Number::Float(1000.0)));
        // past i64 range but still a valid float
        assert_eq!(
            coerce("99999999999999999999"),
            Value::Number(Number::Float(1e20))
        );
    }

    #[test]
    fn test_booleans() {
        assert_eq!(coerce("true"), Value::Bool(true));
        assert_eq!(coerce("TRUE"), Value::Bool(true));
        assert_eq!(coerce("False"), Value::Bool(false));
    }

    #[test]
    fn test_strings_fall_through() {
        assert_eq!(coerce("hello"), Value::String("hello".to_string()));
        assert_eq!(coerce(""), Value::String(String::new()));
        assert_eq!(coerce("yes"), Value::String("yes".to_string()));
        // strict parse: no partial-prefix numbers
        assert_eq!(coerce("42px"), Value::String("42px".to_string()));
        assert_eq!(coerce(" 42"), Value::String(" 42".to_string()));
        assert_eq!(coerce("1.2.3"), Value::String("1.2.3".to_string()));
    }

    #[test]
    fn test_non_finite_stays_string() {
        assert_eq!(coerce("inf"), Value::String("inf".to_string()));
        assert_eq!(coerce("-inf"), Value::String("-inf".to_string()));
        assert_eq!(coerce("NaN"), Value::String("NaN".to_string()));
        assert_eq!(coerce("Infinity"), Value::String("Infinity".to_string()));
    }
}
