/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Handy for writing expected trees in tests and for constructing values
/// programmatically.
///
/// # Examples
///
/// ```rust
/// use attrson::attrson;
///
/// let expected = attrson!({
///     "users": [
///         { "id": 1, "name": "Andi" },
///         { "id": 2, "name": "Brit" }
///     ],
///     "active": true
/// });
/// assert!(expected.is_object());
/// ```
#[macro_export]
macro_rules! attrson {
    // keyword literals must come before the expression fallback
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::attrson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::AttrMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::AttrMap::new();
        $(
            object.insert($key.to_string(), $crate::attrson!($value));
        )*
        $crate::Value::Object(object)
    }};

    // anything else: an expression convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
