//! # attrson
//!
//! Rebuilds nested JSON-like values from flat, prefix-scoped attribute pairs.
//!
//! ## What problem does this solve?
//!
//! Structured configuration is sometimes embedded as a set of flat string
//! pairs — most commonly markup attributes — with each key encoding a
//! hierarchical path:
//!
//! ```html
//! <div cfg:users[0].name="Andi"
//!      cfg:users[0].is-admin="true"
//!      cfg:users[1].name="Brit"
//!      cfg:retry-limit="3">
//! ```
//!
//! `attrson` turns that back into one nested value: kebab-cased keys become
//! camelCase fields, `[n]` markers become arrays, and leaf strings are
//! coerced into numbers and booleans where they parse as such.
//!
//! ## Key behaviors
//!
//! - **Prefix scoping**: only pairs under the given prefix (normalized to
//!   end with `:`) contribute; everything else is ignored.
//! - **Deterministic order**: pairs are processed in case-insensitive,
//!   digit-aware order of their names, so `x[5]` comes before `x[100]`.
//! - **Append-on-sort arrays**: a terminal `[n]` marker's value is only an
//!   ordering hint; gapped or inverted indices still produce a dense array.
//! - **Typed leaves**: `"42"` → integer, `"13.37"` → float, `"true"` →
//!   boolean, anything else stays a string.
//! - **Conflicts are errors**: two paths implying different container kinds
//!   at the same position yield [`Error::ContainerConflict`] instead of
//!   silently dropping one write.
//!
//! ## Quick Start
//!
//! ```rust
//! use attrson::{extract, attrson};
//!
//! let pairs = [
//!     ("cfg:users[0].name", "Andi"),
//!     ("cfg:users[0].is-admin", "true"),
//!     ("cfg:users[1].name", "Brit"),
//!     ("cfg:retry-limit", "3"),
//!     ("other:ignored", "yes"),
//! ];
//!
//! let tree = extract(pairs, "cfg").unwrap();
//!
//! assert_eq!(
//!     attrson::Value::Object(tree),
//!     attrson!({
//!         "retryLimit": 3,
//!         "users": [
//!             { "isAdmin": true, "name": "Andi" },
//!             { "name": "Brit" }
//!         ]
//!     })
//! );
//! ```
//!
//! ## Pipeline
//!
//! Extraction is a pure, synchronous, single-pass fold over four small
//! components, each usable on its own:
//!
//! 1. [`select`] — prefix filtering and natural-order sorting
//! 2. [`path`] — decoding one attribute name into typed path segments
//! 3. [`coerce`] — string-to-scalar coercion
//! 4. [`build`] — folding the ordered pairs into the output tree
//!
//! No I/O, no shared state: each call builds a fresh tree from one snapshot
//! of input pairs, so concurrent callers need no synchronization.

pub mod build;
pub mod coerce;
pub mod error;
pub mod macros;
pub mod map;
pub mod path;
pub mod select;
pub mod value;

pub use build::{decide_container_kind, ContainerKind};
pub use coerce::coerce;
pub use error::{Error, Result};
pub use map::AttrMap;
pub use path::{decode as decode_path, Segment};
pub use select::normalize_prefix;
pub use value::{Number, Value};

/// Extracts one nested value from a flat set of attribute pairs.
///
/// Pairs whose name starts with the normalized `prefix` (a `:` is appended
/// unless already present) are selected, ordered by a case-insensitive,
/// digit-aware comparison of their names, and folded into a fresh root
/// mapping. All other pairs are ignored. An empty selection yields an empty
/// mapping.
///
/// # Examples
///
/// ```rust
/// use attrson::{extract, Value};
///
/// let pairs = [
///     ("p:numbers[0]", "1"),
///     ("p:numbers[1]", "2"),
///     ("p:numbers[2]", "3"),
/// ];
/// let tree = extract(pairs, "p").unwrap();
/// let numbers = tree.get("numbers").and_then(Value::as_array).unwrap();
/// assert_eq!(numbers.len(), 3);
/// ```
///
/// # Errors
///
/// Returns [`Error::ContainerConflict`] when two selected pairs imply
/// incompatible container kinds at the same tree position (one path says
/// mapping, the other says sequence). Every other input is handled totally:
/// malformed path segments degrade to plain field names and unparseable
/// scalars stay strings.
pub fn extract<I, K, V>(pairs: I, prefix: &str) -> Result<AttrMap>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let decoded = select::select_and_sort(pairs, prefix)
        .into_iter()
        .map(|(name, value)| (path::decode(&name), value));
    build::build_tree(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_value() {
        let tree = extract([("cfg:name", "Hello, World")], "cfg").unwrap();
        assert_eq!(tree.get("name"), Some(&Value::from("Hello, World")));
    }

    #[test]
    fn test_extract_empty_input() {
        let tree = extract(std::iter::empty::<(&str, &str)>(), "cfg").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_extract_ignores_other_prefixes() {
        let tree = extract([("cfg:a", "1"), ("app:b", "2")], "cfg").unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.get("b").is_none());
    }

    #[test]
    fn test_extract_owned_pairs() {
        let pairs = vec![("cfg:a".to_string(), "1".to_string())];
        let tree = extract(pairs, "cfg").unwrap();
        assert_eq!(tree.get("a"), Some(&Value::from(1)));
    }

    #[test]
    fn test_extract_conflict_is_reported() {
        let err = extract([("cfg:a[0]", "1"), ("cfg:a.b", "2")], "cfg").unwrap_err();
        assert!(matches!(err, Error::ContainerConflict { .. }));
    }
}
