//! Error types for attribute extraction.
//!
//! The extractor is deliberately total over almost all inputs: malformed
//! path segments degrade to plain field names and scalar coercion never
//! fails. The one condition it refuses to paper over is a *structural
//! conflict*: two attribute paths implying incompatible container kinds at
//! the same tree position (one says mapping, the other says sequence). The
//! original behavior for that case was silent corruption of one of the two
//! writes; here it is a reported error.
//!
//! ## Examples
//!
//! ```rust
//! use attrson::{extract, Error};
//!
//! // `items` is first built as a sequence, then addressed as a mapping.
//! let pairs = [("cfg:items[0]", "1"), ("cfg:items.name", "x")];
//! let err = extract(pairs, "cfg").unwrap_err();
//! assert!(matches!(err, Error::ContainerConflict { .. }));
//! ```

use crate::build::ContainerKind;
use thiserror::Error;

/// Errors reported during attribute extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two attribute paths imply incompatible container kinds at the same
    /// tree position.
    #[error("conflicting container kind at `{path}`: path requires a {expected}, found {found}")]
    ContainerConflict {
        /// The rendered path position where the conflict occurred, e.g. `users[0].name`.
        path: String,
        /// The container kind the current path segment requires.
        expected: ContainerKind,
        /// The kind of the value already present at that position.
        found: &'static str,
    },
}

impl Error {
    /// Creates a container-conflict error for the given tree position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrson::{Error, ContainerKind};
    ///
    /// let err = Error::container_conflict("users[0]", ContainerKind::Sequence, "mapping");
    /// assert!(err.to_string().contains("users[0]"));
    /// ```
    pub fn container_conflict(
        path: impl Into<String>,
        expected: ContainerKind,
        found: &'static str,
    ) -> Self {
        Error::ContainerConflict {
            path: path.into(),
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message() {
        let err = Error::container_conflict("users[0].name", ContainerKind::Mapping, "sequence");
        let msg = err.to_string();
        assert!(msg.contains("`users[0].name`"));
        assert!(msg.contains("requires a mapping"));
        assert!(msg.contains("found sequence"));
    }
}
