//! Attribute-name path decoding.
//!
//! An attribute name (with its prefix already stripped) encodes a path into
//! the output tree: `.`-separated parts, each part either a plain field name
//! (possibly kebab-cased) or a field with a trailing `[n]` array marker.
//!
//! Rules:
//! - `a.b.c` decodes to three field segments
//! - `best-name-ever` becomes the single field `bestNameEver`
//! - `users[3]` decodes to the field `users` followed by the marker `3`
//! - `[3]` (empty base) decodes to just the marker
//! - an empty part (doubled separator) contributes no segment
//! - anything else, including unmatched brackets, degrades to a plain field
//!
//! Decoding never fails; malformed input just produces fewer or plainer
//! segments.

use std::fmt;

/// One decoded step of an attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An object field, already camelCase-normalized. Never empty.
    Field(String),
    /// An array marker. The integer is an ordering/position hint, not
    /// necessarily a storage index (terminal markers append in sort order).
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, "{}", name),
            Segment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Renders a run of segments back into dotted/bracketed form, for error
/// messages: `users[0].name`.
pub(crate) fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Segment::Index(i) => {
                out.push('[');
                out.push_str(&i.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// Converts kebab-case text to camelCase.
///
/// The first `-`-chunk is kept verbatim; every subsequent non-empty chunk
/// has its first character upper-cased and is concatenated directly. Input
/// without a hyphen is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use attrson::path::camel_case;
///
/// assert_eq!(camel_case("best-name-ever"), "bestNameEver");
/// assert_eq!(camel_case("plain"), "plain");
/// assert_eq!(camel_case("a--b"), "aB");
/// ```
#[must_use]
pub fn camel_case(text: &str) -> String {
    if !text.contains('-') {
        return text.to_string();
    }
    let mut chunks = text.split('-');
    let mut out = String::with_capacity(text.len());
    if let Some(first) = chunks.next() {
        out.push_str(first);
    }
    for chunk in chunks {
        let mut chars = chunk.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Matches a trailing `[digits]` on a path part, returning the (possibly
/// empty) base and the parsed index. Anything that doesn't match exactly,
/// including an index that doesn't fit below `usize::MAX`, is not an array
/// part.
fn split_array_part(part: &str) -> Option<(&str, usize)> {
    let body = part.strip_suffix(']')?;
    let open = body.rfind('[')?;
    let digits = &body[open + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // positional writes need room for index + 1 slots, so usize::MAX is out
    // of range just like anything that fails the parse
    let index = digits
        .parse::<usize>()
        .ok()
        .filter(|index| *index < usize::MAX)?;
    Some((&body[..open], index))
}

/// Decodes one prefix-stripped attribute name into an ordered segment list.
///
/// # Examples
///
/// ```rust
/// use attrson::path::{decode, Segment};
///
/// assert_eq!(
///     decode("users[2].first-name"),
///     vec![
///         Segment::Field("users".to_string()),
///         Segment::Index(2),
///         Segment::Field("firstName".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn decode(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        if let Some((base, index)) = split_array_part(part) {
            if !base.is_empty() {
                segments.push(Segment::Field(camel_case(base)));
            }
            segments.push(Segment::Index(index));
        } else {
            let field = camel_case(part);
            if !field.is_empty() {
                segments.push(Segment::Field(field));
            }
        }
    }
    segments
}
