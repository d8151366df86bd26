//! Attribute selection and ordering.
//!
//! The first pipeline stage: keep only the pairs scoped under the requested
//! prefix, strip that prefix, and fix the processing order. The order is the
//! single source of determinism for array assembly downstream — terminal
//! array markers append in exactly this order — so the comparison is
//! specified precisely: case-insensitive, with embedded digit runs compared
//! as numbers (`x[5]` sorts before `x[100]`).
//!
//! The comparison is implemented as an explicit sort-key extraction rather
//! than a custom comparator, so the key itself can be unit-tested.

/// One token of a natural-order sort key.
///
/// Digit runs become `Number` tokens, everything else becomes lowercased
/// `Text` tokens. Variant order matters: a digit run sorts before any text
/// at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SortPart {
    Number(u128),
    Text(String),
}

/// Extracts the natural-order sort key for an attribute name.
///
/// Splits the name into alternating text and ASCII-digit runs; text runs are
/// lowercased, digit runs are parsed numerically. Runs too long for `u128`
/// saturate to `u128::MAX`, which still places them after every
/// representable run.
pub(crate) fn sort_key(name: &str) -> Vec<SortPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for ch in name.chars() {
        if ch.is_ascii_digit() {
            if !text.is_empty() {
                parts.push(SortPart::Text(std::mem::take(&mut text)));
            }
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                parts.push(SortPart::Number(flush_digits(&mut digits)));
            }
            text.extend(ch.to_lowercase());
        }
    }
    if !digits.is_empty() {
        parts.push(SortPart::Number(flush_digits(&mut digits)));
    }
    if !text.is_empty() {
        parts.push(SortPart::Text(text));
    }
    parts
}

fn flush_digits(digits: &mut String) -> u128 {
    let value = digits.parse::<u128>().unwrap_or(u128::MAX);
    digits.clear();
    value
}

/// Normalizes a prefix to end with exactly one `:` separator.
///
/// # Examples
///
/// ```rust
/// use attrson::select::normalize_prefix;
///
/// assert_eq!(normalize_prefix("cfg"), "cfg:");
/// assert_eq!(normalize_prefix("cfg:"), "cfg:");
/// ```
#[must_use]
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.ends_with(':') {
        prefix.to_string()
    } else {
        format!("{}:", prefix)
    }
}

/// Filters `pairs` down to those scoped under `prefix`, strips the
/// normalized prefix from each name, and sorts by the stripped name under
/// the natural-order comparison.
///
/// An empty result is valid and produces an empty root mapping downstream.
pub(crate) fn select_and_sort<I, K, V>(pairs: I, prefix: &str) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let prefix = normalize_prefix(prefix);
    let mut selected: Vec<(String, String)> = pairs
        .into_iter()
        .filter_map(|(name, value)| {
            let stripped = name.as_ref().strip_prefix(&prefix)?;
            Some((stripped.to_string(), value.as_ref().to_string()))
        })
        .collect();
    selected.sort_by_cached_key(|(name, _)| sort_key(name));
    selected
}
