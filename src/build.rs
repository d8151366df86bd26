//! Tree assembly from sorted, decoded attribute pairs.
//!
//! The final pipeline stage folds `(path, raw value)` pairs, in selector
//! order, into one nested [`Value`] tree rooted at a mapping. Containers are
//! created on first touch; the kind of a fresh container is decided by the
//! *next* path segment ([`decide_container_kind`]) and never changes
//! afterwards.
//!
//! Array markers follow two deliberately distinct policies, preserved from
//! the reference behavior:
//!
//! - **Intermediate markers** write positionally: `users[5].name` lands in
//!   slot 5, growing the sequence with `Null` fillers for any skipped slots.
//!   Slot indices are taken literally, so an attribute like `a[4000000000].b`
//!   allocates that many filler slots; bound attribute names before
//!   extraction when the input is untrusted.
//! - **Terminal markers** append: the marker's value is discarded and the
//!   coerced scalar is pushed in processing order, so gapped or inverted
//!   indices (`x[100]`, `x[5]`, `x[1]`) still compact into a dense array
//!   ordered by attribute name.
//!
//! A pair whose path contradicts the established kind of a container (or
//! runs into an existing scalar) yields [`Error::ContainerConflict`] instead
//! of clobbering the earlier write.

use crate::coerce::coerce;
use crate::path::{render, Segment};
use crate::{AttrMap, Error, Result, Value};
use std::fmt;

/// The two container kinds a path position can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Mapping,
    Sequence,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Mapping => write!(f, "mapping"),
            ContainerKind::Sequence => write!(f, "sequence"),
        }
    }
}

/// Decides what kind of container to create at a path position, given the
/// segment that will descend into it next: an array marker needs a
/// sequence, a field name needs a mapping.
#[must_use]
pub fn decide_container_kind(next: &Segment) -> ContainerKind {
    match next {
        Segment::Index(_) => ContainerKind::Sequence,
        Segment::Field(_) => ContainerKind::Mapping,
    }
}

fn fresh_container(kind: ContainerKind) -> Value {
    match kind {
        ContainerKind::Mapping => Value::Object(AttrMap::new()),
        ContainerKind::Sequence => Value::Array(Vec::new()),
    }
}

fn conflict(position: &[Segment], expected: ContainerKind, found: &'static str) -> Error {
    let path = render(position);
    let path = if path.is_empty() {
        "(root)".to_string()
    } else {
        path
    };
    Error::container_conflict(path, expected, found)
}

/// Folds sorted, decoded pairs into the root mapping.
///
/// Pairs must already be in selector order; no re-sorting happens here. A
/// pair whose path decoded to zero segments is skipped.
pub(crate) fn build_tree<I>(pairs: I) -> Result<AttrMap>
where
    I: IntoIterator<Item = (Vec<Segment>, String)>,
{
    let mut root = AttrMap::new();
    for (path, raw) in pairs {
        insert(&mut root, &path, &raw)?;
    }
    Ok(root)
}

fn insert(root: &mut AttrMap, path: &[Segment], raw: &str) -> Result<()> {
    let Some((terminal, walk)) = path.split_last() else {
        return Ok(());
    };

    if walk.is_empty() {
        return match terminal {
            Segment::Field(key) => {
                root.insert(key.clone(), coerce(raw));
                Ok(())
            }
            // the root is always a mapping; a bare marker has nowhere to append
            Segment::Index(_) => Err(conflict(&[], ContainerKind::Sequence, "mapping")),
        };
    }

    // First step leaves the root mapping.
    let mut current = match &walk[0] {
        Segment::Field(key) => {
            let kind = decide_container_kind(&path[1]);
            root.entry(key.clone())
                .or_insert_with(|| fresh_container(kind))
        }
        Segment::Index(_) => {
            return Err(conflict(&[], ContainerKind::Sequence, "mapping"));
        }
    };

    for (depth, segment) in walk.iter().enumerate().skip(1) {
        current = descend(current, segment, &path[depth + 1], &path[..depth])?;
    }

    match (terminal, current) {
        (Segment::Field(key), Value::Object(map)) => {
            map.insert(key.clone(), coerce(raw));
            Ok(())
        }
        // AppendOnSort: the marker's value is an ordering hint already
        // consumed by the sorter; final array order is processing order.
        (Segment::Index(_), Value::Array(seq)) => {
            seq.push(coerce(raw));
            Ok(())
        }
        (Segment::Field(_), found) => {
            Err(conflict(walk, ContainerKind::Mapping, found.kind_name()))
        }
        (Segment::Index(_), found) => {
            Err(conflict(walk, ContainerKind::Sequence, found.kind_name()))
        }
    }
}

/// Steps from `current` through one intermediate segment, creating the child
/// container on demand. `position` is the path up to (excluding) `segment`,
/// used only for error context.
fn descend<'a>(
    current: &'a mut Value,
    segment: &Segment,
    next: &Segment,
    position: &[Segment],
) -> Result<&'a mut Value> {
    match (segment, current) {
        (Segment::Field(key), Value::Object(map)) => {
            let kind = decide_container_kind(next);
            Ok(map
                .entry(key.clone())
                .or_insert_with(|| fresh_container(kind)))
        }
        // PositionalArrayWrite: intermediate markers index directly and may
        // leave Null holes behind non-contiguous indices.
        (Segment::Index(index), Value::Array(seq)) => {
            // decode rejects usize::MAX, so index + 1 cannot overflow
            if *index >= seq.len() {
                seq.resize(index + 1, Value::Null);
            }
            let slot = &mut seq[*index];
            if slot.is_null() {
                *slot = fresh_container(decide_container_kind(next));
            }
            Ok(slot)
        }
        (Segment::Field(_), found) => {
            Err(conflict(position, ContainerKind::Mapping, found.kind_name()))
        }
        (Segment::Index(_), found) => Err(conflict(
            position,
            ContainerKind::Sequence,
            found.kind_name(),
        )),
    }
}
