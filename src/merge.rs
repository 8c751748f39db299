//! Scope merging: nearest scope wins.
//!
//! Mappings arrive nearest-first, in resolver order. They are applied
//! farthest-first so a closer scope replaces any entry a farther scope set
//! for the same key. Replacement is whole-entry; values are never combined.

use crate::description::Mapping;

/// Fold nearest-first mappings into one mapping.
pub fn merge<I>(mappings: I) -> Mapping
where
    I: IntoIterator<Item = Mapping>,
    I::IntoIter: DoubleEndedIterator,
{
    mappings
        .into_iter()
        .rev()
        .fold(Mapping::new(), |mut acc, layer| {
            for entry in layer {
                acc.insert(entry);
            }
            acc
        })
}
