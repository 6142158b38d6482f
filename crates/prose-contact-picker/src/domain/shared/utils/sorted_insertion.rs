// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;

/// Returns the index at which `item` must be inserted into the sorted slice `items`.
fn position_sorted_by<T, F>(items: &[T], item: &T, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    match items.binary_search_by(|probe| compare(probe, item)) {
        Ok(idx) | Err(idx) => idx,
    }
}

/// Inserts `item` into the sorted vector `items` so that it stays sorted. Returns the index
/// of the inserted item.
pub fn insert_sorted_by<T, F>(items: &mut Vec<T>, item: T, compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let idx = position_sorted_by(items, &item, compare);
    items.insert(idx, item);
    idx
}
