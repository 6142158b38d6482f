// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;

use crate::domain::contacts::models::ContactEntry;

/// Folds a character the way a per-character case-insensitive comparison does: upper-cased
/// first, then lower-cased. Characters whose case mapping expands into multiple characters are
/// left untouched.
fn fold_case(c: char) -> char {
    let upper = single_char(c.to_uppercase()).unwrap_or(c);
    single_char(upper.to_lowercase()).unwrap_or(upper)
}

fn single_char(mut iter: impl Iterator<Item = char>) -> Option<char> {
    let first = iter.next()?;
    iter.next().is_none().then_some(first)
}

/// Orders two display names ignoring case, breaking ties by their ordinal comparison so that
/// "ann" and "Ann" have a stable relative order.
pub fn compare_display_names(lhs: &str, rhs: &str) -> Ordering {
    lhs.chars()
        .map(fold_case)
        .cmp(rhs.chars().map(fold_case))
        .then_with(|| lhs.cmp(rhs))
}

/// Display name ordering with a final tiebreak on the email address, which makes the ordering
/// total across entries of one source.
pub fn compare_entries<T: ContactEntry>(lhs: &T, rhs: &T) -> Ordering {
    compare_display_names(lhs.display_name(), rhs.display_name())
        .then_with(|| lhs.email().cmp(rhs.email()))
}
