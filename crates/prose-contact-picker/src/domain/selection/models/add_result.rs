// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    /// The entry moved to the working set. `source_exhausted` is set when its source has no
    /// more entries left to pick from.
    Added { source_exhausted: bool },
    /// The entry was picked already and has been removed from the working set.
    Deselected,
    /// A typed address named an entry that is picked already. Nothing changed.
    AlreadyAdded,
}
