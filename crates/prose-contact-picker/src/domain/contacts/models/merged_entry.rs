// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::{ContactItem, DeviceContact, RemoteContact};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SectionKind {
    Remote,
    Device,
}

/// A row of the combined list shown in `SelectionMode::Both`.
#[derive(Debug, Clone, PartialEq)]
pub enum MergedEntry {
    Header(SectionKind),
    /// Placeholder shown at the end of the list while the device directory is loading.
    Progress,
    Remote(RemoteContact),
    Device(DeviceContact),
}

impl MergedEntry {
    /// The selectable item behind this row, if any.
    pub fn item(&self) -> Option<ContactItem> {
        match self {
            MergedEntry::Header(_) | MergedEntry::Progress => None,
            MergedEntry::Remote(contact) => Some(ContactItem::Remote(contact.clone())),
            MergedEntry::Device(contact) => Some(ContactItem::Device(contact.clone())),
        }
    }
}
