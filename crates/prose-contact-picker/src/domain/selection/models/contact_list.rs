// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{DeviceContact, MergedEntry, RemoteContact};

/// The list to render, shaped by the selection mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactList {
    Remote(Vec<RemoteContact>),
    Device(Vec<DeviceContact>),
    Merged(Vec<MergedEntry>),
}

impl ContactList {
    pub fn len(&self) -> usize {
        match self {
            ContactList::Remote(entries) => entries.len(),
            ContactList::Device(entries) => entries.len(),
            ContactList::Merged(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
