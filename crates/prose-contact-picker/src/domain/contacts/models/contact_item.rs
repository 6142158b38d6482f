// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use super::{ContactEntry, DeviceContact, EmailAddress, RemoteContact};

/// Where a selected item came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    Remote,
    Device,
    Manual,
}

/// A selectable item, tagged with its source.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactItem {
    Remote(RemoteContact),
    Device(DeviceContact),
    /// An address typed in by the user that isn't backed by any directory.
    Manual(EmailAddress),
}

/// Identifies a selected item independently of the directory data it was built from. Used to
/// re-resolve selections after a reload. Email addresses are unique within a source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    pub source: EntrySource,
    pub email: EmailAddress,
}

impl SelectionKey {
    pub fn new(source: EntrySource, email: impl Into<EmailAddress>) -> Self {
        Self {
            source,
            email: email.into(),
        }
    }
}

impl ContactItem {
    pub fn email(&self) -> &EmailAddress {
        match self {
            ContactItem::Remote(contact) => &contact.email,
            ContactItem::Device(contact) => &contact.email,
            ContactItem::Manual(email) => email,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            ContactItem::Remote(contact) => contact.display_name(),
            ContactItem::Device(contact) => contact.display_name(),
            ContactItem::Manual(email) => email.as_str(),
        }
    }

    pub fn source(&self) -> EntrySource {
        match self {
            ContactItem::Remote(_) => EntrySource::Remote,
            ContactItem::Device(_) => EntrySource::Device,
            ContactItem::Manual(_) => EntrySource::Manual,
        }
    }

    pub fn selection_key(&self) -> SelectionKey {
        SelectionKey::new(self.source(), self.email().clone())
    }
}

impl From<RemoteContact> for ContactItem {
    fn from(value: RemoteContact) -> Self {
        ContactItem::Remote(value)
    }
}

impl From<DeviceContact> for ContactItem {
    fn from(value: DeviceContact) -> Self {
        ContactItem::Device(value)
    }
}
