// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_entry::ContactEntry;
pub use contact_item::{ContactItem, EntrySource, SelectionKey};
pub use device_contact::{DeviceContact, DeviceContactId, DeviceContactRecord};
pub use directory_error::DirectoryError;
pub use email_address::EmailAddress;
pub use merged_entry::{MergedEntry, SectionKind};
pub use presence::PresenceStatus;
pub use remote_contact::{RemoteContact, RemoteContactId, RemoteUser, UserVisibility};
pub use selection_mode::SelectionMode;

mod contact_entry;
mod contact_item;
mod device_contact;
mod directory_error;
mod email_address;
mod merged_entry;
mod presence;
mod remote_contact;
mod selection_mode;
