// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use selection_result::SelectionResult;
pub use view_state::ViewState;

pub use crate::domain::{
    contacts::models::{
        ContactItem, DeviceContact, DeviceContactId, DeviceContactRecord, EmailAddress,
        EntrySource, MergedEntry, PresenceStatus, RemoteContact, RemoteContactId, RemoteUser,
        SectionKind, SelectionKey, SelectionMode, UserVisibility,
    },
    loading::models::{LoadFailure, LoadKind, LoadState},
    selection::models::{
        AddResult, ContactList, DeviceDirectorySnapshot, GroupOptions, SelectionError,
        SelectionSnapshot,
    },
};

mod selection_result;
mod view_state;
