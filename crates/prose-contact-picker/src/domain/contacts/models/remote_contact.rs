// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContactEntry, EmailAddress};

/// Opaque handle of a user in the remote directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteContactId(u64);

impl RemoteContactId {
    pub fn new(handle: u64) -> Self {
        Self(handle)
    }

    pub fn handle(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RemoteContactId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for RemoteContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum UserVisibility {
    Visible,
    Hidden,
    Inactive,
    Blocked,
}

/// A user as returned by the remote directory, before visibility filtering and name
/// resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteUser {
    pub id: RemoteContactId,
    pub email: EmailAddress,
    pub visibility: UserVisibility,
}

impl RemoteUser {
    pub fn visible(id: impl Into<RemoteContactId>, email: impl Into<EmailAddress>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            visibility: UserVisibility::Visible,
        }
    }
}

/// An already-connected contact from the remote directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteContact {
    pub id: RemoteContactId,
    pub email: EmailAddress,
    /// Resolved from the name cache, falls back to `email`.
    pub name: String,
    pub selected: bool,
    pub last_seen: Option<DateTime<Utc>>,
}

impl RemoteContact {
    pub fn new(id: RemoteContactId, email: EmailAddress, name: Option<String>) -> Self {
        let name = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| email.to_string());

        Self {
            id,
            email,
            name,
            selected: false,
            last_seen: None,
        }
    }
}

impl ContactEntry for RemoteContact {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &EmailAddress {
        &self.email
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected
    }
}
