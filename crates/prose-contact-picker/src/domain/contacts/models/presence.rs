// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

/// Presence of a remote contact as reported by the directory.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenceStatus {
    Online,
    Busy,
    Away { last_seen: Option<DateTime<Utc>> },
    Offline { last_seen: Option<DateTime<Utc>> },
}

impl PresenceStatus {
    /// The last-seen annotation to attach to the contact. Only offline contacts carry one.
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        match self {
            PresenceStatus::Offline { last_seen } => *last_seen,
            PresenceStatus::Online | PresenceStatus::Busy | PresenceStatus::Away { .. } => None,
        }
    }
}
