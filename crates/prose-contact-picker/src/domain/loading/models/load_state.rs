// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::LoadKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The user didn't grant access to the device address book.
    NoPermission,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Running,
    Cancelled,
    /// The load finished and its result was applied. `count` is the number of entries it
    /// delivered.
    Completed {
        count: usize,
    },
    Failed(LoadFailure),
}

impl LoadState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoadState::Running)
    }
}

/// Handed out when a load starts. A completion is only applied if its ticket is still the
/// current one for its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub kind: LoadKind,
    pub(crate) generation: u64,
}
