// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// Options of the group that is created from the selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupOptions {
    pub title: Option<String>,
    pub end_to_end_encrypted: bool,
    pub allow_add_participants: bool,
    pub chat_link: bool,
}

impl GroupOptions {
    pub fn has_title(&self) -> bool {
        self.title
            .as_deref()
            .map(|title| !title.trim().is_empty())
            .unwrap_or(false)
    }
}
