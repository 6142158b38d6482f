// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::EmailAddress;

#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Remote contacts to select once the remote directory has been loaded for the first time.
    pub initially_selected: Vec<EmailAddress>,
    /// Remote contacts that are never offered, e.g. members of the chat that is being
    /// extended or users the item is shared with already.
    pub excluded_emails: Vec<EmailAddress>,
    /// Addresses that were invited already. They can be picked but are left out of the
    /// final result.
    pub already_invited: Vec<EmailAddress>,
    /// The maximum number of participants a group may have, if limited.
    pub max_participants: Option<usize>,
    /// Whether the selection is used to create a group. Only then are `GroupOptions` part of
    /// the final result.
    pub creates_group: bool,
    /// Whether to fetch the presence of remote contacts after the remote directory was loaded.
    pub request_presence: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initially_selected: vec![],
            excluded_emails: vec![],
            already_invited: vec![],
            max_participants: None,
            creates_group: false,
            request_presence: true,
        }
    }
}
