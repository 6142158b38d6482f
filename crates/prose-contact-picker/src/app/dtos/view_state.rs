// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{ContactItem, SelectionMode};
use crate::domain::selection::models::ContactList;

/// Everything the presentation surface needs to render the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub mode: SelectionMode,
    /// The list to show, i.e. the search results while searching.
    pub list: ContactList,
    /// The working set in the order it was picked.
    pub added: Vec<ContactItem>,
    pub is_searching: bool,
    pub is_empty: bool,
    pub show_search_affordance: bool,
    pub badge_count: usize,
    pub has_unverified_members: bool,
    pub participant_limit_exceeded: bool,
    pub device_permission_denied: bool,
}
