// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{EmailAddress, SelectionMode};
use crate::domain::selection::models::GroupOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    pub emails: Vec<EmailAddress>,
    pub mode: SelectionMode,
    pub group_options: Option<GroupOptions>,
}
