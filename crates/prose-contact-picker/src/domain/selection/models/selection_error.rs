// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),
    #[error("Typed email addresses can't be invited in this mode.")]
    ManualEntryUnsupported,
    #[error("A group with a chat link needs a title.")]
    GroupTitleRequired,
    #[error("The selection was finalized already.")]
    EngineFinalized,
}
