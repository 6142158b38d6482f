// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug)]
pub enum DirectoryError {
    #[error("Access to the device address book was denied.")]
    PermissionDenied,
    #[error(transparent)]
    Unavailable(#[from] anyhow::Error),
}
