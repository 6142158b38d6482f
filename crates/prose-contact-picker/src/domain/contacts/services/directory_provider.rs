// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::contacts::models::{
    DirectoryError, PresenceStatus, RemoteContactId, RemoteUser,
};

/// Access to the remote account's contact directory.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DirectoryProvider: Send + Sync {
    async fn fetch_remote_contacts(&self) -> Result<Vec<RemoteUser>, DirectoryError>;
    async fn fetch_presence(&self, id: &RemoteContactId)
        -> Result<PresenceStatus, DirectoryError>;
}
