// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::contacts::models::{DeviceContactRecord, DirectoryError};

/// Access to the device's address book.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DeviceDirectoryProvider: Send + Sync {
    /// Returns all rows of the address book. Fails with `DirectoryError::PermissionDenied`
    /// if the user didn't grant access.
    async fn fetch_device_contacts(&self) -> Result<Vec<DeviceContactRecord>, DirectoryError>;
}
