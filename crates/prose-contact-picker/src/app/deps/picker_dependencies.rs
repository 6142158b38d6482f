// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::contacts::services::{
    DeviceDirectoryProvider, DirectoryProvider, NameResolutionCache, VerificationPolicy,
};

pub type DynDeviceDirectoryProvider = Arc<dyn DeviceDirectoryProvider>;
pub type DynDirectoryProvider = Arc<dyn DirectoryProvider>;
pub type DynNameResolutionCache = Arc<dyn NameResolutionCache>;
pub type DynVerificationPolicy = Arc<dyn VerificationPolicy>;

pub struct PickerDependencies {
    pub device_directory_provider: DynDeviceDirectoryProvider,
    pub directory_provider: DynDirectoryProvider,
    pub name_cache: DynNameResolutionCache,
}
