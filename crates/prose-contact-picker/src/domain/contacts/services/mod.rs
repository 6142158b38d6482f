// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use device_directory_provider::DeviceDirectoryProvider;
pub use directory_provider::DirectoryProvider;
pub use name_resolution_cache::NameResolutionCache;
pub use verification_policy::VerificationPolicy;

mod device_directory_provider;
mod directory_provider;
mod name_resolution_cache;
mod verification_policy;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::device_directory_provider::MockDeviceDirectoryProvider;
    pub use super::directory_provider::MockDirectoryProvider;
    pub use super::name_resolution_cache::MockNameResolutionCache;
    pub use super::verification_policy::MockVerificationPolicy;
}
