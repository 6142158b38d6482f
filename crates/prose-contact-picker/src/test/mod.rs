// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use gated_directory_provider::{DeviceGate, GatedDirectoryProvider, RemoteGate};
pub use mock_picker_dependencies::MockPickerDependencies;
pub use recording_delegate::RecordingDelegate;

mod gated_directory_provider;

pub mod mock_data {
    use crate::domain::contacts::models::{
        DeviceContactId, DeviceContactRecord, RemoteContactId, RemoteUser, UserVisibility,
    };

    pub fn remote_user(id: u64, email: &str) -> RemoteUser {
        RemoteUser::visible(id, email)
    }

    pub fn hidden_remote_user(id: u64, email: &str) -> RemoteUser {
        RemoteUser {
            id: RemoteContactId::new(id),
            email: email.into(),
            visibility: UserVisibility::Hidden,
        }
    }

    pub fn device_record(id: i64, name: &str, email: &str) -> DeviceContactRecord {
        DeviceContactRecord {
            id: DeviceContactId::new(id),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }

    pub fn device_record_without_email(id: i64, name: &str) -> DeviceContactRecord {
        DeviceContactRecord {
            id: DeviceContactId::new(id),
            name: Some(name.to_string()),
            email: None,
        }
    }
}

#[macro_export]
macro_rules! email {
    ($address:expr) => {
        $crate::dtos::EmailAddress::from($address)
    };
}
