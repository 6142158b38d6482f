// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#![allow(dead_code)]

use tracing::Level;

use prose_contact_picker::dtos::{
    ContactItem, ContactList, DeviceContactRecord, MergedEntry, RemoteUser, SectionKind,
};
use prose_contact_picker::test::MockPickerDependencies;
use prose_contact_picker::PickerConfig;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::INFO)
        .try_init();
}

/// Config without presence requests, so that mocks don't need to expect them.
pub fn config() -> PickerConfig {
    PickerConfig {
        request_presence: false,
        ..Default::default()
    }
}

pub fn mock_deps(
    remote: Vec<RemoteUser>,
    device: Vec<DeviceContactRecord>,
) -> MockPickerDependencies {
    let mut deps = MockPickerDependencies::default();
    deps.directory_provider
        .expect_fetch_remote_contacts()
        .returning(move || {
            let remote = remote.clone();
            Box::pin(async move { Ok(remote) })
        });
    deps.device_directory_provider
        .expect_fetch_device_contacts()
        .returning(move || {
            let device = device.clone();
            Box::pin(async move { Ok(device) })
        });
    deps
}

/// Renders a list as strings, headers as `[Remote]`/`[Device]` and the progress row as `…`.
pub fn rows(list: &ContactList) -> Vec<String> {
    match list {
        ContactList::Remote(entries) => entries.iter().map(|c| c.name.clone()).collect(),
        ContactList::Device(entries) => entries.iter().map(|c| c.name.clone()).collect(),
        ContactList::Merged(entries) => entries
            .iter()
            .map(|entry| match entry {
                MergedEntry::Header(SectionKind::Remote) => "[Remote]".to_string(),
                MergedEntry::Header(SectionKind::Device) => "[Device]".to_string(),
                MergedEntry::Progress => "…".to_string(),
                MergedEntry::Remote(contact) => contact.name.clone(),
                MergedEntry::Device(contact) => contact.name.clone(),
            })
            .collect(),
    }
}

pub fn emails(items: &[ContactItem]) -> Vec<String> {
    items.iter().map(|item| item.email().to_string()).collect()
}
