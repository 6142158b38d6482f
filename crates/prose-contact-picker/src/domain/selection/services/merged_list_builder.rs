// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{DeviceContact, MergedEntry, RemoteContact, SectionKind};

/// Builds the sectioned list shown when both directories are active. Each non-empty side is
/// preceded by its header, remote contacts come first.
pub fn build_merged_list(remote: &[RemoteContact], device: &[DeviceContact]) -> Vec<MergedEntry> {
    let mut entries = Vec::with_capacity(remote.len() + device.len() + 2);

    if !remote.is_empty() {
        entries.push(MergedEntry::Header(SectionKind::Remote));
        entries.extend(remote.iter().cloned().map(MergedEntry::Remote));
    }

    if !device.is_empty() {
        entries.push(MergedEntry::Header(SectionKind::Device));
        entries.extend(device.iter().cloned().map(MergedEntry::Device));
    }

    entries
}
