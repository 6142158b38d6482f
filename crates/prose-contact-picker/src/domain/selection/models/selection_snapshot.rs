// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::contacts::models::{DeviceContact, SelectionKey, SelectionMode};
use crate::domain::loading::models::LoadKind;

use super::GroupOptions;

/// The device directory as it was at capture time, kept so that it doesn't need to be read
/// again after a restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDirectorySnapshot {
    pub universe: Vec<DeviceContact>,
    pub filtered: Vec<DeviceContact>,
}

/// Everything needed to recreate a selection session after a teardown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub mode: SelectionMode,
    /// The working set in the order it was picked.
    pub selected: Vec<SelectionKey>,
    /// Only present in modes that include the device directory and only if it was loaded.
    pub device_directory: Option<DeviceDirectorySnapshot>,
    /// Directory loads that were running at capture time and must be issued again.
    pub needs_reload: Vec<LoadKind>,
    #[serde(default)]
    pub device_permission_denied: bool,
    #[serde(default)]
    pub group_options: GroupOptions,
}
