// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LoadKind {
    RemoteDirectory,
    DeviceDirectory,
    TextSearch,
}

impl LoadKind {
    /// Directory loads are worth replaying after a teardown, searches are not.
    pub fn is_directory(&self) -> bool {
        matches!(self, LoadKind::RemoteDirectory | LoadKind::DeviceDirectory)
    }
}
