// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// Which directories a picker session draws its candidates from. Fixed for the lifetime of
/// an engine.
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
pub enum SelectionMode {
    Remote,
    Device,
    Both,
}

impl SelectionMode {
    pub fn includes_remote(&self) -> bool {
        matches!(self, SelectionMode::Remote | SelectionMode::Both)
    }

    pub fn includes_device(&self) -> bool {
        matches!(self, SelectionMode::Device | SelectionMode::Both)
    }

    /// Typed addresses can only be invited where the device directory is involved.
    pub fn accepts_manual_entries(&self) -> bool {
        self.includes_device()
    }
}
