// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use picker_config::PickerConfig;
pub use picker_dependencies::*;

mod picker_config;
mod picker_dependencies;
