// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use combined_selection::CombinedSelection;
pub use device_selection::DeviceSelection;
pub use remote_selection::RemoteSelection;

mod combined_selection;
mod device_selection;
mod remote_selection;
