// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use load_kind::LoadKind;
pub use load_state::{LoadFailure, LoadState, LoadTicket};

mod load_kind;
mod load_state;
