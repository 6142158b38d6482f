// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use add_result::AddResult;
pub use contact_list::ContactList;
pub use group_options::GroupOptions;
pub use selection_error::SelectionError;
pub use selection_snapshot::{DeviceDirectorySnapshot, SelectionSnapshot};
pub use source_views::{matching_entries, SourceViews};

mod add_result;
mod contact_list;
mod group_options;
mod selection_error;
mod selection_snapshot;
mod source_views;
