// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use display_name_ordering::{compare_display_names, compare_entries};
pub use email_validation::is_valid_email;
pub(crate) use sorted_insertion::insert_sorted_by;

mod display_name_ordering;
mod email_validation;
mod sorted_insertion;
