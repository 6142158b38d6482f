// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use merged_list_builder::build_merged_list;
pub use selection_strategy::{selection_strategy, SearchCorpus, SelectionStrategy};

pub mod impls;
mod merged_list_builder;
mod selection_strategy;
