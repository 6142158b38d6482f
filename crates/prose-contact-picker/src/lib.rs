// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{PickerConfig, PickerDependencies};
pub use app::dtos;
pub use app::services::SelectionEngine;
pub use selection_engine_builder::{SelectionEngineBuilder, UndefinedDependencies};
pub use selection_event::{SelectionDelegate, SelectionEvent};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
pub mod domain;
pub mod infra;
mod selection_engine_builder;
mod selection_event;
