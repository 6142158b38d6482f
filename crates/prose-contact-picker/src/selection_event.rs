// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::dtos::ViewState;
use crate::domain::loading::models::{LoadKind, LoadState};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// Anything the list or its derived flags depend on has changed.
    ViewChanged { view: ViewState },

    /// A directory load or search started, finished, failed or was cancelled.
    LoadStateChanged { kind: LoadKind, state: LoadState },
}

/// The presentation surface. Events are delivered outside of the engine's lock, so a
/// delegate may call back into the engine.
pub trait SelectionDelegate: Send + Sync {
    fn handle_event(&self, event: SelectionEvent);
}
