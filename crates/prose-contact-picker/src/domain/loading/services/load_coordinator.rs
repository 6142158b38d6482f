// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::domain::loading::models::{LoadFailure, LoadKind, LoadState, LoadTicket};

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    state: LoadState,
}

/// Tracks at most one in-flight load per `LoadKind`. Starting a load of a kind that is
/// already running supersedes the running one; results of superseded or cancelled loads are
/// discarded when they arrive.
#[derive(Debug, Default)]
pub struct LoadCoordinator {
    slots: HashMap<LoadKind, Slot>,
    next_generation: u64,
}

impl LoadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, kind: LoadKind) -> LoadTicket {
        self.next_generation += 1;
        let generation = self.next_generation;

        let slot = self.slots.entry(kind).or_default();
        if slot.state.is_running() {
            debug!("Superseding running {} load #{}.", kind, slot.generation);
        }
        slot.generation = generation;
        slot.state = LoadState::Running;

        debug!("Started {} load #{}.", kind, generation);
        LoadTicket { kind, generation }
    }

    /// Cancels the running load of `kind`. Returns false if no load of that kind was running.
    pub fn cancel(&mut self, kind: LoadKind) -> bool {
        let Some(slot) = self.slots.get_mut(&kind) else {
            return false;
        };
        if !slot.state.is_running() {
            return false;
        }
        debug!("Cancelled {} load #{}.", kind, slot.generation);
        slot.state = LoadState::Cancelled;
        true
    }

    /// Cancels every running load and returns the kinds that were affected.
    pub fn cancel_all(&mut self) -> Vec<LoadKind> {
        [
            LoadKind::RemoteDirectory,
            LoadKind::DeviceDirectory,
            LoadKind::TextSearch,
        ]
        .into_iter()
        .filter(|kind| self.cancel(*kind))
        .collect()
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.slots
            .get(&ticket.kind)
            .map(|slot| slot.generation == ticket.generation && slot.state.is_running())
            .unwrap_or(false)
    }

    /// Marks the load identified by `ticket` as completed. Returns false and leaves the state
    /// untouched if the load was superseded or cancelled in the meantime, in which case the
    /// caller must discard its result.
    pub fn complete(&mut self, ticket: &LoadTicket, count: usize) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Discarding stale result of {} load #{}.",
                ticket.kind, ticket.generation
            );
            return false;
        }
        info!(
            "{} load #{} completed with {} entries.",
            ticket.kind, ticket.generation, count
        );
        self.set_state(ticket.kind, LoadState::Completed { count });
        true
    }

    /// Marks the load identified by `ticket` as failed. Same discard rules as `complete`.
    pub fn fail(&mut self, ticket: &LoadTicket, failure: LoadFailure) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Discarding stale failure of {} load #{}.",
                ticket.kind, ticket.generation
            );
            return false;
        }
        warn!(
            "{} load #{} failed: {:?}",
            ticket.kind, ticket.generation, failure
        );
        self.set_state(ticket.kind, LoadState::Failed(failure));
        true
    }

    pub fn state(&self, kind: LoadKind) -> LoadState {
        self.slots
            .get(&kind)
            .map(|slot| slot.state.clone())
            .unwrap_or_default()
    }

    pub fn is_running(&self, kind: LoadKind) -> bool {
        self.slots
            .get(&kind)
            .map(|slot| slot.state.is_running())
            .unwrap_or(false)
    }

    fn set_state(&mut self, kind: LoadKind, state: LoadState) {
        if let Some(slot) = self.slots.get_mut(&kind) {
            slot.state = state
        }
    }
}
