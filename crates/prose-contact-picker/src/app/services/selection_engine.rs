// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use anyhow::{bail, Result};
use futures::future::join_all;
use futures::join;
use itertools::Itertools;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::deps::{DynVerificationPolicy, PickerConfig, PickerDependencies};
use crate::app::dtos::{SelectionResult, ViewState};
use crate::domain::contacts::models::{
    ContactItem, DeviceContact, DeviceContactRecord, DirectoryError, EmailAddress, EntrySource,
    MergedEntry, PresenceStatus, RemoteContact, RemoteContactId, RemoteUser, SelectionKey,
    SelectionMode, UserVisibility,
};
use crate::domain::loading::models::{LoadFailure, LoadKind, LoadState};
use crate::domain::loading::services::LoadCoordinator;
use crate::domain::selection::models::{
    AddResult, DeviceDirectorySnapshot, GroupOptions, SelectionError, SelectionSnapshot,
};
use crate::domain::selection::services::{selection_strategy, SelectionStrategy};
use crate::domain::shared::utils::is_valid_email;
use crate::selection_engine_builder::{SelectionEngineBuilder, UndefinedDependencies};
use crate::{SelectionDelegate, SelectionEvent};

/// Lets the user build a set of recipients from the remote directory, the device address book
/// or both while directory loads and searches are in flight.
///
/// All mutations are applied atomically under one lock. Directory loads and searches are
/// tracked by a `LoadCoordinator` so that results of superseded or cancelled loads are
/// discarded. Every change is reported to the delegate as `SelectionEvent`.
#[derive(Clone)]
pub struct SelectionEngine {
    inner: Arc<SelectionEngineInner>,
}

pub struct SelectionEngineInner {
    deps: PickerDependencies,
    verification_policy: DynVerificationPolicy,
    config: PickerConfig,
    delegate: Option<Box<dyn SelectionDelegate>>,
    mode: SelectionMode,
    state: Mutex<EngineState>,
}

struct EngineState {
    strategy: Box<dyn SelectionStrategy>,
    coordinator: LoadCoordinator,
    search_text: Option<String>,
    /// Incremented whenever the filtered views change.
    revision: u64,
    /// Restored selections waiting for the universe of their source.
    pending_selection: Vec<SelectionKey>,
    /// Consumed by the first remote universe.
    preselection: Option<Vec<EmailAddress>>,
    group_options: GroupOptions,
    device_directory_loaded: bool,
    device_permission_denied: bool,
    is_finalized: bool,
}

impl Deref for SelectionEngine {
    type Target = SelectionEngineInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl SelectionEngine {
    pub fn builder() -> SelectionEngineBuilder<UndefinedDependencies> {
        SelectionEngineBuilder::new()
    }

    pub(crate) fn new(
        deps: PickerDependencies,
        verification_policy: DynVerificationPolicy,
        config: PickerConfig,
        delegate: Option<Box<dyn SelectionDelegate>>,
        mode: SelectionMode,
    ) -> Self {
        let state = EngineState {
            strategy: selection_strategy(mode),
            coordinator: LoadCoordinator::new(),
            search_text: None,
            revision: 0,
            pending_selection: vec![],
            preselection: Some(config.initially_selected.clone()),
            group_options: GroupOptions::default(),
            device_directory_loaded: false,
            device_permission_denied: false,
            is_finalized: false,
        };

        SelectionEngine {
            inner: Arc::new(SelectionEngineInner {
                deps,
                verification_policy,
                config,
                delegate,
                mode,
                state: Mutex::new(state),
            }),
        }
    }
}

impl SelectionEngine {
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn view_state(&self) -> ViewState {
        let state = self.state.lock();
        self.build_view_state(&state)
    }

    pub fn load_state(&self, kind: LoadKind) -> LoadState {
        self.state.lock().coordinator.state(kind)
    }

    pub fn group_options(&self) -> GroupOptions {
        self.state.lock().group_options.clone()
    }
}

impl SelectionEngine {
    /// Loads every directory the mode involves.
    pub async fn load_initial(&self) {
        let remote = async {
            if self.mode.includes_remote() {
                self.load_remote_directory().await;
            }
        };
        let device = async {
            if self.mode.includes_device() {
                self.load_device_directory().await;
            }
        };
        join!(remote, device);
    }

    /// Runs `load_initial` as a background task.
    pub fn spawn_initial_load(&self) -> JoinHandle<()> {
        let engine = self.clone();
        tokio::spawn(async move { engine.load_initial().await })
    }

    /// Fetches the remote directory and makes it the remote universe. Supersedes a running
    /// remote load.
    #[tracing::instrument(skip(self))]
    pub async fn load_remote_directory(&self) -> LoadState {
        let kind = LoadKind::RemoteDirectory;

        let ticket = {
            let mut state = self.state.lock();
            if !self.mode.includes_remote() {
                warn!("Ignoring remote directory load in {} mode.", self.mode);
                return state.coordinator.state(kind);
            }
            if state.is_finalized {
                return state.coordinator.state(kind);
            }
            state.coordinator.start(kind)
        };
        self.dispatch(vec![SelectionEvent::LoadStateChanged {
            kind,
            state: LoadState::Running,
        }]);

        let result = self
            .deps
            .directory_provider
            .fetch_remote_contacts()
            .await
            .map(|users| self.ingest_remote_users(users));

        let (load_state, events, presence_ids) = {
            let mut state = self.state.lock();

            let presence_ids = match result {
                Ok(contacts) => {
                    if !state.coordinator.complete(&ticket, contacts.len()) {
                        return state.coordinator.state(kind);
                    }

                    let ids = contacts.iter().map(|c| c.id).collect::<Vec<_>>();
                    if let Some(views) = state.strategy.remote_mut() {
                        views.set_universe(contacts);
                    }
                    self.resolve_pending_selection(&mut state, EntrySource::Remote);
                    self.apply_preselection(&mut state);
                    self.filtered_views_changed(&mut state);
                    ids
                }
                Err(err) => {
                    if !state.coordinator.fail(&ticket, load_failure(&err)) {
                        return state.coordinator.state(kind);
                    }
                    Self::drop_pending_selection(&mut state, EntrySource::Remote);
                    vec![]
                }
            };

            let load_state = state.coordinator.state(kind);
            let events = vec![
                SelectionEvent::LoadStateChanged {
                    kind,
                    state: load_state.clone(),
                },
                self.view_changed(&state),
            ];
            (load_state, events, presence_ids)
        };
        self.dispatch(events);

        if self.config.request_presence && !presence_ids.is_empty() {
            self.fetch_presence(presence_ids).await;
        }

        load_state
    }

    /// Reads the device address book and makes it the device universe. Supersedes a running
    /// device load.
    #[tracing::instrument(skip(self))]
    pub async fn load_device_directory(&self) -> LoadState {
        let kind = LoadKind::DeviceDirectory;

        let (ticket, view_event) = {
            let mut state = self.state.lock();
            if !self.mode.includes_device() {
                warn!("Ignoring device directory load in {} mode.", self.mode);
                return state.coordinator.state(kind);
            }
            if state.is_finalized {
                return state.coordinator.state(kind);
            }
            let ticket = state.coordinator.start(kind);
            (ticket, self.view_changed(&state))
        };
        self.dispatch(vec![
            SelectionEvent::LoadStateChanged {
                kind,
                state: LoadState::Running,
            },
            view_event,
        ]);

        let result = self
            .deps
            .device_directory_provider
            .fetch_device_contacts()
            .await
            .map(ingest_device_records);

        let (load_state, events) = {
            let mut state = self.state.lock();

            match result {
                Ok(contacts) => {
                    if !state.coordinator.complete(&ticket, contacts.len()) {
                        return state.coordinator.state(kind);
                    }
                    if let Some(views) = state.strategy.device_mut() {
                        views.set_universe(contacts);
                    }
                    state.device_directory_loaded = true;
                    state.device_permission_denied = false;
                    self.resolve_pending_selection(&mut state, EntrySource::Device);
                    self.filtered_views_changed(&mut state);
                }
                Err(err) => {
                    let failure = load_failure(&err);
                    let permission_denied = failure == LoadFailure::NoPermission;
                    if !state.coordinator.fail(&ticket, failure) {
                        return state.coordinator.state(kind);
                    }
                    state.device_permission_denied = permission_denied;
                    Self::drop_pending_selection(&mut state, EntrySource::Device);
                }
            }

            let load_state = state.coordinator.state(kind);
            let events = vec![
                SelectionEvent::LoadStateChanged {
                    kind,
                    state: load_state.clone(),
                },
                self.view_changed(&state),
            ];
            (load_state, events)
        };
        self.dispatch(events);

        load_state
    }

    /// Cancels the running load of `kind`. Its result is discarded when it arrives.
    pub fn cancel_load(&self, kind: LoadKind) -> bool {
        let events = {
            let mut state = self.state.lock();
            if !state.coordinator.cancel(kind) {
                return false;
            }
            vec![
                SelectionEvent::LoadStateChanged {
                    kind,
                    state: LoadState::Cancelled,
                },
                self.view_changed(&state),
            ]
        };
        self.dispatch(events);
        true
    }

    /// An outgoing contact request was accepted, so the remote directory has a new member.
    pub async fn handle_contact_request_accepted(&self) -> LoadState {
        info!("Contact request accepted. Reloading remote directory.");
        self.load_remote_directory().await
    }
}

impl SelectionEngine {
    /// Adds `item` to the working set. Adding an item that is part of the working set already
    /// removes it.
    ///
    /// Panics if `item` isn't part of the universe of its source.
    pub fn add(&self, item: &ContactItem) -> Result<AddResult, SelectionError> {
        self.mutate(|state| {
            let result = state.strategy.add(item);
            self.filtered_views_changed(state);
            Ok(result)
        })
    }

    /// Removes `item` from the working set.
    ///
    /// Panics if `item` isn't part of the working set.
    pub fn remove(&self, item: &ContactItem) -> Result<(), SelectionError> {
        self.mutate(|state| {
            state.strategy.remove(&item.selection_key());
            self.filtered_views_changed(state);
            Ok(())
        })
    }

    /// Adds the item behind a row of the merged list. Returns `None` for rows that can't be
    /// selected.
    pub fn select(&self, entry: &MergedEntry) -> Result<Option<AddResult>, SelectionError> {
        match entry.item() {
            Some(item) => self.add(&item).map(Some),
            None => Ok(None),
        }
    }

    /// Adds an address typed in by the user. If the address belongs to a directory entry,
    /// that entry is added instead.
    pub fn add_typed_email(&self, text: &str) -> Result<AddResult, SelectionError> {
        let address = text.trim();

        self.mutate(|state| {
            if !self.mode.accepts_manual_entries() {
                return Err(SelectionError::ManualEntryUnsupported);
            }
            if !is_valid_email(address) {
                return Err(SelectionError::InvalidEmail(address.to_string()));
            }

            let email = EmailAddress::from(address);
            if state.strategy.is_added(&email) {
                debug!("{} was added already.", email);
                return Ok(AddResult::AlreadyAdded);
            }

            let remote = state
                .strategy
                .remote()
                .and_then(|views| views.find_in_universe(&email))
                .cloned();
            let device = state
                .strategy
                .device()
                .and_then(|views| views.find_in_universe(&email))
                .cloned();

            let item = match (remote, device) {
                (Some(contact), _) => ContactItem::Remote(contact),
                (None, Some(contact)) => ContactItem::Device(contact),
                (None, None) => ContactItem::Manual(email),
            };

            let result = state.strategy.add(&item);
            self.filtered_views_changed(state);
            Ok(result)
        })
    }

    pub fn set_group_options(&self, options: GroupOptions) -> Result<(), SelectionError> {
        let mut state = self.state.lock();
        if state.is_finalized {
            return Err(SelectionError::EngineFinalized);
        }
        state.group_options = options;
        Ok(())
    }
}

impl SelectionEngine {
    /// Searches the filtered views for `text`. A search supersedes any running search and
    /// its results replace the list until `clear_search` is called.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, text: &str) -> LoadState {
        let kind = LoadKind::TextSearch;

        let (ticket, corpus, revision) = {
            let mut state = self.state.lock();
            if state.is_finalized {
                return state.coordinator.state(kind);
            }
            state.search_text = Some(text.to_string());
            let ticket = state.coordinator.start(kind);
            (ticket, state.strategy.search_corpus(), state.revision)
        };

        tokio::task::yield_now().await;
        let results = corpus.matching(text);

        let (load_state, events) = {
            let mut state = self.state.lock();
            if !state.coordinator.is_current(&ticket) {
                debug!("Discarding stale search results for '{}'.", text);
                return state.coordinator.state(kind);
            }

            // The views changed while searching.
            let results = if state.revision != revision {
                state.strategy.search_corpus().matching(text)
            } else {
                results
            };

            state.coordinator.complete(&ticket, results.len());
            state.strategy.set_search_results(Some(results));

            let load_state = state.coordinator.state(kind);
            let events = vec![
                SelectionEvent::LoadStateChanged {
                    kind,
                    state: load_state.clone(),
                },
                self.view_changed(&state),
            ];
            (load_state, events)
        };
        self.dispatch(events);

        load_state
    }

    /// Ends the search and shows the filtered views again. A running search is cancelled.
    pub fn clear_search(&self) {
        let event = {
            let mut state = self.state.lock();
            state.coordinator.cancel(LoadKind::TextSearch);
            state.search_text = None;
            state.strategy.set_search_results(None);
            self.view_changed(&state)
        };
        self.dispatch(vec![event]);
    }
}

impl SelectionEngine {
    /// Updates the last-seen annotation of the remote contact `id`.
    pub fn apply_presence(&self, id: &RemoteContactId, presence: &PresenceStatus) {
        let event = {
            let mut state = self.state.lock();
            if state.is_finalized || !Self::apply_presence_locked(&mut state, id, presence) {
                return;
            }
            self.view_changed(&state)
        };
        self.dispatch(vec![event]);
    }

    /// Renames the remote contact `id`. A missing or blank name falls back to the email
    /// address.
    pub fn update_display_name(&self, id: &RemoteContactId, name: Option<String>) {
        let event = {
            let mut state = self.state.lock();
            if state.is_finalized {
                return;
            }
            let Some(views) = state.strategy.remote_mut() else {
                return;
            };
            let Some(email) = views
                .universe()
                .iter()
                .chain(views.added().iter())
                .find(|contact| &contact.id == id)
                .map(|contact| contact.email.clone())
            else {
                return;
            };

            let name = RemoteContact::new(*id, email.clone(), name).name;
            views.update_where(|contact| &contact.id == id, |contact| {
                contact.name = name.clone()
            });
            views.rerank(&email);
            self.filtered_views_changed(&mut state);
            self.view_changed(&state)
        };
        self.dispatch(vec![event]);
    }

    async fn fetch_presence(&self, ids: Vec<RemoteContactId>) {
        let provider = &self.deps.directory_provider;
        let results = join_all(ids.iter().map(|id| async move {
            (id, provider.fetch_presence(id).await)
        }))
        .await;

        let event = {
            let mut state = self.state.lock();
            if state.is_finalized {
                return;
            }
            let mut changed = false;
            for (id, result) in results {
                match result {
                    Ok(presence) => {
                        changed |= Self::apply_presence_locked(&mut state, id, &presence)
                    }
                    Err(err) => debug!("Failed to fetch presence of {}: {}", id, err),
                }
            }
            if !changed {
                return;
            }
            self.view_changed(&state)
        };
        self.dispatch(vec![event]);
    }

    fn apply_presence_locked(
        state: &mut EngineState,
        id: &RemoteContactId,
        presence: &PresenceStatus,
    ) -> bool {
        let Some(views) = state.strategy.remote_mut() else {
            return false;
        };
        let last_seen = presence.last_seen();
        views.update_where(
            |contact| &contact.id == id,
            |contact| contact.last_seen = last_seen,
        )
    }
}

impl SelectionEngine {
    /// Captures the session so that it can be restored after a teardown. Running directory
    /// loads are cancelled and marked for reload, a running search is cancelled.
    pub fn capture(&self) -> SelectionSnapshot {
        let (snapshot, events) = {
            let mut state = self.state.lock();

            let cancelled = [
                LoadKind::RemoteDirectory,
                LoadKind::DeviceDirectory,
                LoadKind::TextSearch,
            ]
            .into_iter()
            .filter(|kind| state.coordinator.cancel(*kind))
            .collect::<Vec<_>>();
            let needs_reload = cancelled
                .iter()
                .copied()
                .filter(LoadKind::is_directory)
                .collect::<Vec<_>>();

            let selected = state
                .strategy
                .order()
                .iter()
                .chain(state.pending_selection.iter())
                .cloned()
                .collect::<Vec<_>>();

            let device_directory = state
                .strategy
                .device()
                .filter(|_| state.device_directory_loaded)
                .map(|views| DeviceDirectorySnapshot {
                    universe: views.universe().to_vec(),
                    filtered: views.filtered().to_vec(),
                });

            let snapshot = SelectionSnapshot {
                mode: self.mode,
                selected,
                device_directory,
                needs_reload,
                device_permission_denied: state.device_permission_denied,
                group_options: state.group_options.clone(),
            };

            info!(
                "Captured {} selected entries, {} loads need reload.",
                snapshot.selected.len(),
                snapshot.needs_reload.len()
            );

            let events = cancelled
                .iter()
                .map(|kind| SelectionEvent::LoadStateChanged {
                    kind: *kind,
                    state: LoadState::Cancelled,
                })
                .collect::<Vec<_>>();

            (snapshot, events)
        };
        self.dispatch(events);

        snapshot
    }

    /// Restores a captured session into this freshly built engine. The device directory is
    /// taken from the snapshot if possible, the remote directory is always loaded again.
    /// Selections that can't be resolved against the restored universes are dropped.
    pub async fn restore(&self, snapshot: SelectionSnapshot) -> Result<()> {
        let reload_device = {
            let mut state = self.state.lock();

            if snapshot.mode != self.mode {
                bail!(
                    "Cannot restore a {} selection into a {} engine.",
                    snapshot.mode,
                    self.mode
                );
            }
            if state.is_finalized {
                bail!("Cannot restore into a finalized engine.");
            }

            info!("Restoring {} selected entries.", snapshot.selected.len());

            state.group_options = snapshot.group_options;
            state.device_permission_denied = snapshot.device_permission_denied;
            state.pending_selection = snapshot.selected.clone();
            // Restored sessions had their initial selection applied already.
            state.preselection = None;

            if self.mode.accepts_manual_entries() {
                self.resolve_pending_selection(&mut state, EntrySource::Manual);
            } else {
                Self::drop_pending_selection(&mut state, EntrySource::Manual);
            }

            let mut reload_device = false;
            if self.mode.includes_device() {
                match snapshot.device_directory {
                    Some(directory)
                        if !snapshot.needs_reload.contains(&LoadKind::DeviceDirectory) =>
                    {
                        if let Some(views) = state.strategy.device_mut() {
                            views.set_universe(directory.universe);
                        }
                        state.device_directory_loaded = true;
                        self.resolve_pending_selection(&mut state, EntrySource::Device);
                    }
                    _ if snapshot.device_permission_denied => {
                        Self::drop_pending_selection(&mut state, EntrySource::Device)
                    }
                    _ => reload_device = true,
                }
            }

            self.filtered_views_changed(&mut state);
            reload_device
        };
        self.dispatch(vec![self.view_state_event()]);

        let remote = async {
            if self.mode.includes_remote() {
                self.load_remote_directory().await;
            }
        };
        let device = async {
            if reload_device {
                self.load_device_directory().await;
            }
        };
        join!(remote, device);

        let event = {
            let mut state = self.state.lock();
            if !state.pending_selection.is_empty() {
                debug!(
                    "Dropping {} unresolved selections.",
                    state.pending_selection.len()
                );
                state.pending_selection.clear();
            }

            // Sources resolve in the order their universes arrive. Restore the captured order,
            // anything picked in the meantime goes last.
            state.strategy.order_mut().sort_by_key(|key| {
                snapshot
                    .selected
                    .iter()
                    .position(|other| other == key)
                    .unwrap_or(usize::MAX)
            });
            self.view_changed(&state)
        };
        self.dispatch(vec![event]);

        Ok(())
    }
}

impl SelectionEngine {
    /// Ends the session and returns the picked addresses. Running loads are cancelled and
    /// the engine rejects further changes.
    pub fn finalize(&self) -> Result<SelectionResult, SelectionError> {
        let mut state = self.state.lock();
        if state.is_finalized {
            return Err(SelectionError::EngineFinalized);
        }
        if self.config.creates_group
            && state.group_options.chat_link
            && !state.group_options.has_title()
        {
            return Err(SelectionError::GroupTitleRequired);
        }

        let cancelled = state.coordinator.cancel_all();
        if !cancelled.is_empty() {
            debug!("Cancelled loads {:?} on finalize.", cancelled);
        }
        state.is_finalized = true;

        let emails = state
            .strategy
            .added()
            .into_iter()
            .map(|item| item.email().clone())
            .filter(|email| !self.config.already_invited.contains(email))
            .collect::<Vec<_>>();

        info!("Finalized selection with {} addresses.", emails.len());

        Ok(SelectionResult {
            emails,
            mode: self.mode,
            group_options: self
                .config
                .creates_group
                .then(|| state.group_options.clone()),
        })
    }
}

impl SelectionEngine {
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut EngineState) -> Result<T, SelectionError>,
    ) -> Result<T, SelectionError> {
        let (result, event) = {
            let mut state = self.state.lock();
            if state.is_finalized {
                return Err(SelectionError::EngineFinalized);
            }
            let result = f(&mut *state)?;
            (result, self.view_changed(&state))
        };
        self.dispatch(vec![event]);
        Ok(result)
    }

    /// Must be called after every change to the filtered views. Recomputes the results of an
    /// active search.
    fn filtered_views_changed(&self, state: &mut EngineState) {
        state.revision += 1;

        if let Some(text) = state.search_text.as_deref() {
            let results = state.strategy.search_corpus().matching(text);
            state.strategy.set_search_results(Some(results));
        }
    }

    fn ingest_remote_users(&self, users: Vec<RemoteUser>) -> Vec<RemoteContact> {
        let total = users.len();

        let contacts = users
            .into_iter()
            .filter(|user| user.visibility == UserVisibility::Visible)
            .filter(|user| !self.config.excluded_emails.contains(&user.email))
            .unique_by(|user| user.email.clone())
            .map(|user| {
                let name = self.deps.name_cache.resolve_display_name(&user.id);
                RemoteContact::new(user.id, user.email, name)
            })
            .collect::<Vec<_>>();

        if contacts.len() != total {
            debug!(
                "Dropped {} of {} remote users during ingestion.",
                total - contacts.len(),
                total
            );
        }
        contacts
    }

    fn apply_preselection(&self, state: &mut EngineState) {
        let Some(emails) = state.preselection.take() else {
            return;
        };

        for email in emails {
            if state.strategy.is_added(&email) {
                continue;
            }
            let Some(contact) = state
                .strategy
                .remote()
                .and_then(|views| {
                    views
                        .filtered()
                        .iter()
                        .find(|contact| contact.email == email)
                })
                .cloned()
            else {
                debug!("Initially selected {} is not available.", email);
                continue;
            };
            state.strategy.add(&ContactItem::Remote(contact));
        }
    }

    /// Adds the pending selections of `source` whose entries are part of its universe and
    /// drops the others.
    fn resolve_pending_selection(&self, state: &mut EngineState, source: EntrySource) {
        let (keys, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut state.pending_selection)
            .into_iter()
            .partition(|key| key.source == source);
        state.pending_selection = remaining;

        for key in keys {
            if state.strategy.is_added(&key.email) {
                continue;
            }

            let item = match key.source {
                EntrySource::Remote => state
                    .strategy
                    .remote()
                    .and_then(|views| views.find_in_universe(&key.email))
                    .cloned()
                    .map(ContactItem::Remote),
                EntrySource::Device => state
                    .strategy
                    .device()
                    .and_then(|views| views.find_in_universe(&key.email))
                    .cloned()
                    .map(ContactItem::Device),
                EntrySource::Manual => Some(ContactItem::Manual(key.email.clone())),
            };

            match item {
                Some(item) => {
                    state.strategy.add(&item);
                }
                None => debug!("Dropping unresolvable {} selection {}.", source, key.email),
            }
        }
    }

    fn drop_pending_selection(state: &mut EngineState, source: EntrySource) {
        state.pending_selection.retain(|key| key.source != source);
    }

    fn view_changed(&self, state: &EngineState) -> SelectionEvent {
        SelectionEvent::ViewChanged {
            view: self.build_view_state(state),
        }
    }

    fn view_state_event(&self) -> SelectionEvent {
        SelectionEvent::ViewChanged {
            view: self.view_state(),
        }
    }

    fn build_view_state(&self, state: &EngineState) -> ViewState {
        let device_loading = self.mode == SelectionMode::Both
            && state.coordinator.is_running(LoadKind::DeviceDirectory);
        let list = state.strategy.rendered_list(device_loading);
        let added = state.strategy.added();

        let has_unverified_members = added.iter().any(|item| match item {
            ContactItem::Remote(contact) => !self.verification_policy.is_verified(contact),
            ContactItem::Device(_) | ContactItem::Manual(_) => true,
        });
        let participant_limit_exceeded = self
            .config
            .max_participants
            .map(|max| added.len() > max)
            .unwrap_or(false);
        let search_blocked = self.mode == SelectionMode::Device && state.device_permission_denied;
        let is_searching = state.search_text.is_some();

        ViewState {
            mode: self.mode,
            is_empty: list.is_empty() && !is_searching,
            list,
            badge_count: added.len(),
            added,
            is_searching,
            show_search_affordance: !state.strategy.is_exhausted() && !search_blocked,
            has_unverified_members,
            participant_limit_exceeded,
            device_permission_denied: state.device_permission_denied,
        }
    }

    fn dispatch(&self, events: Vec<SelectionEvent>) {
        let Some(delegate) = &self.delegate else {
            return;
        };
        for event in events {
            delegate.handle_event(event)
        }
    }
}

fn ingest_device_records(records: Vec<DeviceContactRecord>) -> Vec<DeviceContact> {
    let total = records.len();

    let contacts = records
        .into_iter()
        .filter_map(DeviceContact::from_record)
        .unique_by(|contact| contact.email.clone())
        .collect::<Vec<_>>();

    if contacts.len() != total {
        debug!(
            "Dropped {} of {} device contacts without usable email address.",
            total - contacts.len(),
            total
        );
    }
    contacts
}

fn load_failure(err: &DirectoryError) -> LoadFailure {
    match err {
        DirectoryError::PermissionDenied => LoadFailure::NoPermission,
        DirectoryError::Unavailable(err) => LoadFailure::Failed(err.to_string()),
    }
}
