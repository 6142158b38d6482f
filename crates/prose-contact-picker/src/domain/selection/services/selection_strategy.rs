// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{
    ContactItem, DeviceContact, EmailAddress, EntrySource, RemoteContact, SelectionKey,
    SelectionMode,
};
use crate::domain::selection::models::{matching_entries, AddResult, ContactList, SourceViews};

use super::impls::{CombinedSelection, DeviceSelection, RemoteSelection};

/// Creates the strategy for `mode`.
pub fn selection_strategy(mode: SelectionMode) -> Box<dyn SelectionStrategy> {
    match mode {
        SelectionMode::Remote => Box::<RemoteSelection>::default(),
        SelectionMode::Device => Box::<DeviceSelection>::default(),
        SelectionMode::Both => Box::<CombinedSelection>::default(),
    }
}

/// A copy of the `filtered` views a search runs against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCorpus {
    pub remote: Vec<RemoteContact>,
    pub device: Vec<DeviceContact>,
}

impl SearchCorpus {
    pub fn matching(&self, needle: &str) -> SearchCorpus {
        SearchCorpus {
            remote: matching_entries(&self.remote, needle),
            device: matching_entries(&self.device, needle),
        }
    }

    pub fn len(&self) -> usize {
        self.remote.len() + self.device.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owns the views of the directories involved in one `SelectionMode` together with the order
/// in which the user picked entries across them.
pub trait SelectionStrategy: Send + Sync {
    fn mode(&self) -> SelectionMode;

    fn remote(&self) -> Option<&SourceViews<RemoteContact>>;
    fn remote_mut(&mut self) -> Option<&mut SourceViews<RemoteContact>>;
    fn device(&self) -> Option<&SourceViews<DeviceContact>>;
    fn device_mut(&mut self) -> Option<&mut SourceViews<DeviceContact>>;

    /// Keys of the working set, oldest first.
    fn order(&self) -> &[SelectionKey];
    fn order_mut(&mut self) -> &mut Vec<SelectionKey>;

    /// The list to render. `device_loading` is set while the device directory is being read.
    fn rendered_list(&self, device_loading: bool) -> ContactList;

    /// Adds `item` to the working set, or removes it if it's part of it already. The working
    /// set is keyed by email, so picking an address that was added from another source
    /// removes that entry instead.
    ///
    /// Panics if `item` belongs to a directory this strategy doesn't manage.
    fn add(&mut self, item: &ContactItem) -> AddResult {
        let key = item.selection_key();
        let mode = self.mode();

        if let Some(existing) = self
            .order()
            .iter()
            .find(|other| other.email == key.email && other.source != key.source)
            .cloned()
        {
            self.remove(&existing);
            return AddResult::Deselected;
        }

        let result = match item {
            ContactItem::Remote(contact) => self
                .remote_mut()
                .unwrap_or_else(|| panic!("Remote contact added in {mode} mode."))
                .add(&contact.email),
            ContactItem::Device(contact) => self
                .device_mut()
                .unwrap_or_else(|| panic!("Device contact added in {mode} mode."))
                .add(&contact.email),
            ContactItem::Manual(_) if self.order().contains(&key) => AddResult::Deselected,
            ContactItem::Manual(_) => AddResult::Added {
                source_exhausted: false,
            },
        };

        match result {
            AddResult::Added { .. } => self.order_mut().push(key),
            AddResult::Deselected => self.order_mut().retain(|other| other != &key),
            AddResult::AlreadyAdded => (),
        }

        result
    }

    /// Removes the entry identified by `key` from the working set.
    ///
    /// Panics if the entry isn't part of the working set.
    fn remove(&mut self, key: &SelectionKey) {
        let mode = self.mode();

        match key.source {
            EntrySource::Remote => {
                self.remote_mut()
                    .unwrap_or_else(|| panic!("Remote contact removed in {mode} mode."))
                    .remove(&key.email);
            }
            EntrySource::Device => {
                self.device_mut()
                    .unwrap_or_else(|| panic!("Device contact removed in {mode} mode."))
                    .remove(&key.email);
            }
            EntrySource::Manual => assert!(
                self.order().contains(key),
                "Tried to remove {} which was never added.",
                key.email
            ),
        }

        self.order_mut().retain(|other| other != key);
    }

    /// The working set in the order it was picked.
    fn added(&self) -> Vec<ContactItem> {
        self.order()
            .iter()
            .filter_map(|key| match key.source {
                EntrySource::Remote => self
                    .remote()
                    .and_then(|views| views.find_in_added(&key.email))
                    .cloned()
                    .map(ContactItem::Remote),
                EntrySource::Device => self
                    .device()
                    .and_then(|views| views.find_in_added(&key.email))
                    .cloned()
                    .map(ContactItem::Device),
                EntrySource::Manual => Some(ContactItem::Manual(key.email.clone())),
            })
            .collect()
    }

    fn is_added(&self, email: &EmailAddress) -> bool {
        self.order().iter().any(|key| &key.email == email)
    }

    /// True if none of the managed directories has anything left to pick from.
    fn is_exhausted(&self) -> bool {
        self.remote()
            .map(|views| views.filtered().is_empty())
            .unwrap_or(true)
            && self
                .device()
                .map(|views| views.filtered().is_empty())
                .unwrap_or(true)
    }

    fn search_corpus(&self) -> SearchCorpus {
        SearchCorpus {
            remote: self
                .remote()
                .map(|views| views.filtered().to_vec())
                .unwrap_or_default(),
            device: self
                .device()
                .map(|views| views.filtered().to_vec())
                .unwrap_or_default(),
        }
    }

    /// Replaces the search results of all managed directories. `None` ends the search.
    fn set_search_results(&mut self, results: Option<SearchCorpus>) {
        let (remote, device) = match results {
            Some(results) => (Some(results.remote), Some(results.device)),
            None => (None, None),
        };

        if let Some(views) = self.remote_mut() {
            views.set_query(remote)
        }
        if let Some(views) = self.device_mut() {
            views.set_query(device)
        }
    }
}
