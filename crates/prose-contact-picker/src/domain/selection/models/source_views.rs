// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{ContactEntry, EmailAddress};
use crate::domain::shared::utils::{compare_entries, insert_sorted_by};

use super::AddResult;

/// The parallel views of one directory.
///
/// Every entry of `universe` is in exactly one of `filtered` and `added`. `filtered` is kept
/// sorted by display name, `added` is kept in the order the user picked the entries. `query`
/// is the subset of `filtered` matching the active search, if any. Entries are identified by
/// their email address.
#[derive(Debug, Clone)]
pub struct SourceViews<T: ContactEntry> {
    universe: Vec<T>,
    filtered: Vec<T>,
    added: Vec<T>,
    query: Option<Vec<T>>,
}

impl<T: ContactEntry> Default for SourceViews<T> {
    fn default() -> Self {
        Self {
            universe: vec![],
            filtered: vec![],
            added: vec![],
            query: None,
        }
    }
}

impl<T: ContactEntry> SourceViews<T> {
    pub fn universe(&self) -> &[T] {
        &self.universe
    }

    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    pub fn added(&self) -> &[T] {
        &self.added
    }

    pub fn query(&self) -> Option<&[T]> {
        self.query.as_deref()
    }

    /// What the list shows for this source: the search results while a search is active,
    /// `filtered` otherwise.
    pub fn visible(&self) -> &[T] {
        self.query.as_deref().unwrap_or(&self.filtered)
    }

    pub fn is_added(&self, email: &EmailAddress) -> bool {
        self.added.iter().any(|entry| entry.email() == email)
    }

    pub fn find_in_universe(&self, email: &EmailAddress) -> Option<&T> {
        self.universe.iter().find(|entry| entry.email() == email)
    }

    pub fn find_in_added(&self, email: &EmailAddress) -> Option<&T> {
        self.added.iter().find(|entry| entry.email() == email)
    }

    /// Moves the entry identified by `email` from `filtered` to the end of `added`. If the
    /// entry is added already it is removed instead.
    ///
    /// Panics if the entry isn't part of the universe.
    pub fn add(&mut self, email: &EmailAddress) -> AddResult {
        if self.is_added(email) {
            self.remove(email);
            return AddResult::Deselected;
        }

        let Some(idx) = self.filtered.iter().position(|entry| entry.email() == email) else {
            panic!("Tried to add {email} which is not part of the universe.");
        };

        let mut entry = self.filtered.remove(idx);
        entry.set_selected(true);
        self.set_selected_in_universe(email, true);

        if let Some(query) = self.query.as_mut() {
            query.retain(|entry| entry.email() != email);
        }

        self.added.push(entry);

        AddResult::Added {
            source_exhausted: self.filtered.is_empty(),
        }
    }

    /// Removes the entry identified by `email` from `added` and puts its current universe
    /// entry back into `filtered` at its rank. Entries that are no longer part of the universe
    /// are dropped.
    ///
    /// Panics if the entry isn't added.
    pub fn remove(&mut self, email: &EmailAddress) -> T {
        let Some(idx) = self.added.iter().position(|entry| entry.email() == email) else {
            panic!("Tried to remove {email} which was never added.");
        };

        let mut entry = self.added.remove(idx);
        entry.set_selected(false);

        self.set_selected_in_universe(email, false);
        if let Some(current) = self.find_in_universe(email).cloned() {
            insert_sorted_by(&mut self.filtered, current, compare_entries);
        }

        entry
    }

    /// Replaces the universe. `filtered` is rebuilt from the new universe minus `added`,
    /// `added` stays untouched, even if some of its entries are gone from the new universe.
    pub fn set_universe(&mut self, mut entries: Vec<T>) {
        entries.sort_by(compare_entries);

        for entry in entries.iter_mut() {
            let is_added = self.is_added(entry.email());
            entry.set_selected(is_added);
        }

        self.filtered = entries
            .iter()
            .filter(|entry| !self.is_added(entry.email()))
            .cloned()
            .collect();
        self.universe = entries;
    }

    pub fn set_query(&mut self, query: Option<Vec<T>>) {
        self.query = query
    }

    /// Entries of `filtered` matching `needle`.
    pub fn matching(&self, needle: &str) -> Vec<T> {
        matching_entries(&self.filtered, needle)
    }

    /// Applies `update` to every copy of the entries matching `predicate`. Returns true if
    /// at least one entry was updated.
    pub fn update_where<P, F>(&mut self, predicate: P, mut update: F) -> bool
    where
        P: Fn(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut updated = false;
        let views = [
            Some(&mut self.universe),
            Some(&mut self.filtered),
            Some(&mut self.added),
            self.query.as_mut(),
        ];

        for view in views.into_iter().flatten() {
            for entry in view.iter_mut().filter(|entry| predicate(entry)) {
                update(entry);
                updated = true;
            }
        }

        updated
    }

    /// Moves the entry identified by `email` to its rank in `universe` and `filtered`, e.g.
    /// after its display name changed.
    pub fn rerank(&mut self, email: &EmailAddress) {
        for view in [&mut self.universe, &mut self.filtered] {
            if let Some(idx) = view.iter().position(|entry| entry.email() == email) {
                let entry = view.remove(idx);
                insert_sorted_by(view, entry, compare_entries);
            }
        }
    }

    fn set_selected_in_universe(&mut self, email: &EmailAddress, selected: bool) {
        if let Some(entry) = self
            .universe
            .iter_mut()
            .find(|entry| entry.email() == email)
        {
            entry.set_selected(selected)
        }
    }
}

/// Entries of `entries` whose display name or email contains `needle`, ignoring case.
pub fn matching_entries<T: ContactEntry>(entries: &[T], needle: &str) -> Vec<T> {
    let needle = needle.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.matches(&needle))
        .cloned()
        .collect()
}
