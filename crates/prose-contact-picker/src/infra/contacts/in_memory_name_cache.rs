// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::contacts::models::RemoteContactId;
use crate::domain::contacts::services::NameResolutionCache;

/// A `NameResolutionCache` backed by a map, filled by whoever knows the names.
#[derive(Default)]
pub struct InMemoryNameCache {
    names: RwLock<HashMap<RemoteContactId, String>>,
}

impl InMemoryNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: RemoteContactId, name: impl Into<String>) {
        self.names.write().insert(id, name.into());
    }

    pub fn remove(&self, id: &RemoteContactId) {
        self.names.write().remove(id);
    }
}

impl<I, S> FromIterator<(I, S)> for InMemoryNameCache
where
    I: Into<RemoteContactId>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, S)>>(iter: T) -> Self {
        Self {
            names: RwLock::new(
                iter.into_iter()
                    .map(|(id, name)| (id.into(), name.into()))
                    .collect(),
            ),
        }
    }
}

impl NameResolutionCache for InMemoryNameCache {
    fn resolve_display_name(&self, id: &RemoteContactId) -> Option<String> {
        self.names.read().get(id).cloned()
    }
}
