// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::app::deps::PickerDependencies;
use crate::domain::contacts::models::{
    DeviceContactRecord, DirectoryError, PresenceStatus, RemoteContactId, RemoteUser,
};
use crate::domain::contacts::services::{DeviceDirectoryProvider, DirectoryProvider};
use crate::infra::contacts::InMemoryNameCache;

type Gate<T> = oneshot::Receiver<Result<T, DirectoryError>>;
pub type RemoteGate = oneshot::Sender<Result<Vec<RemoteUser>, DirectoryError>>;
pub type DeviceGate = oneshot::Sender<Result<Vec<DeviceContactRecord>, DirectoryError>>;

/// A directory provider whose fetches only resolve once the test opens the corresponding
/// gate. Gates are consumed in the order they were opened, one per fetch.
#[derive(Default)]
pub struct GatedDirectoryProvider {
    remote_gates: Mutex<VecDeque<Gate<Vec<RemoteUser>>>>,
    device_gates: Mutex<VecDeque<Gate<Vec<DeviceContactRecord>>>>,
}

impl GatedDirectoryProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Prepares the next remote fetch. It resolves with whatever is sent through the
    /// returned sender.
    pub fn remote_gate(&self) -> RemoteGate {
        let (tx, rx) = oneshot::channel();
        self.remote_gates.lock().push_back(rx);
        tx
    }

    pub fn device_gate(&self) -> DeviceGate {
        let (tx, rx) = oneshot::channel();
        self.device_gates.lock().push_back(rx);
        tx
    }

    pub fn deps(self: &Arc<Self>) -> PickerDependencies {
        PickerDependencies {
            device_directory_provider: self.clone(),
            directory_provider: self.clone(),
            name_cache: Arc::new(InMemoryNameCache::new()),
        }
    }
}

async fn pass<T>(gate: Option<Gate<T>>) -> Result<T, DirectoryError> {
    let Some(gate) = gate else {
        return Err(DirectoryError::Unavailable(anyhow!("No gate was prepared.")));
    };
    gate.await
        .unwrap_or_else(|_| Err(DirectoryError::Unavailable(anyhow!("Gate was dropped."))))
}

#[async_trait]
impl DirectoryProvider for GatedDirectoryProvider {
    async fn fetch_remote_contacts(&self) -> Result<Vec<RemoteUser>, DirectoryError> {
        let gate = self.remote_gates.lock().pop_front();
        pass(gate).await
    }

    async fn fetch_presence(
        &self,
        _id: &RemoteContactId,
    ) -> Result<PresenceStatus, DirectoryError> {
        Err(DirectoryError::Unavailable(anyhow!(
            "Presence is not available."
        )))
    }
}

#[async_trait]
impl DeviceDirectoryProvider for GatedDirectoryProvider {
    async fn fetch_device_contacts(&self) -> Result<Vec<DeviceContactRecord>, DirectoryError> {
        let gate = self.device_gates.lock().pop_front();
        pass(gate).await
    }
}
