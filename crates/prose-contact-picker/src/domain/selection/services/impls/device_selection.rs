// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{DeviceContact, RemoteContact, SelectionKey, SelectionMode};
use crate::domain::selection::models::{ContactList, SourceViews};
use crate::domain::selection::services::SelectionStrategy;

/// Selection from the device address book. Typed addresses are tracked in `order` only.
#[derive(Debug, Default)]
pub struct DeviceSelection {
    device: SourceViews<DeviceContact>,
    order: Vec<SelectionKey>,
}

impl SelectionStrategy for DeviceSelection {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Device
    }

    fn remote(&self) -> Option<&SourceViews<RemoteContact>> {
        None
    }

    fn remote_mut(&mut self) -> Option<&mut SourceViews<RemoteContact>> {
        None
    }

    fn device(&self) -> Option<&SourceViews<DeviceContact>> {
        Some(&self.device)
    }

    fn device_mut(&mut self) -> Option<&mut SourceViews<DeviceContact>> {
        Some(&mut self.device)
    }

    fn order(&self) -> &[SelectionKey] {
        &self.order
    }

    fn order_mut(&mut self) -> &mut Vec<SelectionKey> {
        &mut self.order
    }

    fn rendered_list(&self, _device_loading: bool) -> ContactList {
        ContactList::Device(self.device.visible().to_vec())
    }
}
