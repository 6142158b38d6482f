// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{DeviceContact, RemoteContact, SelectionKey, SelectionMode};
use crate::domain::selection::models::{ContactList, SourceViews};
use crate::domain::selection::services::SelectionStrategy;

#[derive(Debug, Default)]
pub struct RemoteSelection {
    remote: SourceViews<RemoteContact>,
    order: Vec<SelectionKey>,
}

impl SelectionStrategy for RemoteSelection {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Remote
    }

    fn remote(&self) -> Option<&SourceViews<RemoteContact>> {
        Some(&self.remote)
    }

    fn remote_mut(&mut self) -> Option<&mut SourceViews<RemoteContact>> {
        Some(&mut self.remote)
    }

    fn device(&self) -> Option<&SourceViews<DeviceContact>> {
        None
    }

    fn device_mut(&mut self) -> Option<&mut SourceViews<DeviceContact>> {
        None
    }

    fn order(&self) -> &[SelectionKey] {
        &self.order
    }

    fn order_mut(&mut self) -> &mut Vec<SelectionKey> {
        &mut self.order
    }

    fn rendered_list(&self, _device_loading: bool) -> ContactList {
        ContactList::Remote(self.remote.visible().to_vec())
    }
}
