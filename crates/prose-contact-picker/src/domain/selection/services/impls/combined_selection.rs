// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::{
    DeviceContact, MergedEntry, RemoteContact, SelectionKey, SelectionMode,
};
use crate::domain::selection::models::{ContactList, SourceViews};
use crate::domain::selection::services::{build_merged_list, SelectionStrategy};

#[derive(Debug, Default)]
pub struct CombinedSelection {
    remote: SourceViews<RemoteContact>,
    device: SourceViews<DeviceContact>,
    order: Vec<SelectionKey>,
}

impl SelectionStrategy for CombinedSelection {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Both
    }

    fn remote(&self) -> Option<&SourceViews<RemoteContact>> {
        Some(&self.remote)
    }

    fn remote_mut(&mut self) -> Option<&mut SourceViews<RemoteContact>> {
        Some(&mut self.remote)
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

    fn rendered_list(&self, device_loading: bool) -> ContactList {
        let mut entries = build_merged_list(self.remote.visible(), self.device.visible());
        if device_loading {
            entries.push(MergedEntry::Progress);
        }
        ContactList::Merged(entries)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::contacts::models::{
        ContactItem, EmailAddress, EntrySource, RemoteContactId, SectionKind,
    };
    use crate::domain::selection::models::AddResult;

    use super::*;

    fn selection() -> CombinedSelection {
        let mut selection = CombinedSelection::default();
        selection.remote.set_universe(vec![RemoteContact::new(
            RemoteContactId::new(1),
            "a@x.com".into(),
            Some("Ann".into()),
        )]);
        selection
            .device
            .set_universe(vec![DeviceContact::new(5, "Bob", "b@x.com")]);
        selection
    }

    #[test]
    fn test_tracks_order_across_sources() {
        let mut selection = selection();
        let bob = ContactItem::Device(DeviceContact::new(5, "Bob", "b@x.com"));
        let typed = ContactItem::Manual(EmailAddress::from("z@y.org"));
        let ann = ContactItem::Remote(selection.remote.filtered()[0].clone());

        selection.add(&bob);
        selection.add(&typed);
        selection.add(&ann);

        assert_eq!(
            selection
                .added()
                .iter()
                .map(|item| item.email().to_string())
                .collect::<Vec<_>>(),
            vec!["b@x.com", "z@y.org", "a@x.com"]
        );
        assert!(selection.is_exhausted());
        assert_eq!(selection.rendered_list(false), ContactList::Merged(vec![]));

        assert_eq!(selection.add(&typed), AddResult::Deselected);
        selection.remove(&SelectionKey::new(EntrySource::Device, "b@x.com"));
        assert_eq!(
            selection.order(),
            &[SelectionKey::new(EntrySource::Remote, "a@x.com")]
        );
    }

    #[test]
    fn test_typed_address_toggles_with_directory_entry() {
        let mut selection = selection();
        let typed = ContactItem::Manual(EmailAddress::from("a@x.com"));
        let ann = ContactItem::Remote(selection.remote.filtered()[0].clone());

        selection.add(&typed);
        assert_eq!(selection.add(&ann), AddResult::Deselected);

        assert!(selection.order().is_empty());
        assert!(selection.remote.added().is_empty());
        assert_eq!(selection.remote.filtered().len(), 1);
    }

    #[test]
    fn test_appends_progress_row_while_device_loads() {
        let selection = selection();
        let ContactList::Merged(entries) = selection.rendered_list(true) else {
            panic!("Expected merged list")
        };
        assert_eq!(entries.first(), Some(&MergedEntry::Header(SectionKind::Remote)));
        assert_eq!(entries.last(), Some(&MergedEntry::Progress));
        assert_eq!(entries.len(), 5);
    }

    #[test]
    #[should_panic(expected = "never added")]
    fn test_removing_unknown_manual_entry_panics() {
        let mut selection = selection();
        selection.remove(&SelectionKey::new(EntrySource::Manual, "q@x.com"));
    }
}
