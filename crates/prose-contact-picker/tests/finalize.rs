// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use futures::poll;
use pretty_assertions::assert_eq;

use prose_contact_picker::dtos::{
    AddResult, ContactItem, ContactList, GroupOptions, LoadState, MergedEntry, PresenceStatus,
    RemoteContactId, SelectionError, SelectionMode,
};
use prose_contact_picker::test::mock_data::{device_record, remote_user};
use prose_contact_picker::test::{
    GatedDirectoryProvider, MockPickerDependencies, RecordingDelegate,
};
use prose_contact_picker::{email, PickerConfig, SelectionEngine};

use crate::common::{config, mock_deps};

mod common;

fn first_remote(engine: &SelectionEngine) -> ContactItem {
    match engine.view_state().list {
        ContactList::Remote(contacts) => ContactItem::Remote(contacts[0].clone()),
        list => panic!("Expected remote list, got {:?}", list),
    }
}

#[tokio::test]
async fn test_returns_addresses_in_selection_order() -> Result<()> {
    let deps = mock_deps(
        vec![],
        vec![
            device_record(1, "Ann", "a@x.com"),
            device_record(2, "Bob", "b@x.com"),
            device_record(3, "Carl", "c@x.com"),
        ],
    );
    let engine = SelectionEngine::builder()
        .set_dependencies(deps.into_deps())
        .set_config(PickerConfig {
            already_invited: vec![email!("b@x.com")],
            ..config()
        })
        .build(SelectionMode::Device);
    engine.load_device_directory().await;

    engine.add_typed_email("c@x.com")?;
    engine.add_typed_email("zed@y.org")?;
    engine.add_typed_email("b@x.com")?;
    engine.add_typed_email("a@x.com")?;

    let result = engine.finalize()?;
    assert_eq!(
        result.emails,
        vec![email!("c@x.com"), email!("zed@y.org"), email!("a@x.com")]
    );
    assert_eq!(result.mode, SelectionMode::Device);
    assert_eq!(result.group_options, None);

    Ok(())
}

#[tokio::test]
async fn test_chat_link_requires_group_title() -> Result<()> {
    let deps = mock_deps(vec![remote_user(1, "a@x.com")], vec![]);
    let engine = SelectionEngine::builder()
        .set_dependencies(deps.into_deps())
        .set_config(PickerConfig {
            creates_group: true,
            ..config()
        })
        .build(SelectionMode::Remote);
    engine.load_remote_directory().await;
    engine.add(&first_remote(&engine))?;

    engine.set_group_options(GroupOptions {
        title: Some("   ".to_string()),
        end_to_end_encrypted: true,
        allow_add_participants: false,
        chat_link: true,
    })?;
    assert_eq!(engine.finalize(), Err(SelectionError::GroupTitleRequired));

    let options = GroupOptions {
        title: Some("Hiking".to_string()),
        end_to_end_encrypted: false,
        allow_add_participants: true,
        chat_link: true,
    };
    engine.set_group_options(options.clone())?;

    let result = engine.finalize()?;
    assert_eq!(result.emails, vec![email!("a@x.com")]);
    assert_eq!(result.group_options, Some(options));

    Ok(())
}

#[tokio::test]
async fn test_rejects_changes_after_finalize() -> Result<()> {
    let mut deps = MockPickerDependencies::default();
    deps.directory_provider
        .expect_fetch_remote_contacts()
        .times(1)
        .returning(|| Box::pin(async { Ok(vec![remote_user(1, "a@x.com")]) }));

    let engine = SelectionEngine::builder()
        .set_dependencies(deps.into_deps())
        .set_config(config())
        .build(SelectionMode::Remote);
    engine.load_remote_directory().await;

    let ann = first_remote(&engine);
    engine.finalize()?;

    assert_eq!(engine.add(&ann), Err(SelectionError::EngineFinalized));
    assert_eq!(engine.finalize(), Err(SelectionError::EngineFinalized));
    assert_eq!(
        engine.set_group_options(GroupOptions::default()),
        Err(SelectionError::EngineFinalized)
    );
    assert_eq!(
        engine.load_remote_directory().await,
        LoadState::Completed { count: 1 }
    );

    Ok(())
}

#[tokio::test]
async fn test_finalize_cancels_running_loads() -> Result<()> {
    let provider = GatedDirectoryProvider::new();
    let engine = SelectionEngine::builder()
        .set_dependencies(provider.deps())
        .set_config(config())
        .build(SelectionMode::Device);

    let gate = provider.device_gate();
    let load = engine.load_device_directory();
    tokio::pin!(load);
    assert!(poll!(&mut load).is_pending());

    assert!(engine.finalize()?.emails.is_empty());

    gate.send(Ok(vec![device_record(1, "Ann", "a@x.com")]))
        .expect("gate open");
    assert_eq!(load.await, LoadState::Cancelled);

    Ok(())
}

#[tokio::test]
async fn test_ignores_contact_updates_after_finalize() -> Result<()> {
    let deps = mock_deps(vec![remote_user(1, "a@x.com")], vec![]);
    let delegate = RecordingDelegate::new();
    let engine = SelectionEngine::builder()
        .set_dependencies(deps.into_deps())
        .set_config(config())
        .set_delegate(delegate.boxed())
        .build(SelectionMode::Remote);
    engine.load_remote_directory().await;
    engine.finalize()?;

    let before = engine.view_state();
    delegate.take_events();

    engine.apply_presence(
        &RemoteContactId::new(1),
        &PresenceStatus::Offline {
            last_seen: Some(chrono::Utc::now()),
        },
    );
    engine.update_display_name(&RemoteContactId::new(1), Some("Zed".to_string()));

    assert_eq!(engine.view_state(), before);
    assert!(delegate.events().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_address_in_both_directories_is_returned_once() -> Result<()> {
    let deps = mock_deps(
        vec![remote_user(1, "a@x.com")],
        vec![device_record(7, "Ann Phone", "a@x.com")],
    );
    let engine = SelectionEngine::builder()
        .set_dependencies(deps.into_deps())
        .set_config(config())
        .build(SelectionMode::Both);
    engine.load_initial().await;

    let rows = match engine.view_state().list {
        ContactList::Merged(rows) => rows,
        list => panic!("Expected merged list, got {:?}", list),
    };
    let remote = rows
        .iter()
        .find(|row| matches!(row, MergedEntry::Remote(_)))
        .cloned()
        .expect("remote row");
    let device = rows
        .iter()
        .find(|row| matches!(row, MergedEntry::Device(_)))
        .cloned()
        .expect("device row");

    assert_eq!(
        engine.select(&remote)?,
        Some(AddResult::Added {
            source_exhausted: true
        })
    );
    // Same address from the other directory toggles the selection off.
    assert_eq!(engine.select(&device)?, Some(AddResult::Deselected));
    assert!(engine.view_state().added.is_empty());

    engine.select(&device)?;
    assert_eq!(engine.add_typed_email("a@x.com")?, AddResult::AlreadyAdded);

    let view = engine.view_state();
    assert!(matches!(view.added.as_slice(), [ContactItem::Device(_)]));

    assert_eq!(engine.finalize()?.emails, vec![email!("a@x.com")]);

    Ok(())
}
