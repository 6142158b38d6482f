// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::RemoteContactId;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait NameResolutionCache: Send + Sync {
    fn resolve_display_name(&self, id: &RemoteContactId) -> Option<String>;
}
