// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::RemoteContact;

/// Decides whether a remote contact's credentials have been verified by the user.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait VerificationPolicy: Send + Sync {
    fn is_verified(&self, contact: &RemoteContact) -> bool;
}
