// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{ContactEntry, EmailAddress};

/// Domain used by a messaging gateway to synthesize placeholder addresses in the device
/// address book. These addresses can't receive anything and are never offered.
const MESSAGING_GATEWAY_DOMAIN: &str = "s.whatsapp.net";

/// Row id of a contact in the device address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceContactId(i64);

impl DeviceContactId {
    pub fn new(row_id: i64) -> Self {
        Self(row_id)
    }
}

impl From<i64> for DeviceContactId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A raw row read from the device address book.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceContactRecord {
    pub id: DeviceContactId,
    pub name: Option<String>,
    /// The first email address of the contact, if any.
    pub email: Option<String>,
}

/// A device address book entry that has passed ingestion. Two entries are equal if their
/// email addresses are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceContact {
    pub id: DeviceContactId,
    pub name: String,
    pub email: EmailAddress,
}

impl DeviceContact {
    pub fn new(
        id: impl Into<DeviceContactId>,
        name: impl Into<String>,
        email: impl Into<EmailAddress>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Converts a raw row into a `DeviceContact`. Returns `None` if the row has no usable
    /// email address: it must be non-empty, contain an `@` and must not belong to the
    /// messaging gateway placeholder domain. Rows without a name are named after their
    /// address.
    pub fn from_record(record: DeviceContactRecord) -> Option<Self> {
        let email = record
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| {
                !email.is_empty() && email.contains('@') && !email.contains(MESSAGING_GATEWAY_DOMAIN)
            })?;

        let name = record
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| email.clone());

        Some(Self {
            id: record.id,
            name,
            email: email.into(),
        })
    }
}

impl PartialEq for DeviceContact {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for DeviceContact {}

impl Hash for DeviceContact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state)
    }
}

impl ContactEntry for DeviceContact {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, email: Option<&str>) -> DeviceContactRecord {
        DeviceContactRecord {
            id: DeviceContactId::new(1),
            name: name.map(ToString::to_string),
            email: email.map(ToString::to_string),
        }
    }

    #[test]
    fn test_rejects_rows_without_usable_email() {
        assert!(DeviceContact::from_record(record(Some("Ann"), None)).is_none());
        assert!(DeviceContact::from_record(record(Some("Ann"), Some(""))).is_none());
        assert!(DeviceContact::from_record(record(Some("Ann"), Some("   "))).is_none());
        assert!(DeviceContact::from_record(record(Some("Ann"), Some("ann.example.com"))).is_none());
        assert!(
            DeviceContact::from_record(record(Some("Ann"), Some("4915112345@s.whatsapp.net")))
                .is_none()
        );
    }

    #[test]
    fn test_accepts_row_with_email() {
        let contact = DeviceContact::from_record(record(Some("Ann"), Some("ann@x.com"))).unwrap();
        assert_eq!(contact.name, "Ann");
        assert_eq!(contact.email, EmailAddress::from("ann@x.com"));
    }

    #[test]
    fn test_names_nameless_row_after_email() {
        let contact = DeviceContact::from_record(record(None, Some("c@x.com"))).unwrap();
        assert_eq!(contact.name, "c@x.com");
    }

    #[test]
    fn test_equality_is_by_email() {
        assert_eq!(
            DeviceContact::new(1, "Ann", "a@x.com"),
            DeviceContact::new(2, "Annie", "a@x.com")
        );
        assert_ne!(
            DeviceContact::new(1, "Ann", "a@x.com"),
            DeviceContact::new(1, "Ann", "b@x.com")
        );
    }
}
