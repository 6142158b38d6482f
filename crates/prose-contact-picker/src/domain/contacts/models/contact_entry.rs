// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::EmailAddress;

/// Common surface of the entries that make up a source's views.
pub trait ContactEntry: Clone {
    fn display_name(&self) -> &str;
    fn email(&self) -> &EmailAddress;

    /// Marks the entry as picked. Entries without a selection flag ignore this.
    fn set_selected(&mut self, _selected: bool) {}

    /// Returns true if either the display name or the email address contains `needle`
    /// ignoring case. `needle` is expected to be lowercased already.
    fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.display_name().to_lowercase().contains(needle)
            || self.email().as_str().to_lowercase().contains(needle)
    }
}
