// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("Invalid email address pattern")
});

/// Returns true if `address` looks like a deliverable email address.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_ADDRESS.is_match(address)
}
