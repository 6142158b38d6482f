// prose-core-client/prose-contact-picker
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_name_cache::InMemoryNameCache;
pub use trust_all_verification_policy::TrustAllVerificationPolicy;

mod in_memory_name_cache;
mod trust_all_verification_policy;
