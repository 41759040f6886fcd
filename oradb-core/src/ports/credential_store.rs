// oradb-core/src/ports/credential_store.rs

// This file defines what the application needs, without knowing how it's done.
// The resolver asks "who is server 'db1'?" and does not care whether the
// answer comes from a YAML section, a keychain or a test fixture.

use crate::domain::credentials::Credentials;

pub trait CredentialStore {
    /// Look up the credentials registered under `server_id`.
    /// `None` means the store has no entry with that id.
    fn lookup(&self, server_id: &str) -> Option<Credentials>;
}
