// oradb-core/src/infrastructure/config/servers.rs
//
// Adapter: the `servers` section of the project file acting as the
// credential store behind the CredentialStore port.

use crate::domain::credentials::Credentials;
use crate::domain::project::ServerEntry;
use crate::ports::credential_store::CredentialStore;
use std::collections::HashMap;

pub struct ConfigCredentialStore<'a> {
    servers: &'a HashMap<String, ServerEntry>,
}

impl<'a> ConfigCredentialStore<'a> {
    pub fn new(servers: &'a HashMap<String, ServerEntry>) -> Self {
        Self { servers }
    }
}

impl CredentialStore for ConfigCredentialStore<'_> {
    fn lookup(&self, server_id: &str) -> Option<Credentials> {
        self.servers
            .get(server_id)
            .map(|entry| Credentials::new(entry.username.clone(), entry.password.clone()))
    }
}
