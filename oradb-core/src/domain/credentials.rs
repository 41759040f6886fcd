// oradb-core/src/domain/credentials.rs

use crate::domain::error::DomainError;
use crate::ports::credential_store::CredentialStore;
use tracing::info;

/// A resolved (username, password) pair. Created once per invocation,
/// never persisted. The password may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Turns the raw configuration values into a [`Credentials`] pair.
///
/// A non-empty `server_id` wins over explicit values and is resolved through
/// the [`CredentialStore`] port. Exactly one of {server_id, username} must be
/// non-empty, otherwise the operation cannot proceed.
pub fn resolve_credentials(
    server_id: &str,
    username: &str,
    password: &str,
    store: &dyn CredentialStore,
) -> Result<Credentials, DomainError> {
    if !server_id.is_empty() {
        info!("using credentials from server_id '{}'", server_id);
        store
            .lookup(server_id)
            .ok_or_else(|| DomainError::CredentialsNotFound(server_id.to_string()))
    } else if !username.is_empty() {
        Ok(Credentials::new(username, password))
    } else {
        Err(DomainError::MissingCredentials)
    }
}

/// Substitutes placeholders for the first occurrence of the username and the
/// password. Only ever applied to human-facing log lines, never to the
/// argument list handed to the child process. An empty username or password
/// replaces nothing.
pub fn redact_credentials(text: &str, credentials: &Credentials) -> String {
    let redacted = replace_once(text, &credentials.username, "<username>");
    replace_once(&redacted, &credentials.password, "<password>")
}

fn replace_once(text: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    text.replacen(needle, replacement, 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapStore(HashMap<String, Credentials>);

    impl CredentialStore for MapStore {
        fn lookup(&self, server_id: &str) -> Option<Credentials> {
            self.0.get(server_id).cloned()
        }
    }

    fn store_with_db1() -> MapStore {
        let mut map = HashMap::new();
        map.insert("db1".to_string(), Credentials::new("scott", "tiger"));
        MapStore(map)
    }

    #[test]
    fn test_resolve_prefers_server_id() {
        let creds = resolve_credentials("db1", "ignored", "ignored", &store_with_db1())
            .expect("db1 is registered");
        assert_eq!(creds, Credentials::new("scott", "tiger"));
    }

    #[test]
    fn test_resolve_unknown_server_id_fails() {
        let err = resolve_credentials("db2", "", "", &store_with_db1()).unwrap_err();
        assert!(matches!(err, DomainError::CredentialsNotFound(id) if id == "db2"));
    }

    #[test]
    fn test_resolve_explicit_username_allows_empty_password() {
        let creds = resolve_credentials("", "scott", "", &MapStore(HashMap::new()))
            .expect("explicit username is enough");
        assert_eq!(creds.username, "scott");
        assert_eq!(creds.password, "");
    }

    #[test]
    fn test_resolve_nothing_given_fails() {
        let err = resolve_credentials("", "", "", &MapStore(HashMap::new())).unwrap_err();
        assert!(matches!(err, DomainError::MissingCredentials));
    }

    #[test]
    fn test_redact_replaces_first_occurrence_only() {
        let creds = Credentials::new("scott", "tiger");
        let line = "scott/tiger@//localhost:1521/ORCL SCHEMAS=scott";
        assert_eq!(
            redact_credentials(line, &creds),
            "<username>/<password>@//localhost:1521/ORCL SCHEMAS=scott"
        );
    }

    #[test]
    fn test_redact_empty_password_replaces_nothing_extra() {
        let creds = Credentials::new("scott", "");
        assert_eq!(
            redact_credentials("scott@//db:1521/ORCL", &creds),
            "<username>@//db:1521/ORCL"
        );
    }
}
