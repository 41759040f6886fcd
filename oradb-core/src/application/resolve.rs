// oradb-core/src/application/resolve.rs

use crate::domain::credentials::{Credentials, resolve_credentials};
use crate::domain::error::DomainError;
use crate::domain::project::ProjectConfig;
use crate::infrastructure::config::servers::ConfigCredentialStore;

/// Resolves the effective credentials for one tool invocation, using the
/// project's `servers` section as the credential store.
pub(crate) fn resolved_credentials(config: &ProjectConfig) -> Result<Credentials, DomainError> {
    let store = ConfigCredentialStore::new(&config.servers);
    resolve_credentials(
        &config.credentials.server_id,
        &config.credentials.username,
        &config.credentials.password,
        &store,
    )
}

/// Human-facing rendering of a command line, for the pre-execution log.
pub(crate) fn display_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
