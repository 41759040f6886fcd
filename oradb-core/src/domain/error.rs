// oradb-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Credentials needed. Specify either username and password or server_id")]
    #[diagnostic(
        code(oradb::domain::missing_credentials),
        help("Set 'credentials.username' or 'credentials.server_id' in oradb.yaml, or pass --username / --server-id.")
    )]
    MissingCredentials,

    #[error("server_id '{0}' not found")]
    #[diagnostic(
        code(oradb::domain::credentials_not_found),
        help("Declare the server under the 'servers:' section of oradb.yaml.")
    )]
    CredentialsNotFound(String),
}
