// oradb-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OradbError {
    // --- DOMAIN ERRORS (Credentials, assembly rules) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Config, Child processes) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Manual implementation to avoid a duplicate enum variant but keep ergonomics
impl From<std::io::Error> for OradbError {
    fn from(err: std::io::Error) -> Self {
        OradbError::Infrastructure(InfrastructureError::Io(err))
    }
}
