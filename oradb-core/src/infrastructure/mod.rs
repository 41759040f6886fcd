// oradb-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod process;
pub mod script;

pub use config::project::load_project_config;
pub use config::servers::ConfigCredentialStore;
pub use error::InfrastructureError;
