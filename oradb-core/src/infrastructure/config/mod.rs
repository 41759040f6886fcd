pub mod project;
pub mod servers;

pub use crate::domain::project::ProjectConfig;
pub use project::load_project_config;
pub use servers::ConfigCredentialStore;
