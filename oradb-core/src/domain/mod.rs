pub mod connect;
pub mod credentials;
pub mod datapump;
pub mod error;
pub mod project;
pub mod sqlplus;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
