// oradb-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(oradb::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(oradb::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(oradb::infra::config_missing))]
    ConfigNotFound(String),

    // --- SCRIPT FILES ---
    #[error("Problem reading file '{}'", .0.display())]
    #[diagnostic(
        code(oradb::infra::unreadable_input),
        help("The SQL script must exist, be a regular file and be readable.")
    )]
    UnreadableInputFile(PathBuf),

    // --- CHILD PROCESSES ---
    #[error("Could not start '{program}'")]
    #[diagnostic(
        code(oradb::infra::spawn),
        help("Is the executable on your PATH? You can point the tool at a full path in oradb.yaml.")
    )]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with code {code}")]
    #[diagnostic(code(oradb::infra::exec))]
    ExecutionFailed { program: String, code: i32 },
}
