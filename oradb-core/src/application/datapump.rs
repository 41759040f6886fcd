// oradb-core/src/application/datapump.rs
//
// USE CASES: expdp / impdp. Resolve credentials, build the connect
// identifier, assemble the argument list, log it redacted, run the tool.

use crate::application::resolve::{display_command, resolved_credentials};
use crate::domain::connect::connect_identifier;
use crate::domain::credentials::redact_credentials;
use crate::domain::datapump::{DatapumpConfig, export_arguments, import_arguments};
use crate::domain::project::ProjectConfig;
use crate::error::OradbError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::process::run_command;
use tracing::info;

pub fn run_expdp(config: &ProjectConfig) -> Result<(), OradbError> {
    require_directory("expdp", &config.expdp.options)?;

    let credentials = resolved_credentials(config)?;
    let identifier = connect_identifier(&credentials, &config.connection);
    let args = export_arguments(&identifier, &config.expdp);

    let command = &config.expdp.command;
    info!(
        "Executing command line: {}",
        redact_credentials(&display_command(command, &args), &credentials)
    );

    run_command(command, &args, None, None)?;
    Ok(())
}

pub fn run_impdp(config: &ProjectConfig) -> Result<(), OradbError> {
    require_directory("impdp", &config.impdp.options)?;

    let credentials = resolved_credentials(config)?;
    let identifier = connect_identifier(&credentials, &config.connection);
    let args = import_arguments(&identifier, &config.impdp);

    let command = &config.impdp.command;
    info!(
        "Executing command line: {}",
        redact_credentials(&display_command(command, &args), &credentials)
    );

    run_command(command, &args, None, None)?;
    Ok(())
}

// DIRECTORY is the one Data Pump option both tools insist on.
fn require_directory(tool: &str, options: &DatapumpConfig) -> Result<(), InfrastructureError> {
    match &options.directory {
        Some(dir) if !dir.is_empty() => Ok(()),
        _ => Err(InfrastructureError::ConfigError(format!(
            "{} requires '{}.directory' to be configured",
            tool, tool
        ))),
    }
}
