// oradb-core/src/application/sqlplus.rs
//
// USE CASE: run statements through SQL*Plus. Inline statements go to a temp
// script; a configured file is validated and run in place. Either way the
// before-sql preamble lands in login.sql, auto-loaded via SQLPATH.

use crate::application::resolve::{display_command, resolved_credentials};
use crate::domain::connect::connect_identifier;
use crate::domain::credentials::redact_credentials;
use crate::domain::project::ProjectConfig;
use crate::domain::sqlplus::sqlplus_arguments;
use crate::error::OradbError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::process::run_command;
use crate::infrastructure::script::{
    check_file_readable, prepare_login_script, scratch_dir, write_statements_file,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

pub fn run_sqlplus(project_dir: &Path, config: &ProjectConfig) -> Result<(), OradbError> {
    if let Some(sql) = non_empty(&config.sqlplus.sql_command) {
        // Inline statements: write them to a temp script sqlplus can take.
        // The handle keeps the file alive until the run finishes.
        let script = write_statements_file(sql)?;
        run_script(project_dir, config, script.path())
    } else if let Some(file) = &config.sqlplus.sql_file {
        run_script(project_dir, config, file)
    } else {
        // Nothing configured, nothing to execute.
        info!("Neither sql-command nor sql-file configured, skipping sqlplus");
        Ok(())
    }
}

fn run_script(
    project_dir: &Path,
    config: &ProjectConfig,
    script: &Path,
) -> Result<(), OradbError> {
    check_file_readable(script)?;

    let credentials = resolved_credentials(config)?;
    let identifier = connect_identifier(&credentials, &config.connection);
    let args = sqlplus_arguments(&identifier, &file_name(script)?);

    let env = login_env(project_dir, config)?;

    let command = &config.sqlplus.command;
    info!(
        "Executing command line: {}",
        redact_credentials(&display_command(command, &args), &credentials)
    );

    // The child runs inside the script's directory so '@name' resolves.
    let working_dir = script.parent().filter(|p| !p.as_os_str().is_empty());
    run_command(command, &args, working_dir, env.as_ref())?;
    Ok(())
}

fn login_env(
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<Option<HashMap<String, String>>, OradbError> {
    match &config.sqlplus.before_sql {
        Some(before_sql) => {
            let scratch = scratch_dir(project_dir, &config.target_path);
            Ok(Some(prepare_login_script(&scratch, before_sql)?))
        }
        None => Ok(None),
    }
}

fn file_name(script: &Path) -> Result<String, InfrastructureError> {
    script
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| InfrastructureError::UnreadableInputFile(script.to_path_buf()))
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.is_empty())
}
