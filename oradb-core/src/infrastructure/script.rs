// oradb-core/src/infrastructure/script.rs
//
// Script-file preparation for the sqlplus path: inline statements go to a
// uniquely named temp file, the before-sql preamble goes to a login.sql that
// sqlplus auto-loads through SQLPATH.

use crate::infrastructure::error::InfrastructureError;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes inline SQL statements to a `statements-*.sql` temp file. The file
/// lives as long as the returned handle; dropping it after the run removes
/// the file (best effort).
pub fn write_statements_file(sql: &str) -> Result<NamedTempFile, InfrastructureError> {
    let mut file = tempfile::Builder::new()
        .prefix("statements-")
        .suffix(".sql")
        .tempfile()?;
    file.write_all(sql.as_bytes())?;
    file.flush()?;
    debug!(path = ?file.path(), "Wrote inline statements");
    Ok(file)
}

/// The script handed to sqlplus must exist, be a regular file and be
/// readable before we spawn anything.
pub fn check_file_readable(path: &Path) -> Result<(), InfrastructureError> {
    let readable = fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
        && fs::File::open(path).is_ok();
    if readable {
        Ok(())
    } else {
        Err(InfrastructureError::UnreadableInputFile(path.to_path_buf()))
    }
}

/// Scratch directory for sqlplus support files, inside the build output
/// directory so independent projects cannot collide. Two concurrent runs
/// sharing one project directory still race on login.sql.
pub fn scratch_dir(project_dir: &Path, target_path: &str) -> PathBuf {
    project_dir.join(target_path).join("oradb")
}

/// Writes `before_sql` to login.sql inside the scratch directory and returns
/// the environment override pointing SQLPATH at it, so sqlplus executes the
/// preamble right after startup.
pub fn prepare_login_script(
    scratch: &Path,
    before_sql: &str,
) -> Result<HashMap<String, String>, InfrastructureError> {
    fs::create_dir_all(scratch)?;
    let login = scratch.join("login.sql");
    fs::write(&login, before_sql)?;
    debug!(path = ?login, "Wrote login.sql");

    let mut env = HashMap::new();
    env.insert("SQLPATH".to_string(), scratch.display().to_string());
    Ok(env)
}
