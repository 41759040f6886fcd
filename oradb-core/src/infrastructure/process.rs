// oradb-core/src/infrastructure/process.rs
//
// Synchronous "run and wait" on an external binary. Child stdout/stderr are
// inherited so tool output streams live through the parent, it is never
// captured or buffered here.

use crate::infrastructure::error::InfrastructureError;
use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

pub fn run_command(
    program: &str,
    args: &[String],
    working_dir: Option<&Path>,
    env_overrides: Option<&HashMap<String, String>>,
) -> Result<(), InfrastructureError> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    if let Some(dir) = working_dir {
        command.current_dir(dir);
    }
    // Merged over the inherited environment; the override wins on collision.
    if let Some(env) = env_overrides {
        command.envs(env);
    }

    debug!(program, "Spawning child process");
    let status = command
        .status()
        .map_err(|source| InfrastructureError::SpawnFailed {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        // Killed by a signal -> no exit code; report -1.
        Err(InfrastructureError::ExecutionFailed {
            program: program.to_string(),
            code: status.code().unwrap_or(-1),
        })
    }
}
