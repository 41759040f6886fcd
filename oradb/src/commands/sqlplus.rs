// oradb/src/commands/sqlplus.rs
//
// USE CASE: run statements or a script through SQL*Plus.

use std::path::PathBuf;

use anyhow::Context;
use oradb_core::application::run_sqlplus;
use oradb_core::infrastructure::load_project_config;

use crate::cli::ConnectionArgs;
use crate::commands::apply_connection_overrides;

pub fn execute(
    project_dir: PathBuf,
    connection: ConnectionArgs,
    sql: Option<String>,
    file: Option<PathBuf>,
    command: Option<String>,
) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let mut config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    apply_connection_overrides(&mut config, &connection);
    if sql.is_some() {
        config.sqlplus.sql_command = sql;
    }
    if file.is_some() {
        config.sqlplus.sql_file = file;
    }
    if let Some(command) = command {
        config.sqlplus.command = command;
    }

    match run_sqlplus(&project_dir, &config) {
        Ok(()) => {
            println!("\n✨ SUCCESS! SQL*Plus finished.");
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ SQL*Plus run failed: {}", e);
            std::process::exit(1);
        }
    }
}
