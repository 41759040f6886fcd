// oradb/src/commands/expdp.rs
//
// USE CASE: export data through Oracle Data Pump.

use std::path::PathBuf;

use anyhow::Context;
use oradb_core::application::run_expdp;
use oradb_core::infrastructure::load_project_config;

use crate::cli::{ConnectionArgs, DatapumpArgs};
use crate::commands::{apply_connection_overrides, apply_datapump_overrides};

pub fn execute(
    project_dir: PathBuf,
    connection: ConnectionArgs,
    datapump: DatapumpArgs,
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
    apply_datapump_overrides(&mut config.expdp.options, &datapump);
    if let Some(command) = command {
        config.expdp.command = command;
    }

    match run_expdp(&config) {
        Ok(()) => {
            println!("\n✨ SUCCESS! Export finished.");
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Export failed: {}", e);
            std::process::exit(1);
        }
    }
}
