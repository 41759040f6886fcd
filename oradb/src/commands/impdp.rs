// oradb/src/commands/impdp.rs
//
// USE CASE: import data through Oracle Data Pump.

use std::path::PathBuf;

use anyhow::Context;
use oradb_core::application::run_impdp;
use oradb_core::infrastructure::load_project_config;

use crate::cli::{ConnectionArgs, DatapumpArgs};
use crate::commands::{apply_connection_overrides, apply_datapump_overrides};

pub fn execute(
    project_dir: PathBuf,
    connection: ConnectionArgs,
    datapump: DatapumpArgs,
    remap_tablespace: Option<String>,
    remap_schema: Option<String>,
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
    apply_datapump_overrides(&mut config.impdp.options, &datapump);
    if remap_tablespace.is_some() {
        config.impdp.remap_tablespace = remap_tablespace;
    }
    if remap_schema.is_some() {
        config.impdp.remap_schema = remap_schema;
    }
    if let Some(command) = command {
        config.impdp.command = command;
    }

    match run_impdp(&config) {
        Ok(()) => {
            println!("\n✨ SUCCESS! Import finished.");
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Import failed: {}", e);
            std::process::exit(1);
        }
    }
}
