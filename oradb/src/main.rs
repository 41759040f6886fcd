// oradb/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug oradb sqlplus ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sqlplus {
            project_dir,
            connection,
            sql,
            file,
            command,
        } => commands::sqlplus::execute(project_dir, connection, sql, file, command),

        Commands::Expdp {
            project_dir,
            connection,
            datapump,
            command,
        } => commands::expdp::execute(project_dir, connection, datapump, command),

        Commands::Impdp {
            project_dir,
            connection,
            datapump,
            remap_tablespace,
            remap_schema,
            command,
        } => commands::impdp::execute(
            project_dir,
            connection,
            datapump,
            remap_tablespace,
            remap_schema,
            command,
        ),
    }
}
