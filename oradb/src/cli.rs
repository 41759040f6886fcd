// oradb/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oradb")]
#[command(about = "Build-pipeline automation for Oracle's command-line utilities", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Connection/credential overrides shared by every subcommand.
/// Precedence: flag > ORADB_* environment variable > oradb.yaml > default.
#[derive(Args, Clone, Default)]
pub struct ConnectionArgs {
    /// User name for your database
    #[arg(long)]
    pub username: Option<String>,

    /// Password for your database
    #[arg(long)]
    pub password: Option<String>,

    /// Use credentials from a named entry in the 'servers' section
    #[arg(long)]
    pub server_id: Option<String>,

    /// Host name of your database server
    #[arg(long)]
    pub hostname: Option<String>,

    /// Port of your database server
    #[arg(long)]
    pub port: Option<u16>,

    /// Service name of the database instance
    #[arg(long)]
    pub service_name: Option<String>,

    /// Instance name, for RAC databases with multiple instances
    #[arg(long)]
    pub instance_name: Option<String>,

    /// Role for the "AS" clause (SYSDBA or SYSOPER; other values are ignored)
    #[arg(long)]
    pub as_clause: Option<String>,

    /// Render the connect identifier in Easy Connect form
    #[arg(long)]
    pub easy_connect: bool,
}

/// Data Pump options shared by expdp and impdp.
#[derive(Args, Clone, Default)]
pub struct DatapumpArgs {
    /// Oracle directory object for dump and log files
    #[arg(long)]
    pub directory: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long)]
    pub dumpfile: Option<String>,

    #[arg(long)]
    pub exclude: Option<String>,

    #[arg(long)]
    pub include: Option<String>,

    #[arg(long)]
    pub logfile: Option<String>,

    #[arg(long)]
    pub network_link: Option<String>,

    #[arg(long)]
    pub schemas: Option<String>,

    #[arg(long)]
    pub tables: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📜 Executes scripts or statements with the SQL*Plus client
    Sqlplus {
        /// Project directory containing oradb.yaml
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[command(flatten)]
        connection: ConnectionArgs,

        /// Inline SQL statements to execute
        #[arg(long)]
        sql: Option<String>,

        /// Script file to execute
        #[arg(long)]
        file: Option<PathBuf>,

        /// sqlplus executable (name or full path)
        #[arg(long)]
        command: Option<String>,
    },

    /// 📦 Exports data with Oracle Data Pump (expdp)
    Expdp {
        /// Project directory containing oradb.yaml
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[command(flatten)]
        connection: ConnectionArgs,

        #[command(flatten)]
        datapump: DatapumpArgs,

        /// expdp executable (name or full path)
        #[arg(long)]
        command: Option<String>,
    },

    /// 📥 Imports data with Oracle Data Pump (impdp)
    Impdp {
        /// Project directory containing oradb.yaml
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[command(flatten)]
        connection: ConnectionArgs,

        #[command(flatten)]
        datapump: DatapumpArgs,

        /// Remap tablespaces during the import (FROM:TO)
        #[arg(long)]
        remap_tablespace: Option<String>,

        /// Remap schemas during the import (FROM:TO)
        #[arg(long)]
        remap_schema: Option<String>,

        /// impdp executable (name or full path)
        #[arg(long)]
        command: Option<String>,
    },
}
