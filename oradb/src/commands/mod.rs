// oradb/src/commands/mod.rs

pub mod expdp;
pub mod impdp;
pub mod sqlplus;

use crate::cli::{ConnectionArgs, DatapumpArgs};
use oradb_core::domain::datapump::DatapumpConfig;
use oradb_core::domain::project::ProjectConfig;

// Flags win over the project file (which already absorbed the ORADB_* env).

pub(crate) fn apply_connection_overrides(config: &mut ProjectConfig, args: &ConnectionArgs) {
    if let Some(username) = &args.username {
        config.credentials.username = username.clone();
    }
    if let Some(password) = &args.password {
        config.credentials.password = password.clone();
    }
    if let Some(server_id) = &args.server_id {
        config.credentials.server_id = server_id.clone();
    }
    if let Some(hostname) = &args.hostname {
        config.connection.hostname = hostname.clone();
    }
    if let Some(port) = args.port {
        config.connection.port = port;
    }
    if let Some(service_name) = &args.service_name {
        config.connection.service_name = service_name.clone();
    }
    if let Some(instance_name) = &args.instance_name {
        config.connection.instance_name = instance_name.clone();
    }
    if let Some(as_clause) = &args.as_clause {
        config.connection.as_clause = as_clause.clone();
    }
    // Presence-only flag: it can turn Easy Connect on, never off.
    if args.easy_connect {
        config.connection.easy_connect = true;
    }
}

pub(crate) fn apply_datapump_overrides(options: &mut DatapumpConfig, args: &DatapumpArgs) {
    if args.directory.is_some() {
        options.directory = args.directory.clone();
    }
    if args.content.is_some() {
        options.content = args.content.clone();
    }
    if args.dumpfile.is_some() {
        options.dumpfile = args.dumpfile.clone();
    }
    if args.exclude.is_some() {
        options.exclude = args.exclude.clone();
    }
    if args.include.is_some() {
        options.include = args.include.clone();
    }
    if args.logfile.is_some() {
        options.logfile = args.logfile.clone();
    }
    if args.network_link.is_some() {
        options.network_link = args.network_link.clone();
    }
    if args.schemas.is_some() {
        options.schemas = args.schemas.clone();
    }
    if args.tables.is_some() {
        options.tables = args.tables.clone();
    }
}
