// oradb-core/src/domain/datapump.rs
//
// Argument assembly for Oracle Data Pump (expdp / impdp). The tools take the
// connect identifier as the first positional argument followed by NAME=value
// pairs, so insertion order matters here.

use serde::{Deserialize, Serialize};

/// Options shared by expdp and impdp. `None` (or empty) means "omit this
/// argument", not "pass an empty value".
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DatapumpConfig {
    #[serde(default)]
    pub content: Option<String>,

    /// Name of the Oracle directory object used for dump and log files.
    /// Required before either tool can run.
    #[serde(default)]
    pub directory: Option<String>,

    #[serde(default)]
    pub dumpfile: Option<String>,

    #[serde(default)]
    pub exclude: Option<String>,

    #[serde(default)]
    pub include: Option<String>,

    #[serde(default)]
    pub logfile: Option<String>,

    #[serde(rename = "network-link", default)]
    pub network_link: Option<String>,

    #[serde(default)]
    pub schemas: Option<String>,

    #[serde(default)]
    pub tables: Option<String>,
}

/// expdp carries no options beyond the shared set.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_expdp_command")]
    pub command: String,

    #[serde(flatten)]
    pub options: DatapumpConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            command: default_expdp_command(),
            options: DatapumpConfig::default(),
        }
    }
}

/// impdp adds the two remap options on top of the shared set.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImportConfig {
    #[serde(default = "default_impdp_command")]
    pub command: String,

    #[serde(flatten)]
    pub options: DatapumpConfig,

    #[serde(rename = "remap-tablespace", default)]
    pub remap_tablespace: Option<String>,

    #[serde(rename = "remap-schema", default)]
    pub remap_schema: Option<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            command: default_impdp_command(),
            options: DatapumpConfig::default(),
            remap_tablespace: None,
            remap_schema: None,
        }
    }
}

fn default_expdp_command() -> String {
    "expdp".to_string()
}

fn default_impdp_command() -> String {
    "impdp".to_string()
}

/// Arguments shared by both tools: the single-quoted connect identifier
/// first, then every present option as NAME=value in a fixed order.
pub fn common_arguments(identifier: &str, options: &DatapumpConfig) -> Vec<String> {
    let mut args = Vec::new();
    // Data Pump wants the identifier quoted; no shell is involved, the
    // quotes are part of the token the tool receives.
    args.push(format!("'{}'", identifier));

    push_option(&mut args, "CONTENT", &options.content);
    push_option(&mut args, "DIRECTORY", &options.directory);
    push_option(&mut args, "DUMPFILE", &options.dumpfile);
    push_option(&mut args, "EXCLUDE", &options.exclude);
    push_option(&mut args, "INCLUDE", &options.include);
    push_option(&mut args, "LOGFILE", &options.logfile);
    push_option(&mut args, "NETWORK_LINK", &options.network_link);
    push_option(&mut args, "SCHEMAS", &options.schemas);
    push_option(&mut args, "TABLES", &options.tables);

    args
}

pub fn export_arguments(identifier: &str, config: &ExportConfig) -> Vec<String> {
    common_arguments(identifier, &config.options)
}

pub fn import_arguments(identifier: &str, config: &ImportConfig) -> Vec<String> {
    let mut args = common_arguments(identifier, &config.options);
    push_option(&mut args, "REMAP_TABLESPACE", &config.remap_tablespace);
    push_option(&mut args, "REMAP_SCHEMA", &config.remap_schema);
    args
}

fn push_option(args: &mut Vec<String>, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            args.push(format!("{}={}", name, value));
        }
    }
}
