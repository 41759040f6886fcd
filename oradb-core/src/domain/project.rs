// oradb-core/src/domain/project.rs

use crate::domain::connect::ConnectionConfig;
use crate::domain::datapump::{ExportConfig, ImportConfig};
use crate::domain::sqlplus::SqlPlusConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Raw credential configuration, before resolution. Either the explicit
/// username/password pair or a reference into the `servers` section.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CredentialSettings {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Reference to an entry in the `servers` section, the equivalent of
    /// keeping credentials out of the project file.
    #[serde(rename = "server-id", default)]
    pub server_id: String,
}

/// One named entry of the credential store.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ServerEntry {
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(nested)]
    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub credentials: CredentialSettings,

    /// Named credential store, looked up through `credentials.server-id`.
    #[serde(default)]
    pub servers: HashMap<String, ServerEntry>,

    #[serde(default)]
    pub sqlplus: SqlPlusConfig,

    #[serde(default)]
    pub expdp: ExportConfig,

    #[serde(default)]
    pub impdp: ImportConfig,

    /// Build output directory, relative to the project directory. Hosts the
    /// login.sql scratch area for sqlplus runs.
    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            credentials: CredentialSettings::default(),
            servers: HashMap::new(),
            sqlplus: SqlPlusConfig::default(),
            expdp: ExportConfig::default(),
            impdp: ImportConfig::default(),
            target_path: default_target_path(),
        }
    }
}

fn default_target_path() -> String {
    "target".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_gets_defaults() {
        let config: ProjectConfig = serde_yaml::from_str(
            r#"
connection:
  service-name: ORCL
credentials:
  username: scott
  password: tiger
"#,
        )
        .unwrap();

        assert_eq!(config.connection.hostname, "localhost");
        assert_eq!(config.connection.port, 1521);
        assert!(!config.connection.easy_connect);
        assert_eq!(config.sqlplus.command, "sqlplus");
        assert_eq!(config.expdp.command, "expdp");
        assert_eq!(config.impdp.command, "impdp");
        assert_eq!(config.target_path, "target");
        assert!(config.sqlplus.before_sql.is_some());
    }

    #[test]
    fn test_servers_section_deserializes() {
        let config: ProjectConfig = serde_yaml::from_str(
            r#"
connection:
  service-name: ORCL
credentials:
  server-id: db1
servers:
  db1:
    username: scott
    password: tiger
"#,
        )
        .unwrap();

        assert_eq!(config.credentials.server_id, "db1");
        assert_eq!(config.servers["db1"].username, "scott");
    }

    #[test]
    fn test_missing_service_name_fails_validation() {
        let config: ProjectConfig = serde_yaml::from_str("credentials: {username: scott}").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_datapump_sections() {
        let config: ProjectConfig = serde_yaml::from_str(
            r#"
connection:
  service-name: ORCL
impdp:
  directory: DP_DIR
  remap-schema: A:B
"#,
        )
        .unwrap();

        assert_eq!(config.impdp.options.directory.as_deref(), Some("DP_DIR"));
        assert_eq!(config.impdp.remap_schema.as_deref(), Some("A:B"));
        assert!(config.expdp.options.directory.is_none());
    }
}
