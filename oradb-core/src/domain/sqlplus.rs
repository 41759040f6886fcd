// oradb-core/src/domain/sqlplus.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Statements executed before the ones in `sql_command` / `sql_file`. They
/// are written to a login.sql file and run right after sqlplus starts, and
/// by default they make sure the build fails when a statement errors.
pub const DEFAULT_BEFORE_SQL: &str =
    "WHENEVER SQLERROR EXIT FAILURE ROLLBACK;\nWHENEVER OSERROR EXIT FAILURE ROLLBACK;";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SqlPlusConfig {
    /// The sqlplus command to execute. If sqlplus is not on the PATH this
    /// can be the full path to the binary.
    #[serde(default = "default_sqlplus_command")]
    pub command: String,

    #[serde(rename = "before-sql", default = "default_before_sql")]
    pub before_sql: Option<String>,

    /// Statements sqlplus should execute, inline.
    #[serde(rename = "sql-command", default)]
    pub sql_command: Option<String>,

    /// File containing statements sqlplus should execute.
    #[serde(rename = "sql-file", default)]
    pub sql_file: Option<PathBuf>,
}

impl Default for SqlPlusConfig {
    fn default() -> Self {
        Self {
            command: default_sqlplus_command(),
            before_sql: default_before_sql(),
            sql_command: None,
            sql_file: None,
        }
    }
}

fn default_sqlplus_command() -> String {
    "sqlplus".to_string()
}

fn default_before_sql() -> Option<String> {
    Some(DEFAULT_BEFORE_SQL.to_string())
}

/// sqlplus argument list: `-L` logs on only once instead of prompting again
/// on bad credentials, then the identifier, then the script reference. The
/// `@name` form is relative, the caller runs the child inside the script's
/// directory.
pub fn sqlplus_arguments(identifier: &str, script_name: &str) -> Vec<String> {
    vec![
        "-L".to_string(),
        identifier.to_string(),
        format!("@{}", script_name),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_order() {
        let args = sqlplus_arguments("scott/tiger@//db:1521/ORCL", "statements-1.sql");
        assert_eq!(
            args,
            vec!["-L", "scott/tiger@//db:1521/ORCL", "@statements-1.sql"]
        );
    }

    #[test]
    fn test_default_before_sql_fails_the_build_on_errors() {
        let config = SqlPlusConfig::default();
        let before = config.before_sql.as_deref().unwrap_or_default();
        assert!(before.contains("WHENEVER SQLERROR EXIT FAILURE ROLLBACK;"));
        assert!(before.contains("WHENEVER OSERROR EXIT FAILURE ROLLBACK;"));
    }
}
