// oradb-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::project::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Discover the project file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Parse the YAML
    let content = fs::read_to_string(&config_path)?;
    let mut config: ProjectConfig = serde_yaml::from_str(&content)?;

    // 3. Override via environment variables (layering pattern)
    // Lets CI do: ORADB_PASSWORD=... oradb sqlplus ...
    apply_env_overrides(&mut config);

    // 4. Structural validation (required fields)
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["oradb.yaml", "oradb.yml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

fn apply_env_overrides(config: &mut ProjectConfig) {
    if let Ok(val) = std::env::var("ORADB_USERNAME") {
        info!("Overriding credentials.username via ENV");
        config.credentials.username = val;
    }
    // Never logged; the value is a secret.
    if let Ok(val) = std::env::var("ORADB_PASSWORD") {
        config.credentials.password = val;
    }
    if let Ok(val) = std::env::var("ORADB_SERVER_ID") {
        info!(new = ?val, "Overriding credentials.server-id via ENV");
        config.credentials.server_id = val;
    }
    if let Ok(val) = std::env::var("ORADB_HOSTNAME") {
        info!(old = ?config.connection.hostname, new = ?val, "Overriding connection.hostname via ENV");
        config.connection.hostname = val;
    }
    if let Ok(val) = std::env::var("ORADB_SERVICE_NAME") {
        info!(old = ?config.connection.service_name, new = ?val, "Overriding connection.service-name via ENV");
        config.connection.service_name = val;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, name: &str, content: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_minimal_project() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "oradb.yaml",
            "connection:\n  service-name: ORCL\ncredentials:\n  username: scott\n",
        );

        let config = load_project_config(dir.path()).unwrap();
        assert_eq!(config.connection.service_name, "ORCL");
        assert_eq!(config.credentials.username, "scott");
    }

    #[test]
    fn test_yml_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "oradb.yml",
            "connection:\n  service-name: ORCL\n",
        );

        assert!(load_project_config(dir.path()).is_ok());
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigNotFound(_)));
    }

    #[test]
    fn test_missing_service_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "oradb.yaml", "credentials:\n  username: scott\n");

        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigError(_)));
    }
}
