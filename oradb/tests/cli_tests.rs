use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Abstraction for managing a throwaway oradb project directory.
struct ProjectEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl ProjectEnv {
    fn new(config: &str) -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        std::fs::write(root.join("oradb.yaml"), config)?;
        Ok(Self { _tmp: tmp, root })
    }

    fn oradb(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("oradb"));
        cmd.current_dir(&self.root);
        cmd
    }
}

const MINIMAL: &str = "connection:\n  service-name: ORCL\n";

const WITH_CREDENTIALS: &str = "\
connection:
  service-name: ORCL
credentials:
  username: scott
  password: tiger
";

#[test]
fn test_missing_project_file_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    Command::new(assert_cmd::cargo::cargo_bin!("oradb"))
        .current_dir(tmp.path())
        .args(["expdp", "--directory", "/exp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load project configuration"));
    Ok(())
}

#[test]
fn test_missing_credentials_fails_with_hint() -> Result<()> {
    let env = ProjectEnv::new(MINIMAL)?;
    env.oradb()
        .args(["expdp", "--directory", "/exp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credentials needed"));
    Ok(())
}

#[test]
fn test_unknown_server_id_fails() -> Result<()> {
    let env = ProjectEnv::new(MINIMAL)?;
    env.oradb()
        .args(["expdp", "--directory", "/exp", "--server-id", "db9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server_id 'db9' not found"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_expdp_streams_child_output() -> Result<()> {
    let env = ProjectEnv::new(WITH_CREDENTIALS)?;
    // 'echo' stands in for expdp and prints the argument list it received.
    env.oradb()
        .args([
            "expdp",
            "--command",
            "echo",
            "--directory",
            "/exp",
            "--schemas",
            "HR",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DIRECTORY=/exp"))
        .stdout(predicate::str::contains("SCHEMAS=HR"))
        .stdout(predicate::str::contains("SUCCESS! Export finished."));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_impdp_appends_remap_arguments() -> Result<()> {
    let env = ProjectEnv::new(WITH_CREDENTIALS)?;
    env.oradb()
        .args([
            "impdp",
            "--command",
            "echo",
            "--directory",
            "/exp",
            "--remap-schema",
            "A:B",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("REMAP_SCHEMA=A:B"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failing_child_fails_the_run() -> Result<()> {
    let env = ProjectEnv::new(WITH_CREDENTIALS)?;
    env.oradb()
        .args(["expdp", "--command", "false", "--directory", "/exp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exited with code"));
    Ok(())
}

#[test]
fn test_expdp_without_directory_is_rejected() -> Result<()> {
    let env = ProjectEnv::new(WITH_CREDENTIALS)?;
    env.oradb()
        .arg("expdp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory"));
    Ok(())
}

#[test]
fn test_sqlplus_with_nothing_configured_is_a_noop() -> Result<()> {
    let env = ProjectEnv::new(WITH_CREDENTIALS)?;
    env.oradb()
        .arg("sqlplus")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS! SQL*Plus finished."));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_sqlplus_inline_sql_writes_login_script() -> Result<()> {
    let env = ProjectEnv::new(WITH_CREDENTIALS)?;
    env.oradb()
        .args([
            "sqlplus",
            "--command",
            "true",
            "--sql",
            "SELECT 1 FROM dual;",
        ])
        .assert()
        .success();

    let login = env.root.join("target/oradb/login.sql");
    let preamble = std::fs::read_to_string(login)?;
    assert!(preamble.contains("WHENEVER SQLERROR EXIT FAILURE ROLLBACK;"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_sqlplus_missing_script_file_fails() -> Result<()> {
    let env = ProjectEnv::new(WITH_CREDENTIALS)?;
    env.oradb()
        .args(["sqlplus", "--command", "true", "--file", "missing.sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Problem reading file"));
    Ok(())
}
