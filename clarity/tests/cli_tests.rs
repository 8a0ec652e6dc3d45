use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Runs `clarity` from an empty directory so no stray config is picked up.
struct ClarityTestEnv {
    dir: TempDir,
}

impl ClarityTestEnv {
    fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    fn clarity(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("clarity"));
        cmd.current_dir(self.dir.path())
            .env_remove("CLARITY_FIXTURE_DIR")
            .env_remove("CLARITY_LATENCY_MS")
            .env_remove("CLARITY_NO_LATENCY")
            .env_remove("RUST_LOG")
            .arg("--no-delay");
        cmd
    }
}

#[test]
fn test_rules_search_and_status() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["rules", "--search", "email", "--status", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Email Completeness"))
        .stdout(predicate::str::contains("Order Amount Validity").not());
    Ok(())
}

#[test]
fn test_paused_rules_only() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["rules", "--status", "paused"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shipping Address Null Check"))
        .stdout(predicate::str::contains("Inventory Referential Integrity"))
        .stdout(predicate::str::contains("Customer Email Completeness").not());
    Ok(())
}

#[test]
fn test_overview_shows_quality_score() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data Quality Overview"))
        .stdout(predicate::str::contains("87.6%"))
        .stderr(predicate::str::contains("Loading"));
    Ok(())
}

#[test]
fn test_unknown_profiling_database_fails_the_page() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["profiling", "--database", "nope_db"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load Data Profiling"));
    Ok(())
}

#[test]
fn test_profiling_drill_down() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["profiling", "--database", "customer_db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("customer_db.public"));
    Ok(())
}

#[test]
fn test_lineage_mermaid_export() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["lineage", "--format", "mermaid"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph LR"));
    Ok(())
}

#[test]
fn test_lineage_unknown_format_is_rejected() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["lineage", "--format", "dot"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_open_unknown_route_renders_not_found() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["open", "/settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page Not Found"))
        .stdout(predicate::str::contains("/settings"))
        .stderr(predicate::str::contains("404 Error"));
    Ok(())
}

#[test]
fn test_open_known_route() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["open", "/governance/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Highly Confidential"));
    Ok(())
}

#[test]
fn test_export_writes_valid_json() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    let out = env.dir.path().join("out/rules.json");
    env.clarity()
        .args(["export", "rules", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported rules"));

    let content = std::fs::read_to_string(&out)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    assert!(value.get("rules").is_some());
    Ok(())
}

#[test]
fn test_empty_fixture_dir_fails() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    let empty = env.dir.path().join("empty");
    std::fs::create_dir_all(&empty)?;
    env.clarity()
        .arg("--fixtures")
        .arg(&empty)
        .arg("incidents")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not load Incident Management"))
        .stderr(predicate::function(|err: &str| {
            err.matches("Could not load").count() == 1
        }))
        .stderr(predicate::str::contains("code:").not());
    Ok(())
}

#[test]
fn test_fixture_dir_override_is_read() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    let dir = env.dir.path().join("fx");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(
        dir.join("incidents.json"),
        r#"{
  "incidents": [
    {
      "id": "inc-9",
      "title": "Custom Incident From Disk",
      "description": "written by the test",
      "severity": "low",
      "status": "open",
      "assignee": "qa",
      "createdAt": "2024-01-15T10:00:00Z"
    }
  ],
  "stats": {
    "total": 1,
    "open": 1,
    "inProgress": 0,
    "resolved": 0,
    "bySeverity": { "critical": 0, "high": 0, "medium": 0, "low": 1 }
  }
}"#,
    )?;
    env.clarity()
        .arg("--fixtures")
        .arg(&dir)
        .arg("incidents")
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom Incident From Disk"));
    Ok(())
}

#[test]
fn test_governance_page() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    env.clarity()
        .args(["--plain", "governance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Highly Confidential"))
        .stdout(predicate::str::contains("Classified Assets"));
    Ok(())
}

#[test]
fn test_config_file_in_cwd_is_picked_up() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    // Points at a directory that does not exist: the page must fail to load.
    std::fs::write(
        env.dir.path().join("clarity.yaml"),
        "name: acme\nfixture-dir: ./missing\n",
    )?;
    env.clarity()
        .arg("costs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load Cost Observability"));
    Ok(())
}

#[test]
fn test_invalid_config_reports_help() -> Result<()> {
    let env = ClarityTestEnv::new()?;
    std::fs::write(
        env.dir.path().join("clarity.yaml"),
        "latency:\n  min-ms: 900\n  max-ms: 100\n",
    )?;
    env.clarity()
        .arg("costs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("clarity::infra::config"));
    Ok(())
}
