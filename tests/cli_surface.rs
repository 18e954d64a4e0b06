mod common;

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};

use common::spawn_backend;

fn jobly(state_dir: &Path, base_url: Option<&str>, args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jobly"));
    cmd.arg("--state-dir").arg(state_dir);
    if let Some(url) = base_url {
        cmd.args(["--base-url", url]);
    }
    cmd.env_remove("JOBLY_BASE_URL")
        .env_remove("JOBLY_PASSWORD")
        .args(args)
        .output()
        .with_context(|| format!("run jobly {:?}", args))
}

fn run_ok(state_dir: &Path, base_url: Option<&str>, args: &[&str]) -> Result<String> {
    let out = jobly(state_dir, base_url, args)?;
    if !out.status.success() {
        anyhow::bail!(
            "jobly {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let help = run_ok(dir.path(), None, &["--help"])?;
    assert!(help.contains("Usage: jobly"));
    assert!(help.contains("[COMMAND]"));
    for cmd in ["login", "signup", "logout", "companies", "jobs", "apply", "profile", "remote"] {
        assert!(help.contains(cmd), "help is missing {}", cmd);
    }

    let remote_help = run_ok(dir.path(), None, &["remote", "--help"])?;
    assert!(remote_help.contains("Usage: jobly remote <COMMAND>"));
    assert!(remote_help.contains("set"));
    Ok(())
}

#[test]
fn guarded_commands_require_login() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = jobly(dir.path(), Some("http://127.0.0.1:9"), &["companies"])?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not signed in"));
    Ok(())
}

#[test]
fn remote_set_is_used_by_later_commands() -> Result<()> {
    let dir = tempfile::tempdir()?;
    run_ok(dir.path(), None, &["remote", "set", "--url", "http://jobly.test:3001/"])?;
    let shown = run_ok(dir.path(), None, &["remote", "show"])?;
    assert!(shown.contains("url: http://jobly.test:3001"));

    let overridden = run_ok(dir.path(), Some("http://other.test"), &["remote", "show"])?;
    assert!(overridden.contains("url: http://other.test"));
    assert!(overridden.contains("configured: http://jobly.test:3001"));
    Ok(())
}

#[test]
fn login_then_browse_and_apply() -> Result<()> {
    let backend = spawn_backend()?;
    let dir = tempfile::tempdir()?;
    let url = Some(backend.base_url.as_str());

    let out = run_ok(
        dir.path(),
        url,
        &["login", "--username", "testuser", "--password", "password"],
    )?;
    assert!(out.contains("Logged in as testuser"));

    let whoami = run_ok(dir.path(), url, &["whoami"])?;
    assert!(whoami.contains("user: testuser"));

    let jobs = run_ok(dir.path(), url, &["jobs", "--has-equity"])?;
    assert!(jobs.contains("Consulting civil engineer"));
    assert!(!jobs.contains("Information officer"));

    let applied = run_ok(dir.path(), url, &["apply", "3"])?;
    assert!(applied.contains("Applied to job 3"));
    let again = run_ok(dir.path(), url, &["apply", "3"])?;
    assert!(again.contains("Already applied to job 3"));
    assert_eq!(backend.requests_to("POST", "/users/testuser/jobs/3").len(), 1);

    let json = run_ok(dir.path(), url, &["jobs", "--json"])?;
    let rows: serde_json::Value = serde_json::from_str(&json)?;
    let job3 = rows
        .as_array()
        .and_then(|rows| rows.iter().find(|r| r["job"]["id"] == 3))
        .context("job 3 in output")?;
    assert_eq!(job3["applied"], true);

    run_ok(dir.path(), url, &["logout"])?;
    let out = jobly(dir.path(), url, &["whoami"])?;
    assert!(!out.status.success());
    Ok(())
}
