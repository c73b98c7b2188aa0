//! End-to-End CLI Tests for wpgraphql-site

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the site binary, run inside `dir` so the
/// default `site.toml` lookup never picks up a stray file.
fn site(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("wpgraphql-site");
    cmd.current_dir(dir.path());
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().expect("temp dir");
        site(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("build"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().expect("temp dir");
        site(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render / Build
// ============================================

mod output {
    use super::*;

    #[test]
    fn render_prints_document() {
        let dir = TempDir::new().expect("temp dir");
        site(&dir)
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("GraphQL API for WordPress"))
            .stdout(predicate::str::contains("https://github.com/wp-graphql/wp-graphql"));
    }

    #[test]
    fn build_writes_index_to_out_dir() {
        let dir = TempDir::new().expect("temp dir");
        site(&dir).args(["build", "--out", "dist"]).assert().success();

        let index = dir.path().join("dist/index.html");
        let html = std::fs::read_to_string(index).expect("index.html written");
        assert!(html.contains("/docs/getting-started/about"));
    }

    #[test]
    fn build_uses_config_out_dir_and_showcase() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(
            dir.path().join("site.toml"),
            r#"
out_dir = "from-config"

[[showcase]]
name = "Acme Corp"
url = "https://acme.test"
"#,
        )
        .expect("write config");

        site(&dir).arg("build").assert().success();

        let html = std::fs::read_to_string(dir.path().join("from-config/index.html"))
            .expect("index.html written");
        assert!(html.contains("Acme Corp"));
    }

    #[test]
    fn build_json_reports_pages() {
        let dir = TempDir::new().expect("temp dir");
        let output = site(&dir)
            .args(["build", "--out", "public", "--json"])
            .output()
            .expect("run");
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(report["pages"][0]["route"], "/");
        assert!(report["pages"][0]["bytes"].as_u64().unwrap_or(0) > 0);
    }
}

// ============================================
// Errors
// ============================================

mod errors {
    use super::*;

    #[test]
    fn invalid_config_fails() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("broken.toml"), "out_dir = [").expect("write config");

        site(&dir)
            .args(["--config", "broken.toml", "render"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("broken.toml"));
    }

    #[test]
    fn unwritable_out_dir_fails() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("blocker"), "file").expect("write blocker");

        site(&dir)
            .args(["build", "--out", "blocker"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("blocker"));
    }
}
