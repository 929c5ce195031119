//! End-to-End CLI Tests for prism

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the prism binary
fn prism() -> Command {
    cargo_bin_cmd!("prism")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        prism()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        prism()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        prism().arg("deploy").assert().failure();
    }
}

// ============================================
// Build Tests
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_index_into_out_dir() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("public");

        prism()
            .current_dir(temp.path())
            .args(["build", "--out-dir"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(out.join("index.html")).expect("index.html");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"waitlist\""));
    }

    #[test]
    fn honors_config_file() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("prism.toml"),
            "[build]\nout_dir = \"site\"\nfile_name = \"landing.html\"\n",
        )
        .expect("write config");

        prism()
            .current_dir(temp.path())
            .arg("build")
            .assert()
            .success();

        assert!(temp.path().join("site/landing.html").exists());
    }

    #[test]
    fn flags_override_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("prism.toml"), "[build]\nout_dir = \"site\"\n")
            .expect("write config");

        prism()
            .current_dir(temp.path())
            .args(["build", "--file-name", "home.html"])
            .assert()
            .success();

        assert!(temp.path().join("site/home.html").exists());
        assert!(!temp.path().join("site/index.html").exists());
    }

    #[test]
    fn explicit_config_path_is_used() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("custom.toml");
        std::fs::write(&config, "[build]\nout_dir = \"custom-out\"\n").expect("write config");

        prism()
            .current_dir(temp.path())
            .arg("--config")
            .arg(&config)
            .arg("build")
            .assert()
            .success();

        assert!(temp.path().join("custom-out/index.html").exists());
    }

    #[test]
    fn defaults_to_dist() {
        let temp = TempDir::new().expect("temp dir");

        prism()
            .current_dir(temp.path())
            .arg("build")
            .assert()
            .success();

        assert!(temp.path().join("dist/index.html").exists());
    }
}

// ============================================
// Render / Check / Content Tests
// ============================================

mod output {
    use super::*;

    #[test]
    fn render_prints_document_to_stdout() {
        prism()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Enter the prism"))
            .stdout(predicate::str::contains("82K+"));
    }

    #[test]
    fn render_keeps_logs_off_stdout() {
        prism()
            .args(["--log-level", "debug", "render"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Rendered").not());
    }

    #[test]
    fn check_passes_on_seed_content() {
        prism()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("Content OK"));
    }

    #[test]
    fn content_exports_json() {
        let output = prism()
            .arg("content")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
        assert_eq!(json["features"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["pipeline"][0]["id"], "01");
        assert_eq!(json["reels"][2]["glow"], "yellow-top-center");
    }
}
