//! Configuration file support for prism.
//!
//! Loads optional `prism.toml` from the working directory (or `--config`).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "prism.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub build: BuildConfig,
}

/// Output settings for `prism build`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory the page is written into.
    pub out_dir: PathBuf,
    /// File name of the page inside `out_dir`.
    pub file_name: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            file_name: "index.html".to_string(),
        }
    }
}

impl PrismConfig {
    /// Load `prism.toml` from the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Full path of the page `prism build` writes.
    pub fn output_path(&self) -> PathBuf {
        self.build.out_dir.join(&self.build.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PrismConfig::default();
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert_eq!(config.build.file_name, "index.html");
        assert_eq!(config.output_path(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = PrismConfig::load(temp.path());
        assert_eq!(config.build.file_name, "index.html");
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            r#"
[build]
out_dir = "public"
file_name = "prism.html"
"#,
        )
        .expect("write config");

        let config = PrismConfig::load(temp.path());
        assert_eq!(config.output_path(), PathBuf::from("public/prism.html"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[build]\nout_dir = \"site\"\n")
            .expect("write config");

        let config = PrismConfig::load(temp.path());
        assert_eq!(config.build.out_dir, PathBuf::from("site"));
        assert_eq!(config.build.file_name, "index.html");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "build = [not valid")
            .expect("write config");

        let config = PrismConfig::load(temp.path());
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    }
}
