use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub format: OutputFormat,
    /// Companion ignore file; defaults to `.dockerignore` next to the
    /// Dockerfile when unset.
    pub ignore_file: Option<PathBuf>,
    /// Substrings that mark a COPY/ADD source or target as sensitive.
    pub sensitive_files: Vec<String>,
    /// Substrings that mark a build-argument name as sensitive.
    pub sensitive_build_args: Vec<String>,
    /// Suffixes for which ADD's auto-extract behavior is legitimate.
    pub archive_suffixes: Vec<String>,
    /// Rule codes to skip entirely (e.g. ["DL006"]).
    pub disabled_rules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            ignore_file: None,
            sensitive_files: vec![
                ".env".into(),
                ".pem".into(),
                ".properties".into(),
                "settings".into(),
                "config".into(),
                "secrets".into(),
                "application".into(),
                "appsettings".into(),
                "credentials".into(),
                "environment".into(),
            ],
            sensitive_build_args: vec![
                "key".into(),
                "secret".into(),
                "token".into(),
                "pass".into(),
            ],
            archive_suffixes: vec![
                ".gz".into(),
                ".tgz".into(),
                ".tar".into(),
                ".zip".into(),
                ".bz2".into(),
                ".xz".into(),
            ],
            disabled_rules: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = project_root.join(".quaylintrc.toml");
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| anyhow::anyhow!("Config parse error: {e}"))
            }
            None => Ok(Config::default()),
        }
    }

    pub fn rule_enabled(&self, code: &str) -> bool {
        !self.disabled_rules.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    pub const fn default_toml() -> &'static str {
        r#"# quaylint configuration

# Companion ignore file; defaults to the .dockerignore next to the Dockerfile.
# ignore_file = ".dockerignore"

# Substrings that mark a COPY/ADD source or target as sensitive (DL001).
# sensitive_files = [".env", ".pem", "secrets", "credentials"]

# Substrings that mark a build-argument name as sensitive (DL004).
# sensitive_build_args = ["key", "secret", "token", "pass"]

# Suffixes for which ADD's auto-extract behavior is legitimate (DL007).
# archive_suffixes = [".gz", ".tgz", ".tar", ".zip", ".bz2", ".xz"]

# Rule codes to skip entirely.
# disabled_rules = ["DL006"]
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_carry_sensitive_lists() {
        let config = Config::default();
        assert!(config.sensitive_files.contains(&"secrets".to_string()));
        assert!(config.sensitive_build_args.contains(&"token".to_string()));
        assert!(config.archive_suffixes.contains(&".gz".to_string()));
        assert!(config.disabled_rules.is_empty());
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(None, dir.path()).unwrap();
        assert!(config.rule_enabled("DL001"));
    }

    #[test]
    fn test_load_from_project_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".quaylintrc.toml"),
            "disabled_rules = [\"DL006\"]\nsensitive_build_args = [\"apikey\"]\n",
        )
        .unwrap();

        let config = Config::load(None, dir.path()).unwrap();
        assert!(!config.rule_enabled("DL006"));
        assert!(config.rule_enabled("DL001"));
        assert_eq!(config.sensitive_build_args, vec!["apikey"]);
        // Unspecified fields keep their defaults
        assert!(config.sensitive_files.contains(&"secrets".to_string()));
    }

    #[test]
    fn test_rule_enabled_case_insensitive() {
        let config = Config {
            disabled_rules: vec!["dl008".to_string()],
            ..Config::default()
        };
        assert!(!config.rule_enabled("DL008"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "sensitive_files = not-a-list").unwrap();
        assert!(Config::load(Some(&path), dir.path()).is_err());
    }

    #[test]
    fn test_default_toml_round_trips() {
        let config: Config = toml::from_str(Config::default_toml()).unwrap();
        assert!(config.rule_enabled("DL001"));
    }
}
