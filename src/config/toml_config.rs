use crate::core::ranking::DEFAULT_POPULAR_COUNT;
use crate::utils::error::{FilmorateError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "filmorate".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    pub default_popular_count: i64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_popular_count: DEFAULT_POPULAR_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }
}

/// Replaces `${VAR}` with the environment value. Unset variables are left as is.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| FilmorateError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });
    Ok(result.into_owned())
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("app.name", &self.app.name)?;

        if self.ranking.default_popular_count <= 0 {
            return Err(FilmorateError::ConfigError {
                message: format!(
                    "ranking.default_popular_count must be positive, got {}",
                    self.ranking.default_popular_count
                ),
            });
        }

        let levels = ["trace", "debug", "info", "warn", "error"];
        if !levels.contains(&self.logging.level.as_str()) {
            return Err(FilmorateError::ConfigError {
                message: format!(
                    "Unsupported logging.level {}. Valid levels: {}",
                    self.logging.level,
                    levels.join(", ")
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[app]
name = "filmorate-test"

[ranking]
default_popular_count = 5

[logging]
level = "debug"
json = true
"#;
        let config = AppConfig::from_toml_str(content).unwrap();
        assert_eq!(config.app.name, "filmorate-test");
        assert_eq!(config.ranking.default_popular_count, 5);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.ranking.default_popular_count, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FILMORATE_TEST_APP_NAME", "from-env");
        let config = AppConfig::from_toml_str(
            r#"
[app]
name = "${FILMORATE_TEST_APP_NAME}"
"#,
        )
        .unwrap();
        assert_eq!(config.app.name, "from-env");
        std::env::remove_var("FILMORATE_TEST_APP_NAME");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = AppConfig::from_toml_str("[ranking]\ndefault_popular_count = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[app]\nname = \"file-test\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.app.name, "file-test");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = AppConfig::from_toml_str("[ranking\n").unwrap_err();
        assert!(matches!(err, FilmorateError::TomlError(_)));
        assert_eq!(err.status_code(), 500);
    }
}
