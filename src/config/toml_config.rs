use crate::config::ServiceConfig;
use crate::core::patch::PatchSemantics;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::logger::LogFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub directory: Option<DirectorySection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySection {
    pub patch_semantics: Option<PatchSemantics>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORT})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將檔案中有設定的值覆寫到 `config`
    pub fn apply_to(&self, config: &mut ServiceConfig) {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                config.host = host.clone();
            }
            if let Some(port) = server.port {
                config.port = port;
            }
        }
        if let Some(patch_semantics) = self
            .directory
            .as_ref()
            .and_then(|d| d.patch_semantics)
        {
            config.patch_semantics = patch_semantics;
        }
        if let Some(logging) = &self.logging {
            if let Some(format) = logging.format {
                config.log_format = format;
            }
            if let Some(verbose) = logging.verbose {
                config.verbose = verbose;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[directory]
patch_semantics = "presence"

[logging]
format = "json"
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let mut resolved = ServiceConfig::default();
        config.apply_to(&mut resolved);

        assert_eq!(resolved.host, "127.0.0.1");
        assert_eq!(resolved.port, 8080);
        assert_eq!(resolved.patch_semantics, PatchSemantics::Presence);
        assert_eq!(resolved.log_format, LogFormat::Json);
        assert!(resolved.verbose);
    }

    #[test]
    fn test_missing_sections_keep_defaults() {
        let config = TomlConfig::from_toml_str("[server]\nport = 4000\n").unwrap();
        let mut resolved = ServiceConfig::default();
        config.apply_to(&mut resolved);

        assert_eq!(resolved.port, 4000);
        assert_eq!(resolved.host, ServiceConfig::default().host);
        assert_eq!(resolved.patch_semantics, PatchSemantics::Truthy);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROFESSORES_TEST_HOST", "10.0.0.5");

        let toml_content = r#"
[server]
host = "${PROFESSORES_TEST_HOST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.server.and_then(|s| s.host).as_deref(),
            Some("10.0.0.5")
        );

        std::env::remove_var("PROFESSORES_TEST_HOST");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let config =
            TomlConfig::from_toml_str("[server]\nhost = \"${PROFESSORES_TEST_UNSET}\"\n").unwrap();
        assert_eq!(
            config.server.and_then(|s| s.host).as_deref(),
            Some("${PROFESSORES_TEST_UNSET}")
        );
    }

    #[test]
    fn test_invalid_patch_semantics_is_rejected() {
        let result = TomlConfig::from_toml_str("[directory]\npatch_semantics = \"sometimes\"\n");
        assert!(matches!(result, Err(DirectoryError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"localhost\"\nport = 3100\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let server = config.server.unwrap();
        assert_eq!(server.host.as_deref(), Some("localhost"));
        assert_eq!(server.port, Some(3100));
    }
}
