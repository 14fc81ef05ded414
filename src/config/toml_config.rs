use crate::config::{ServiceConfig, DEFAULT_ENDPOINT};
use crate::utils::error::{FxError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File form of the service settings:
///
/// ```toml
/// [service]
/// endpoint = "https://ecpyfac.ecornell.com/python/currency/fixed"
/// api_key = "${keyA}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceSection,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub endpoint: Option<String>,
    pub api_key: String,
}

impl std::fmt::Debug for ServiceSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSection")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FxError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FxError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${keyA})；未設定的變數保持原樣，交由驗證階段回報
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FxError::ConfigParse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Validated service settings; an unresolved `${VAR}` key is a missing setting.
    pub fn into_service_config(self) -> Result<ServiceConfig> {
        let config = ServiceConfig::new(
            self.service
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            self.service.api_key,
        );
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_service_section() {
        let toml_content = r#"
[service]
endpoint = "https://fx.example.com/fixed"
api_key = "plain-key"
"#;

        let config = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_service_config()
            .unwrap();

        assert_eq!(config.endpoint(), "https://fx.example.com/fixed");
        assert_eq!(config.api_key(), "plain-key");
    }

    #[test]
    fn test_endpoint_defaults() {
        let config = TomlConfig::from_toml_str("[service]\napi_key = \"k\"\n")
            .unwrap()
            .into_service_config()
            .unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FX_TOML_TEST_KEY", "from-env");

        let toml_content = r#"
[service]
api_key = "${FX_TOML_TEST_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.service.api_key, "from-env");

        std::env::remove_var("FX_TOML_TEST_KEY");
    }

    #[test]
    fn test_unresolved_key_fails_validation() {
        std::env::remove_var("FX_TOML_TEST_UNSET");
        let config = TomlConfig::from_toml_str("[service]\napi_key = \"${FX_TOML_TEST_UNSET}\"\n")
            .unwrap();

        match config.into_service_config() {
            Err(FxError::MissingConfig { field }) => assert_eq!(field, "FX_TOML_TEST_UNSET"),
            other => panic!("expected MissingConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[service"),
            Err(FxError::ConfigParse { .. })
        ));
        assert!(TomlConfig::from_toml_str("[other]\nx = 1\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nendpoint = \"http://localhost:9000/fixed\"\napi_key = \"file-key\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path())
            .unwrap()
            .into_service_config()
            .unwrap();
        assert_eq!(config.endpoint(), "http://localhost:9000/fixed");
    }
}
