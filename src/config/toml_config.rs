use crate::core::ConfigProvider;
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub indentation: Option<usize>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub strict: Option<bool>,
    pub check_references: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InventoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INVENTORY_INDENT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InventoryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_range("output.indentation", self.indentation(), 0, 8)?;

        if !self.strict_validation() && self.validation_flag(|v| v.check_references) {
            tracing::warn!("validation.check_references has no effect unless validation.strict is enabled");
        }

        Ok(())
    }

    fn output_flag(&self, pick: impl Fn(&OutputConfig) -> Option<bool>) -> bool {
        self.output.as_ref().and_then(pick).unwrap_or(false)
    }

    fn validation_flag(&self, pick: impl Fn(&ValidationConfig) -> Option<bool>) -> bool {
        self.validation.as_ref().and_then(pick).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn indentation(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.indentation)
            .unwrap_or(0)
    }

    fn pretty_output(&self) -> bool {
        self.output_flag(|o| o.pretty)
    }

    fn strict_validation(&self) -> bool {
        self.validation_flag(|v| v.strict)
    }

    fn check_references(&self) -> bool {
        // 未設定時跟隨 strict
        self.check_references_setting()
            .unwrap_or_else(|| self.strict_validation())
    }

    fn check_references_setting(&self) -> Option<bool> {
        self.validation.as_ref().and_then(|v| v.check_references)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Combines command line flags with file settings; a flag set on either side wins.
///
/// `check_references` is the exception: a value written explicitly on either
/// side (primary first) is used as-is instead of being OR-ed.
pub struct MergedConfig<'a, A: ConfigProvider, B: ConfigProvider> {
    primary: &'a A,
    fallback: &'a B,
}

impl<'a, A: ConfigProvider, B: ConfigProvider> MergedConfig<'a, A, B> {
    pub fn new(primary: &'a A, fallback: &'a B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: ConfigProvider, B: ConfigProvider> ConfigProvider for MergedConfig<'_, A, B> {
    fn indentation(&self) -> usize {
        match self.primary.indentation() {
            0 => self.fallback.indentation(),
            n => n,
        }
    }

    fn pretty_output(&self) -> bool {
        self.primary.pretty_output() || self.fallback.pretty_output()
    }

    fn strict_validation(&self) -> bool {
        self.primary.strict_validation() || self.fallback.strict_validation()
    }

    fn check_references(&self) -> bool {
        self.check_references_setting().unwrap_or_else(|| {
            self.primary.check_references() || self.fallback.check_references()
        })
    }

    fn check_references_setting(&self) -> Option<bool> {
        self.primary
            .check_references_setting()
            .or_else(|| self.fallback.check_references_setting())
    }
}
