pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::document::DocumentKind;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "inventory")]
#[command(about = "Decode, check and re-encode inventory model/item JSON")]
pub struct CliConfig {
    #[arg(long, help = "JSON file to read")]
    pub input: String,

    #[arg(long, value_enum, default_value = "inventory")]
    pub kind: DocumentKind,

    #[arg(long, help = "Write the canonical encoding to this path")]
    pub output: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, default_value = "0")]
    pub indent: usize,

    #[arg(long, help = "Print a human-readable dump to stdout")]
    pub print: bool,

    #[arg(long, help = "Reject incomplete entities and dangling model references")]
    pub strict: bool,

    #[arg(long, help = "Pretty-print the output JSON")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn indentation(&self) -> usize {
        self.indent
    }

    fn pretty_output(&self) -> bool {
        self.pretty
    }

    fn strict_validation(&self) -> bool {
        self.strict
    }

    // 由 strict 推導，檔案中明確設定的 check_references 優先
    fn check_references(&self) -> bool {
        self.strict
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        validate_range("indent", self.indent, 0, 8)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::config::toml_config::{MergedConfig, TomlConfig};

    #[test]
    fn test_parse_cli_flags() {
        let config = CliConfig::parse_from([
            "inventory",
            "--input",
            "stock.json",
            "--kind",
            "item",
            "--strict",
            "--indent",
            "2",
        ]);

        assert_eq!(config.input, "stock.json");
        assert_eq!(config.kind, DocumentKind::Item);
        assert!(config.strict_validation());
        assert_eq!(config.indentation(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_kind_is_inventory() {
        let config = CliConfig::parse_from(["inventory", "--input", "stock.json"]);
        assert_eq!(config.kind, DocumentKind::Inventory);
        assert!(!config.pretty_output());
    }

    #[test]
    fn test_rejects_large_indent() {
        let config = CliConfig::parse_from(["inventory", "--input", "a.json", "--indent", "12"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strict_flag_keeps_file_reference_setting() {
        let flags = CliConfig::parse_from(["inventory", "--input", "a.json", "--strict"]);
        let file = TomlConfig::from_toml_str("[validation]\ncheck_references = false\n").unwrap();

        let merged = MergedConfig::new(&flags, &file);
        assert!(merged.strict_validation());
        assert!(!merged.check_references());

        let toml_cfg = TomlConfig::default();
        let merged = MergedConfig::new(&flags, &toml_cfg);
        assert!(merged.check_references());
    }
}
