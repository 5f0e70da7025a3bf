use clap::Parser;
use inventory_model::config::toml_config::MergedConfig;
use inventory_model::core::ConfigProvider;
use inventory_model::utils::logger;
use inventory_model::utils::validation::{self, Validate};
use inventory_model::{
    CliConfig, DocumentKind, DocumentStore, InventoryError, LocalStorage, Printable, TomlConfig,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting inventory CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

async fn run(config: &CliConfig) -> Result<(), InventoryError> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            tracing::debug!("Loaded configuration from {}", path);
            file_config
        }
        None => TomlConfig::default(),
    };
    let settings = MergedConfig::new(config, &file_config);

    let store = DocumentStore::new(LocalStorage::new("."));
    let document = store.load(&config.input, config.kind).await?;

    let (models, items) = document.counts();
    tracing::info!("📦 Loaded {} models and {} items from {}", models, items, config.input);

    if config.print {
        document.print(settings.indentation())?;
    }

    if settings.strict_validation() {
        // 只有完整的 inventory 才能檢查 model 參照
        let check_references =
            settings.check_references() && document.kind() == DocumentKind::Inventory;
        let inventory = document.clone().into_inventory();
        validation::validate_inventory(&inventory, check_references)?;
        tracing::info!("✅ Strict validation passed");
    }

    if let Some(output) = &config.output {
        store.save(output, &document, settings.pretty_output()).await?;
        tracing::info!("📁 Output saved to: {}", output);
    }

    Ok(())
}
