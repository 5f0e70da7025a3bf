use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Item '{item_serial}' references unknown model {model}")]
    UnresolvedReference { item_serial: String, model: i64 },

    #[error("Model id {id} is used more than once")]
    DuplicateModelId { id: i64 },
}

impl InventoryError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            InventoryError::IoError(e) => format!("無法讀寫檔案: {}", e),
            InventoryError::SerializationError(e) => format!("JSON 格式錯誤: {}", e),
            InventoryError::ConfigError { .. }
            | InventoryError::ConfigValidationError { .. }
            | InventoryError::InvalidConfigValueError { .. } => format!("配置錯誤: {}", self),
            InventoryError::ValidationError { .. }
            | InventoryError::UnresolvedReference { .. }
            | InventoryError::DuplicateModelId { .. } => format!("資料驗證失敗: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InventoryError::IoError(_) => "Check that the input path exists and the output directory is writable",
            InventoryError::SerializationError(_) => "Make sure the input file contains valid JSON",
            InventoryError::ConfigError { .. }
            | InventoryError::ConfigValidationError { .. }
            | InventoryError::InvalidConfigValueError { .. } => "Review the TOML configuration and command line flags",
            InventoryError::ValidationError { .. } => "Fill in the missing fields or run without --strict",
            InventoryError::UnresolvedReference { .. } => "Add the referenced model or fix the item's model id",
            InventoryError::DuplicateModelId { .. } => "Give every model a unique id",
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
