pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::document::{Document, DocumentKind, DocumentStore};
pub use crate::core::inventory::Inventory;
pub use crate::core::printer::Printable;
pub use crate::domain::{item::Item, model::Model, ports::JsonCodec, timestamp::Timestamp};
pub use crate::utils::error::{InventoryError, Result};
