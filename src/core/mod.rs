pub mod document;
pub mod inventory;
pub mod printer;

pub use crate::domain::item::Item;
pub use crate::domain::model::Model;
pub use crate::domain::ports::{ConfigProvider, JsonCodec, Storage};
pub use crate::domain::timestamp::Timestamp;
pub use crate::utils::error::Result;
