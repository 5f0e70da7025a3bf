use crate::core::inventory::Inventory;
use crate::domain::item::Item;
use crate::domain::model::Model;
use crate::utils::error::{InventoryError, Result};
use std::collections::HashSet;

/// Strict checks layered on top of the tolerant decode.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_assigned_id(field_name: &str, id: i64) -> Result<()> {
    if id < 1 {
        return Err(InventoryError::ValidationError {
            message: format!("{} must be a positive id, got {}", field_name, id),
        });
    }
    Ok(())
}

impl Validate for Model {
    fn validate(&self) -> Result<()> {
        validate_assigned_id("model.id", self.id)?;
        validate_non_empty_string("model.maker", &self.maker)?;
        validate_non_empty_string("model.name", &self.name)?;
        Ok(())
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<()> {
        validate_assigned_id("item.model", self.model)?;
        validate_non_empty_string("item.serial", &self.serial)?;
        if !self.date_bought.is_valid() {
            return Err(InventoryError::ValidationError {
                message: format!("item '{}' has no purchase date", self.serial),
            });
        }
        Ok(())
    }
}

/// 驗證整份庫存，`check_references` 決定是否檢查 item 指向的 model 存在
pub fn validate_inventory(inventory: &Inventory, check_references: bool) -> Result<()> {
    let mut seen = HashSet::new();
    for model in &inventory.models {
        model.validate()?;
        if !seen.insert(model.id) {
            return Err(InventoryError::DuplicateModelId { id: model.id });
        }
    }

    for item in &inventory.items {
        item.validate()?;
    }

    if check_references {
        if let Some(item) = inventory.unresolved_items().first() {
            return Err(InventoryError::UnresolvedReference {
                item_serial: item.serial.clone(),
                model: item.model,
            });
        }
    }

    Ok(())
}

impl Validate for Inventory {
    fn validate(&self) -> Result<()> {
        validate_inventory(self, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timestamp::Timestamp;

    fn item(model: i64, serial: &str) -> Item {
        Item::new(model, serial, Timestamp::parse_iso("2023-06-01T12:00:00"))
    }

    #[test]
    fn test_validate_model() {
        assert!(Model::new(1, "Canon", "EOS R5", "camera").validate().is_ok());
        assert!(Model::default().validate().is_err());
        assert!(Model::new(1, "  ", "EOS R5", "camera").validate().is_err());
        // type 可以留空
        assert!(Model::new(1, "Canon", "EOS R5", "").validate().is_ok());
    }

    #[test]
    fn test_validate_item() {
        assert!(item(1, "SN-1").validate().is_ok());
        assert!(item(0, "SN-1").validate().is_err());
        assert!(item(1, "").validate().is_err());
        assert!(Item::new(1, "SN-1", Timestamp::UNSET).validate().is_err());
    }

    #[test]
    fn test_validate_inventory_references() {
        let inventory = Inventory {
            models: vec![Model::new(1, "Canon", "EOS R5", "camera")],
            items: vec![item(1, "SN-1"), item(2, "SN-2")],
        };

        match inventory.validate() {
            Err(InventoryError::UnresolvedReference { item_serial, model }) => {
                assert_eq!(item_serial, "SN-2");
                assert_eq!(model, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(validate_inventory(&inventory, false).is_ok());
    }

    #[test]
    fn test_validate_inventory_duplicate_ids() {
        let inventory = Inventory {
            models: vec![
                Model::new(1, "Canon", "EOS R5", "camera"),
                Model::new(1, "Canon", "EOS R6", "camera"),
            ],
            items: vec![],
        };

        assert!(matches!(
            inventory.validate(),
            Err(InventoryError::DuplicateModelId { id: 1 })
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.indentation", 2usize, 0, 8).is_ok());
        assert!(validate_range("output.indentation", 9usize, 0, 8).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "inventory.json").is_ok());
        assert!(validate_path("input", "").is_err());
    }
}
