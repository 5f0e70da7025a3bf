use crate::domain::codec::{merge_int, merge_string, merge_timestamp};
use crate::domain::ports::JsonCodec;
use crate::domain::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A physical unit of inventory.
///
/// `model` refers to a [`Model`](crate::domain::model::Model) id by value;
/// nothing here checks that the referenced model exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Item {
    pub model: i64,
    pub serial: String,
    #[serde(rename = "dateBought")]
    pub date_bought: Timestamp,
}

impl Item {
    pub fn new(model: i64, serial: impl Into<String>, date_bought: impl Into<Timestamp>) -> Self {
        Self {
            model,
            serial: serial.into(),
            date_bought: date_bought.into(),
        }
    }
}

impl JsonCodec for Item {
    fn decode(&mut self, json: &Map<String, Value>) {
        merge_int(json, "model", &mut self.model);
        merge_string(json, "serial", &mut self.serial);
        merge_timestamp(json, "dateBought", &mut self.date_bought);
    }

    fn encode(&self) -> Map<String, Value> {
        let mut json = Map::new();
        json.insert("model".to_string(), Value::from(self.model));
        json.insert("serial".to_string(), Value::from(self.serial.as_str()));
        json.insert(
            "dateBought".to_string(),
            Value::from(self.date_bought.to_iso_string()),
        );
        json
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        let mut item = Self::default();
        item.decode_value(&value);
        item
    }
}
