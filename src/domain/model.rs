use crate::domain::codec::{merge_int, merge_string};
use crate::domain::ports::JsonCodec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry describing a product type.
///
/// `id` is zero until an external store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Model {
    pub id: i64,
    pub maker: String,
    pub name: String,
    pub r#type: String,
}

impl Model {
    pub fn new(
        id: i64,
        maker: impl Into<String>,
        name: impl Into<String>,
        r#type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            maker: maker.into(),
            name: name.into(),
            r#type: r#type.into(),
        }
    }
}

impl JsonCodec for Model {
    fn decode(&mut self, json: &Map<String, Value>) {
        merge_int(json, "id", &mut self.id);
        merge_string(json, "maker", &mut self.maker);
        merge_string(json, "name", &mut self.name);
        merge_string(json, "type", &mut self.r#type);
    }

    fn encode(&self) -> Map<String, Value> {
        let mut json = Map::new();
        json.insert("id".to_string(), Value::from(self.id));
        json.insert("maker".to_string(), Value::from(self.maker.as_str()));
        json.insert("name".to_string(), Value::from(self.name.as_str()));
        json.insert("type".to_string(), Value::from(self.r#type.as_str()));
        json
    }
}

impl From<Value> for Model {
    fn from(value: Value) -> Self {
        let mut model = Self::default();
        model.decode_value(&value);
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_default_model_encodes_all_keys() {
        let encoded = Value::Object(Model::default().encode());
        assert_eq!(
            encoded.to_string(),
            r#"{"id":0,"maker":"","name":"","type":""}"#
        );
    }

    #[test]
    fn test_encode_key_order() {
        let model = Model::new(12, "Fujifilm", "X100V", "camera");
        let encoded = model.encode();
        let keys: Vec<&str> = encoded.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "maker", "name", "type"]);
    }

    #[test]
    fn test_decode_string_id_is_coerced() {
        let mut model = Model::default();
        model.decode(&object(json!({"id": "7"})));

        assert_eq!(model.id, 7);
        assert_eq!(model.maker, "");
        assert_eq!(model.name, "");
        assert_eq!(model.r#type, "");
    }

    #[test]
    fn test_decode_missing_keys_keep_prior_values() {
        let mut model = Model::new(4, "Sony", "A7 III", "camera");
        model.decode(&object(json!({"name": "A7 IV"})));

        assert_eq!(model, Model::new(4, "Sony", "A7 IV", "camera"));
    }

    #[test]
    fn test_decode_wrong_typed_text_is_ignored() {
        let mut model = Model::new(4, "Sony", "A7 III", "camera");
        model.decode(&object(json!({"maker": 42, "name": null, "type": ["lens"]})));

        assert_eq!(model, Model::new(4, "Sony", "A7 III", "camera"));
    }

    #[test]
    fn test_round_trip() {
        let model = Model::new(-3, "Zeiss", "Planar 50mm \"T*\"", "lens");
        assert_eq!(Model::from_json(&model.encode()), model);
    }

    #[test]
    fn test_serde_matches_codec() {
        let model = Model::new(9, "Leica", "M6", "camera");
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            model.to_json_value()
        );

        let decoded: Model = serde_json::from_str(r#"{"id": 9.0, "maker": "Leica", "extra": true}"#).unwrap();
        assert_eq!(decoded, Model::new(9, "Leica", "", ""));

        let from_non_object: Model = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(from_non_object, Model::default());
    }
}
