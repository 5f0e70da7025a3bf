use crate::core::{Item, JsonCodec, Model};
use serde_json::{Map, Value};

/// Decodes one object or an array of objects into entities.
///
/// Array elements that are not objects are skipped; any other top-level
/// value yields an empty list.
pub fn decode_list<T: JsonCodec>(value: &Value) -> Vec<T> {
    match value {
        Value::Object(json) => vec![T::from_json(json)],
        Value::Array(elements) => elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| match element {
                Value::Object(json) => Some(T::from_json(json)),
                other => {
                    tracing::debug!("Skipping non-object element {} ({})", index, other);
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn encode_list<T: JsonCodec>(entities: &[T]) -> Value {
    Value::Array(entities.iter().map(T::to_json_value).collect())
}

/// Models and items held together, with id lookups from items to models.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    pub models: Vec<Model>,
    pub items: Vec<Item>,
}

impl Inventory {
    pub fn new(models: Vec<Model>, items: Vec<Item>) -> Self {
        Self { models, items }
    }

    pub fn find_model(&self, id: i64) -> Option<&Model> {
        self.models.iter().find(|model| model.id == id)
    }

    pub fn model_of(&self, item: &Item) -> Option<&Model> {
        self.find_model(item.model)
    }

    /// 找出 model id 對不到任何 Model 的 item
    pub fn unresolved_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.model_of(item).is_none())
            .collect()
    }

    pub fn items_of<'a>(&'a self, model: &'a Model) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.model == model.id)
    }
}

impl JsonCodec for Inventory {
    fn decode(&mut self, json: &Map<String, Value>) {
        if let Some(models) = json.get("models").filter(|value| value.is_array()) {
            self.models = decode_list(models);
        }

        if let Some(items) = json.get("items").filter(|value| value.is_array()) {
            self.items = decode_list(items);
        }
    }

    fn encode(&self) -> Map<String, Value> {
        let mut json = Map::new();
        json.insert("models".to_string(), encode_list(&self.models));
        json.insert("items".to_string(), encode_list(&self.items));
        json
    }
}
