use crate::utils::error::Result;
use serde_json::{Map, Value};

/// Tolerant JSON decode paired with a total, fixed-shape encode.
pub trait JsonCodec: Default {
    /// Merges the recognized keys of `json` into `self`. Never fails.
    fn decode(&mut self, json: &Map<String, Value>);

    /// Emits every field, always in the same key order.
    fn encode(&self) -> Map<String, Value>;

    fn from_json(json: &Map<String, Value>) -> Self {
        let mut entity = Self::default();
        entity.decode(json);
        entity
    }

    /// 非物件的值直接忽略
    fn decode_value(&mut self, value: &Value) {
        if let Value::Object(json) = value {
            self.decode(json);
        }
    }

    fn to_json_value(&self) -> Value {
        Value::Object(self.encode())
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider {
    fn indentation(&self) -> usize;
    fn pretty_output(&self) -> bool;
    fn strict_validation(&self) -> bool;
    fn check_references(&self) -> bool;

    /// An explicitly configured reference check, if any.
    fn check_references_setting(&self) -> Option<bool> {
        None
    }
}
