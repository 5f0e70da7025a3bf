use crate::domain::timestamp::Timestamp;
use serde_json::{Map, Value};

/// Coerces any JSON value to an integer.
///
/// Integers pass through, floats truncate toward zero, and strings are
/// parsed as an integer or a finite float. Everything else becomes `0`.
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
            .or_else(|| number.as_f64().map(|n| n as i64))
            .unwrap_or(0),
        Value::String(text) => parse_numeric(text.trim()).unwrap_or(0),
        _ => 0,
    }
}

fn parse_numeric(text: &str) -> Option<i64> {
    text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|n| n as i64)
    })
}

/// 只要 key 存在就覆寫，值一律轉為整數
pub fn merge_int(json: &Map<String, Value>, key: &str, field: &mut i64) {
    if let Some(value) = json.get(key) {
        *field = coerce_int(value);
    }
}

/// 只有在 key 存在且為字串時才覆寫
pub fn merge_string(json: &Map<String, Value>, key: &str, field: &mut String) {
    if let Some(Value::String(text)) = json.get(key) {
        field.clone_from(text);
    }
}

pub fn merge_timestamp(json: &Map<String, Value>, key: &str, field: &mut Timestamp) {
    if let Some(Value::String(text)) = json.get(key) {
        *field = Timestamp::parse_iso(text);
        if !field.is_valid() && !text.is_empty() {
            tracing::debug!("Unparseable {} {:?}, falling back to unset timestamp", key, text);
        }
    }
}
