use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

/// ISO-8601 combined date and time, fraction only when non-zero.
pub const ISO_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// 無效時間戳記的唯一字串表示
pub const UNSET_TIMESTAMP: &str = "";

const ISO_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Zero-padded fields, `T` separator, at most nine fraction digits, and an
/// optional `Z`/`±HH:MM` suffix. Years beyond four digits carry a sign.
const ISO_SHAPE_PATTERN: &str = concat!(
    r"^(?:[0-9]{4}|[+-][0-9]{4,})-[0-9]{2}-[0-9]{2}",
    r"(?:T[0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\.[0-9]{1,9})?)?(?:Z|[+-][0-9]{2}:[0-9]{2})?)?$",
);

fn has_iso_shape(text: &str) -> bool {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE
        .get_or_init(|| Regex::new(ISO_SHAPE_PATTERN).expect("ISO shape pattern is valid"))
        .is_match(text)
}

/// A date and time that may be unset.
///
/// Parsing never fails: anything that is not an ISO-8601 date-time degrades
/// to [`Timestamp::UNSET`], which encodes as [`UNSET_TIMESTAMP`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Option<NaiveDateTime>);

impl Timestamp {
    pub const UNSET: Timestamp = Timestamp(None);

    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(Some(datetime))
    }

    /// 解析 ISO-8601 字串，失敗時回傳 UNSET
    pub fn parse_iso(text: &str) -> Self {
        // chrono 會接受未補零或前置空白的欄位，先檢查格式
        if !has_iso_shape(text) {
            return Self::UNSET;
        }

        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, ISO_DATE_TIME_FORMAT) {
            return Self::new(datetime);
        }

        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, ISO_MINUTE_FORMAT) {
            return Self::new(datetime);
        }

        // 帶時區的字串一律轉為 UTC
        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Self::new(datetime.naive_utc());
        }

        if let Ok(date) = NaiveDate::parse_from_str(text, ISO_DATE_FORMAT) {
            return Self::new(date.and_time(NaiveTime::MIN));
        }

        Self::UNSET
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn to_iso_string(&self) -> String {
        match self.0 {
            Some(datetime) => datetime.format(ISO_DATE_TIME_FORMAT).to_string(),
            None => UNSET_TIMESTAMP.to_string(),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl From<Option<NaiveDateTime>> for Timestamp {
    fn from(datetime: Option<NaiveDateTime>) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_combined_date_time() {
        let ts = Timestamp::parse_iso("2024-03-14T09:30:00");
        assert_eq!(ts, Timestamp::new(datetime("2024-03-14 09:30:00")));
        assert_eq!(ts.to_iso_string(), "2024-03-14T09:30:00");
    }

    #[test]
    fn test_parse_without_seconds() {
        let ts = Timestamp::parse_iso("2024-03-14T09:30");
        assert_eq!(ts, Timestamp::new(datetime("2024-03-14 09:30:00")));
    }

    #[test]
    fn test_parse_with_offset_normalizes_to_utc() {
        assert_eq!(
            Timestamp::parse_iso("2024-03-14T09:30:00+02:00"),
            Timestamp::new(datetime("2024-03-14 07:30:00"))
        );
        assert_eq!(
            Timestamp::parse_iso("2024-03-14T09:30:00Z"),
            Timestamp::new(datetime("2024-03-14 09:30:00"))
        );
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        assert_eq!(
            Timestamp::parse_iso("2024-03-14"),
            Timestamp::new(datetime("2024-03-14 00:00:00"))
        );
    }

    #[test]
    fn test_malformed_strings_degrade_to_unset() {
        for text in [
            "not-a-date",
            "",
            "2024-13-01T00:00:00",
            "14/03/2024",
            "2024-03-14T25:00:00",
            "2024-3-4T9:5:0",
            " 2024-03-14T09:30:00",
            "2024-03-14T09:30:00 ",
            "2024-03-14 09:30:00",
            "2024-03-14T09:30:00.1234567891",
            "2024-03-14T09",
            "12024-03-14T09:30:00",
        ] {
            let ts = Timestamp::parse_iso(text);
            assert!(!ts.is_valid(), "{text:?} should not parse");
            assert_eq!(ts, Timestamp::UNSET);
        }
    }

    #[test]
    fn test_extended_years_round_trip() {
        for text in ["+10000-01-01T00:00:00", "-0005-06-01T12:00:00"] {
            let ts = Timestamp::parse_iso(text);
            assert!(ts.is_valid(), "{text:?} should parse");
            assert_eq!(ts.to_iso_string(), text);
        }
    }

    #[test]
    fn test_unset_formats_as_empty_string() {
        assert_eq!(Timestamp::UNSET.to_iso_string(), UNSET_TIMESTAMP);
        assert_eq!(Timestamp::default(), Timestamp::UNSET);
    }

    #[test]
    fn test_fraction_survives_round_trip() {
        let ts = Timestamp::parse_iso("2024-03-14T09:30:00.250");
        assert_eq!(ts.to_iso_string(), "2024-03-14T09:30:00.250");
        assert_eq!(Timestamp::parse_iso(&ts.to_iso_string()), ts);
    }

    #[test]
    fn test_serializes_as_string() {
        let ts = Timestamp::parse_iso("2024-01-01T00:00:00");
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2024-01-01T00:00:00\"");
        assert_eq!(serde_json::to_string(&Timestamp::UNSET).unwrap(), "\"\"");
    }
}
