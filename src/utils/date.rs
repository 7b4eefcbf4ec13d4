// ISO-8601 in UTC with millisecond precision, e.g. 2024-03-01T10:15:30.123Z
pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        if let Ok(time) = DateTime::parse_from_rfc3339(&str_time) {
            return Ok(time.naive_utc());
        }
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }

    pub fn time_to_json(t: NaiveDateTime) -> String {
        format!("{}", t.format(DATE_FMT))
    }
}
