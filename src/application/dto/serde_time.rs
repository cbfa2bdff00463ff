//! `YYYY-MM-DD HH:MM:SS` (UTC) representation used for article timestamps.
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[test]
    fn parses_the_wire_format() {
        let parsed: Wrapper = serde_json::from_str(r#"{"at":"2023-12-31 23:59:58"}"#).unwrap();
        assert_eq!(parsed.at, Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap());
    }

    #[test]
    fn rejects_rfc3339() {
        let parsed = serde_json::from_str::<Wrapper>(r#"{"at":"2023-12-31T23:59:58Z"}"#);
        assert!(parsed.is_err());
    }
}
