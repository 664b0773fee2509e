//! Serde helpers for payloads produced by the remote server.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Treats a missing, null or empty string as `None`.
///
/// # Errors
///
/// Returns an error if the value is neither a string nor null.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Deserializes a volume level sent as an integer, a float or a numeric string.
///
/// # Errors
///
/// Returns an error if the value is not numeric.
pub fn lenient_volume<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct VolumeVisitor;

    impl Visitor<'_> for VolumeVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or numeric string representing a volume level")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(de::Error::custom)
        }

        #[allow(clippy::cast_possible_truncation)]
        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if value.is_finite() {
                Ok(value.round() as i64)
            } else {
                Err(de::Error::custom("volume is not a finite number"))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value.trim().parse::<i64>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(VolumeVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        label: Option<String>,
        #[serde(deserialize_with = "lenient_volume")]
        volume: i64,
    }

    #[test]
    fn test_empty_label_is_none() {
        let probe: Probe = serde_json::from_str(r#"{"label": "", "volume": 3}"#).unwrap();
        assert_eq!(probe.label, None);
    }

    #[test]
    fn test_missing_label_is_none() {
        let probe: Probe = serde_json::from_str(r#"{"volume": 3}"#).unwrap();
        assert_eq!(probe.label, None);
    }

    #[test]
    fn test_volume_variants() {
        let int: Probe = serde_json::from_str(r#"{"volume": 12}"#).unwrap();
        let float: Probe = serde_json::from_str(r#"{"volume": 12.0}"#).unwrap();
        let text: Probe = serde_json::from_str(r#"{"volume": "12"}"#).unwrap();

        assert_eq!(int.volume, 12);
        assert_eq!(float.volume, 12);
        assert_eq!(text.volume, 12);
    }

    #[test]
    fn test_volume_rejects_non_numeric() {
        assert!(serde_json::from_str::<Probe>(r#"{"volume": "loud"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"volume": true}"#).is_err());
    }
}
