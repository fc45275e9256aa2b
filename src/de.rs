//! Lenient deserializers for the numeric fields of the API.
//!
//! The API sends most numbers as decimal strings, e.g. `"ttl": "86400"`.

use core::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value as JsonValue;

/// Helper type for deserializing either a string or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber<N> {
    Number(N),
    String(String),
}

pub(crate) fn number<'de, D, N>(deserializer: D) -> Result<N, D::Error>
where
    D: Deserializer<'de>,
    N: Deserialize<'de> + FromStr,
    N::Err: Display,
{
    use serde::de::Error;

    Ok(match StringOrNumber::<N>::deserialize(deserializer)? {
        StringOrNumber::Number(n) => n,
        StringOrNumber::String(s) => s.trim().parse().map_err(D::Error::custom)?,
    })
}

/// Like [number], but `null` and `""` both mean absent.
pub(crate) fn option_number<'de, D, N>(deserializer: D) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: Deserialize<'de> + FromStr,
    N::Err: Display,
{
    use serde::de::Error;

    Ok(match Option::<StringOrNumber<N>>::deserialize(deserializer)? {
        Some(StringOrNumber::Number(n)) => Some(n),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => None,
        Some(StringOrNumber::String(s)) => Some(s.trim().parse().map_err(D::Error::custom)?),
        None => None,
    })
}

/// Treats `null` as the default value of `T`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats `null` and `""` as absent.
///
/// `responsedata` is `""` instead of an object on error statuses.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    use serde::de::Error;

    match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => Ok(None),
        JsonValue::String(s) if s.is_empty() => Ok(None),
        value => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Numbers {
        #[serde(deserialize_with = "super::number")]
        ttl: u32,
        #[serde(default, deserialize_with = "super::option_number")]
        id: Option<u32>,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let n: Numbers = serde_json::from_str(r#"{"ttl": 86400, "id": 12}"#).unwrap();
        assert_eq!((n.ttl, n.id), (86400, Some(12)));

        let n: Numbers = serde_json::from_str(r#"{"ttl": "86400", "id": "12"}"#).unwrap();
        assert_eq!((n.ttl, n.id), (86400, Some(12)));
    }

    #[test]
    fn empty_or_missing_optional_is_none() {
        let n: Numbers = serde_json::from_str(r#"{"ttl": "300", "id": ""}"#).unwrap();
        assert_eq!(n.id, None);

        let n: Numbers = serde_json::from_str(r#"{"ttl": "300", "id": null}"#).unwrap();
        assert_eq!(n.id, None);

        let n: Numbers = serde_json::from_str(r#"{"ttl": "300"}"#).unwrap();
        assert_eq!(n.id, None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Numbers>(r#"{"ttl": "soon"}"#).is_err());
        assert!(serde_json::from_str::<Numbers>(r#"{"ttl": -1}"#).is_err());
    }
}
