//! DNS zone settings.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::de;

/// The SOA-level parameters of a DNS zone.
///
/// `name` and `serial` are assigned by the server. They are filled in on
/// responses and always stripped from update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsZone {
    /// Name of the zone, i.e. the domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Time in seconds a name is cached before asking the authoritative
    /// nameservers again. Recommended: 3600 to 172800.
    #[serde(deserialize_with = "de::number")]
    pub ttl: u32,
    /// Serial of the zone. Read only.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::option_number"
    )]
    pub serial: Option<u64>,
    /// Time in seconds a secondary nameserver waits before checking for a new
    /// copy of the zone. Recommended: 3600 to 14400.
    #[serde(deserialize_with = "de::number")]
    pub refresh: u32,
    /// Time in seconds the primary waits after a failed refresh of a
    /// secondary. Recommended: 900 to 3600.
    #[serde(deserialize_with = "de::number")]
    pub retry: u32,
    /// Time in seconds a secondary keeps serving the zone without a refresh.
    /// Recommended: 592200 to 1776600.
    #[serde(deserialize_with = "de::number")]
    pub expire: u32,
    /// Whether DNSSEC is enabled. Can only be switched on once every 24 hours.
    #[serde(rename = "dnssecstatus")]
    pub dnssec_status: bool,
}

impl DnsZone {
    /// Returns a copy without the server-assigned fields.
    pub(crate) fn for_update(&self) -> Self {
        Self {
            name: None,
            serial: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for DnsZone {
    /// SOA style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} {} {} {}",
            self.name.as_deref().unwrap_or_default(),
            self.serial.map(|s| s.to_string()).unwrap_or_default(),
            self.refresh,
            self.retry,
            self.expire,
            self.ttl
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> DnsZone {
        DnsZone {
            name: Some("netcup.de".to_string()),
            ttl: 86400,
            serial: Some(2024010101),
            refresh: 28800,
            retry: 7200,
            expire: 1209600,
            dnssec_status: false,
        }
    }

    #[test]
    fn parses_server_response() {
        let json = r#"{
            "name": "netcup.de",
            "ttl": "86400",
            "serial": "2024010101",
            "refresh": "28800",
            "retry": "7200",
            "expire": "1209600",
            "dnssecstatus": false
        }"#;
        assert_eq!(serde_json::from_str::<DnsZone>(json).unwrap(), zone());
    }

    #[test]
    fn update_copy_drops_server_fields() {
        let value = serde_json::to_value(zone().for_update()).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("name"));
        assert!(!object.contains_key("serial"));
        assert_eq!(object["ttl"], 86400);
        assert_eq!(object["dnssecstatus"], false);
    }

    #[test]
    fn displays_soa_style() {
        assert_eq!(
            zone().to_string(),
            "netcup.de. 2024010101 28800 7200 1209600 86400"
        );
    }
}
