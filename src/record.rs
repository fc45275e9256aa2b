//! DNS records and record sets.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::de;

/// Record types supported by the netcup nameservers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address.
    A,
    /// Delegation to authoritative nameservers.
    Ns,
    /// Alias of one name to another.
    Cname,
    /// Mail exchanger. Requires a priority.
    Mx,
    Txt,
    /// IPv6 address.
    Aaaa,
    /// Service locator.
    Srv,
    /// Delegation signer of a DNSSEC-signed child zone.
    Ds,
    /// SSH public key fingerprint.
    Sshfp,
    /// DANE TLS certificate association.
    Tlsa,
    /// S/MIME certificate association.
    Smimea,
    /// OpenPGP public key.
    Openpgpkey,
    /// Certification authority authorization.
    Caa,
}

impl RecordType {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A single resource record of a zone.
///
/// A record without an `id` is created by an update, a record with an `id`
/// is changed, or deleted when `delete_record` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Unique id of the record. Leave empty for new records.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::option_number"
    )]
    pub id: Option<u32>,
    /// Hostname of the record, `@` for the root of the zone.
    pub hostname: String,
    /// Type token of the record, see [RecordType].
    ///
    /// Kept as a string so that records of types unknown to this crate can
    /// still be read.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Required for MX records.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::option_number"
    )]
    pub priority: Option<u32>,
    /// Target of the record.
    pub destination: String,
    #[serde(
        rename = "deleterecord",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_record: Option<bool>,
    /// State of the record. Read only, never sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl DnsRecord {
    /// Creates a new record, which doesn't have an id yet.
    pub fn new(hostname: &str, record_type: RecordType, destination: &str) -> Self {
        Self {
            id: None,
            hostname: hostname.to_string(),
            record_type: record_type.as_str().to_string(),
            priority: None,
            destination: destination.to_string(),
            delete_record: None,
            state: None,
        }
    }

    /// Sets the id of an existing record.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Marks the record for deletion.
    pub fn deleted(mut self) -> Self {
        self.delete_record = Some(true);
        self
    }

    /// Parses the type token of the record.
    pub fn parsed_type(&self) -> Result<RecordType, strum::ParseError> {
        RecordType::from_str(&self.record_type)
    }

    /// Returns a copy without the read-only state.
    pub(crate) fn for_update(&self) -> Self {
        Self {
            state: None,
            ..self.clone()
        }
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DNS Record: {} {} -> {} (#{}/P{})",
            self.record_type,
            self.hostname,
            self.destination,
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.priority.map(|p| p.to_string()).unwrap_or_default(),
        )?;
        if self.delete_record == Some(true) {
            f.write_str(" | delete")?;
        }
        Ok(())
    }
}

/// All records of a zone, in the order the server returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordSet {
    #[serde(
        rename = "dnsrecords",
        default,
        deserialize_with = "de::null_as_default"
    )]
    pub records: Vec<DnsRecord>,
}

impl DnsRecordSet {
    pub fn new(records: Vec<DnsRecord>) -> Self {
        Self { records }
    }

    /// Returns a copy with every record stripped of its read-only state.
    pub(crate) fn for_update(&self) -> Self {
        Self {
            records: self.records.iter().map(DnsRecord::for_update).collect(),
        }
    }
}

impl From<Vec<DnsRecord>> for DnsRecordSet {
    fn from(records: Vec<DnsRecord>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests;
