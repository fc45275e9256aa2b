//! Checks run on every argument before a request is sent.

use lazy_static::lazy_static;
use psl::Psl;
use regex::Regex;

use crate::{ClientError, DnsRecord, DnsZone, RecordType};

const CLIENT_REQUEST_ID_PATTERN: &str = r"^[a-zA-Z0-9]*$";
const DOMAIN_NAME_PATTERN: &str = r"^([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$";

lazy_static! {
    static ref CLIENT_REQUEST_ID_RE: Regex = Regex::new(CLIENT_REQUEST_ID_PATTERN).unwrap();
    static ref DOMAIN_NAME_RE: Regex = Regex::new(DOMAIN_NAME_PATTERN).unwrap();
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails with `InvalidArgument` if `value` is empty or whitespace only.
pub(crate) fn require(argument: &'static str, value: &str) -> Result<(), ClientError> {
    if is_blank(value) {
        return Err(ClientError::invalid_argument(argument, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn customer_number(customer_number: u32) -> Result<(), ClientError> {
    if customer_number == 0 {
        return Err(ClientError::invalid_argument(
            "customernumber",
            "must be a positive number",
        ));
    }
    Ok(())
}

/// Returns the client request id to send, which is `None` for a blank id.
pub(crate) fn client_request_id(id: Option<&str>) -> Result<Option<&str>, ClientError> {
    match id {
        Some(id) if !is_blank(id) => {
            if !CLIENT_REQUEST_ID_RE.is_match(id) {
                return Err(ClientError::invalid_format(
                    "clientrequestid",
                    CLIENT_REQUEST_ID_PATTERN,
                ));
            }
            Ok(Some(id))
        }
        _ => Ok(None),
    }
}

/// The name has to match the pattern and end in a known top-level domain.
///
/// Only the last label is looked up, so zones under private suffixes such as
/// `github.io` stay valid.
pub(crate) fn domain_name(name: &str) -> Result<(), ClientError> {
    require("domainname", name)?;

    if !DOMAIN_NAME_RE.is_match(name) {
        return Err(ClientError::invalid_format(
            "domainname",
            DOMAIN_NAME_PATTERN,
        ));
    }

    let tld = name.rsplit('.').next().unwrap_or(name).to_ascii_lowercase();
    let known = psl::List
        .suffix(tld.as_bytes())
        .is_some_and(|suffix| suffix.is_known());
    if !known {
        return Err(ClientError::invalid_format(
            "domainname",
            "a domain under a known top-level domain",
        ));
    }

    Ok(())
}

pub(crate) fn zone(zone: &DnsZone) -> Result<(), ClientError> {
    for (argument, value) in [
        ("ttl", zone.ttl),
        ("refresh", zone.refresh),
        ("retry", zone.retry),
        ("expire", zone.expire),
    ] {
        if value == 0 {
            return Err(ClientError::out_of_range(argument, "must be a positive number"));
        }
    }
    Ok(())
}

pub(crate) fn record(record: &DnsRecord) -> Result<(), ClientError> {
    if record.id == Some(0) {
        return Err(ClientError::out_of_range("id", "must be a positive number"));
    }

    if is_blank(&record.hostname) {
        return Err(ClientError::invalid_argument(
            "hostname",
            "must be set, use '@' for the root of the domain",
        ));
    }

    let record_type = record
        .parsed_type()
        .map_err(|_| ClientError::invalid_format("type", "a supported record type"))?;

    if record_type == RecordType::Mx && record.priority.is_none() {
        return Err(ClientError::invalid_argument(
            "priority",
            "must be set for MX records",
        ));
    }

    require("destination", &record.destination)?;

    if record.delete_record == Some(true) && record.id.is_none() {
        return Err(ClientError::invalid_argument(
            "id",
            "must be set when deleting a record",
        ));
    }

    Ok(())
}
