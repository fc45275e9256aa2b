use strum::VariantArray;

use super::*;

#[test]
fn type_tokens() {
    let tokens: Vec<&str> = RecordType::VARIANTS.iter().map(RecordType::as_str).collect();
    assert_eq!(
        tokens,
        [
            "A",
            "NS",
            "CNAME",
            "MX",
            "TXT",
            "AAAA",
            "SRV",
            "DS",
            "SSHFP",
            "TLSA",
            "SMIMEA",
            "OPENPGPKEY",
            "CAA"
        ]
    );

    for type_ in RecordType::VARIANTS {
        assert_eq!(type_.as_str().parse::<RecordType>().unwrap(), *type_);
        assert_eq!(type_.to_string(), type_.as_str());
    }

    assert!("mx".parse::<RecordType>().is_err());
    assert!("ALIAS".parse::<RecordType>().is_err());
}

#[test]
fn new_record_has_no_id() {
    let record = DnsRecord::new("@", RecordType::Aaaa, "2a03:4000::e01e");

    assert_eq!(record.id, None);
    assert_eq!(record.record_type, "AAAA");
    assert_eq!(record.parsed_type().unwrap(), RecordType::Aaaa);

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "hostname": "@",
            "type": "AAAA",
            "destination": "2a03:4000::e01e"
        })
    );
}

#[test]
fn parses_server_records() {
    let json = r#"{
        "dnsrecords": [
            {
                "id": "123",
                "hostname": "@",
                "type": "MX",
                "priority": "10",
                "destination": "mail.netcup.de",
                "deleterecord": false,
                "state": "yes"
            },
            {
                "id": "456",
                "hostname": "www",
                "type": "A",
                "priority": "",
                "destination": "46.38.224.30",
                "deleterecord": false,
                "state": "yes"
            }
        ]
    }"#;
    let set: DnsRecordSet = serde_json::from_str(json).unwrap();

    assert_eq!(set.records.len(), 2);
    assert_eq!(set.records[0].id, Some(123));
    assert_eq!(set.records[0].priority, Some(10));
    assert_eq!(set.records[0].state.as_deref(), Some("yes"));
    assert_eq!(set.records[1].hostname, "www");
    assert_eq!(set.records[1].priority, None);
}

#[test]
fn unknown_type_still_parses() {
    let json = r#"{"hostname": "@", "type": "HTTPS", "destination": "1 . alpn=h2"}"#;
    let record: DnsRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.record_type, "HTTPS");
    assert!(record.parsed_type().is_err());
}

#[test]
fn null_record_list_is_empty() {
    let set: DnsRecordSet = serde_json::from_str(r#"{"dnsrecords": null}"#).unwrap();
    assert!(set.records.is_empty());

    let set: DnsRecordSet = serde_json::from_str("{}").unwrap();
    assert!(set.records.is_empty());
}

#[test]
fn record_set_survives_serialization() {
    let set = DnsRecordSet::new(vec![
        DnsRecord::new("@", RecordType::A, "46.38.224.30").with_id(123),
        DnsRecord::new("@", RecordType::Aaaa, "2a03:4000::e01e").with_id(456),
    ]);

    let json = serde_json::to_string(&set).unwrap();
    let parsed: DnsRecordSet = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.records.len(), set.records.len());
    for (parsed, original) in parsed.records.iter().zip(&set.records) {
        assert_eq!(parsed.id, original.id);
        assert_eq!(parsed.hostname, original.hostname);
        assert_eq!(parsed.record_type, original.record_type);
        assert_eq!(parsed.destination, original.destination);
    }
}

#[test]
fn update_copy_drops_state() {
    let mut record = DnsRecord::new("@", RecordType::A, "46.38.224.30").with_id(1);
    record.state = Some("yes".to_string());
    let set = DnsRecordSet::from(vec![record]);

    let update = set.for_update();

    assert_eq!(update.records[0].state, None);
    assert_eq!(set.records[0].state.as_deref(), Some("yes"));
}

#[test]
fn display() {
    let record = DnsRecord::new("@", RecordType::Mx, "mail.netcup.de")
        .with_id(7)
        .with_priority(10);
    assert_eq!(
        record.to_string(),
        "DNS Record: MX @ -> mail.netcup.de (#7/P10)"
    );
    assert_eq!(
        record.deleted().to_string(),
        "DNS Record: MX @ -> mail.netcup.de (#7/P10) | delete"
    );

    let record = DnsRecord::new("www", RecordType::Cname, "netcup.de");
    assert_eq!(record.to_string(), "DNS Record: CNAME www -> netcup.de (#/P)");
}
