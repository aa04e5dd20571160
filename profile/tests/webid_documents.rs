//! End-to-end resolution scenarios over parsed WebID documents.

#![allow(clippy::unwrap_used)]

use solid_graph::parse_ntriples;
use solid_profile_resolver::{defaults, resolve_profile, ProfileRecord};

const ME: &str = "https://ana.solidcommunity.net/profile/card#me";

/// Root entity with a name, no role, and an address node that only
/// carries a street.
const PARTIAL_CARD: &str = r#"
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#fn> "Ana" .
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#hasAddress> <https://ana.solidcommunity.net/profile/card#addr> .
<https://ana.solidcommunity.net/profile/card#addr> <http://www.w3.org/2006/vcard/ns#street-address> "Main St" .
"#;

const FULL_CARD: &str = r#"
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#fn> "Ana" .
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#role> "Engineer" .
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#organization-name> "Example Org" .
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#note> "Hi there" .
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#hasAddress> <https://ana.solidcommunity.net/profile/card#addr> .
<https://ana.solidcommunity.net/profile/card#me> <http://www.w3.org/2006/vcard/ns#hasTelephone> <https://ana.solidcommunity.net/profile/card#tel> .
<https://ana.solidcommunity.net/profile/card#addr> <http://www.w3.org/2006/vcard/ns#street-address> "Main St" .
<https://ana.solidcommunity.net/profile/card#addr> <http://www.w3.org/2006/vcard/ns#postal-code> "1000-001" .
<https://ana.solidcommunity.net/profile/card#addr> <http://www.w3.org/2006/vcard/ns#country-name> "Portugal" .
<https://ana.solidcommunity.net/profile/card#tel> <http://www.w3.org/2006/vcard/ns#value> "tel:+351-555-0100" .
"#;

#[test]
fn partial_card_scenario() {
    let dataset = parse_ntriples(PARTIAL_CARD).unwrap();
    let record = resolve_profile(&dataset, ME);

    assert_eq!(record.name, "Ana");
    assert_eq!(record.role, defaults::ROLE);
    assert_eq!(record.address.street, "Main St");
    assert_eq!(record.address.postal_code, defaults::POSTAL_CODE);
    assert_eq!(record.address.country, defaults::COUNTRY);
    assert_eq!(record.phone, defaults::PHONE);
}

#[test]
fn full_card_resolves_every_field() {
    let dataset = parse_ntriples(FULL_CARD).unwrap();
    let record = resolve_profile(&dataset, ME);

    assert_eq!(record.name, "Ana");
    assert_eq!(record.role, "Engineer");
    assert_eq!(record.organization, "Example Org");
    assert_eq!(record.note, "Hi there");
    assert_eq!(record.address.street, "Main St");
    assert_eq!(record.address.postal_code, "1000-001");
    assert_eq!(record.address.country, "Portugal");
    assert_eq!(record.phone, "tel:+351-555-0100");
}

#[test]
fn absent_root_yields_the_default_record() {
    let dataset = parse_ntriples(FULL_CARD).unwrap();
    let record = resolve_profile(&dataset, "https://example.org/unknown#me");
    assert_eq!(record, ProfileRecord::default());
}

#[test]
fn record_serializes_to_flat_json() {
    let dataset = parse_ntriples(PARTIAL_CARD).unwrap();
    let record = resolve_profile(&dataset, ME);
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["name"], "Ana");
    assert_eq!(json["address"]["street"], "Main St");
    assert_eq!(json["phone"], defaults::PHONE);
}

#[test]
fn unchanged_document_resolves_to_equal_records() {
    let dataset = parse_ntriples(FULL_CARD).unwrap();
    assert_eq!(resolve_profile(&dataset, ME), resolve_profile(&dataset, ME));
}
