//! Profile resolution: one pass over the graph, one level of reference
//! indirection, defaults substituted at assembly.

use solid_graph::{Entity, LinkedDataGraph};
use solid_vocab::iris::{
    VCARD_COUNTRY_NAME, VCARD_FN, VCARD_HAS_ADDRESS, VCARD_HAS_TELEPHONE, VCARD_NOTE,
    VCARD_ORGANIZATION_NAME, VCARD_POSTAL_CODE, VCARD_ROLE, VCARD_STREET_ADDRESS, VCARD_VALUE,
};

use crate::record::{defaults, Address, ProfileRecord};

/// Resolves a flat [`ProfileRecord`] for `root_id` against `graph`.
///
/// Reads four direct scalars from the root entity, then follows the
/// `vcard:hasAddress` and `vcard:hasTelephone` references one hop each.
/// Every lookup is fail-soft and field-granular: an absent root entity,
/// an absent predicate, a dangling reference, and an explicitly empty
/// string all degrade to the field's documented default. This function
/// never fails; a malformed or empty graph yields a fully-populated,
/// default-laden record.
///
/// The graph is only read; the returned record is exclusively the
/// caller's and is superseded wholesale by the next resolution.
#[must_use]
pub fn resolve_profile<G: LinkedDataGraph + ?Sized>(graph: &G, root_id: &str) -> ProfileRecord {
    let Some(root) = graph.entity(root_id) else {
        return ProfileRecord::default();
    };

    let name = scalar(root, VCARD_FN);
    let role = scalar(root, VCARD_ROLE);
    let organization = scalar(root, VCARD_ORGANIZATION_NAME);
    let note = scalar(root, VCARD_NOTE);

    // One-hop dereference. A missing reference and a reference to a
    // non-existent entity are indistinguishable in the result.
    let address_node = follow(graph, root, VCARD_HAS_ADDRESS);
    let address = address_node.map(|node| {
        (
            scalar(node, VCARD_STREET_ADDRESS),
            scalar(node, VCARD_POSTAL_CODE),
            scalar(node, VCARD_COUNTRY_NAME),
        )
    });

    let phone = follow(graph, root, VCARD_HAS_TELEPHONE).and_then(|node| scalar(node, VCARD_VALUE));

    ProfileRecord {
        name: name.unwrap_or_else(|| defaults::NAME.to_owned()),
        role: role.unwrap_or_else(|| defaults::ROLE.to_owned()),
        organization: organization.unwrap_or_else(|| defaults::ORGANIZATION.to_owned()),
        note: note.unwrap_or_else(|| defaults::NOTE.to_owned()),
        address: match address {
            Some((street, postal_code, country)) => Address {
                street: street.unwrap_or_else(|| defaults::STREET.to_owned()),
                postal_code: postal_code.unwrap_or_else(|| defaults::POSTAL_CODE.to_owned()),
                country: country.unwrap_or_else(|| defaults::COUNTRY.to_owned()),
            },
            None => Address::default(),
        },
        phone: phone.unwrap_or_else(|| defaults::PHONE.to_owned()),
    }
}

/// Reads a scalar predicate, treating an explicitly empty string the
/// same as an absent predicate. Source-compatible behavior; do not
/// tighten.
fn scalar(entity: &Entity, predicate: &str) -> Option<String> {
    entity
        .scalar(predicate)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Follows a reference predicate to its target entity, if both the
/// reference and the target exist.
fn follow<'g, G: LinkedDataGraph + ?Sized>(
    graph: &'g G,
    root: &Entity,
    predicate: &str,
) -> Option<&'g Entity> {
    root.reference(predicate)
        .filter(|id| !id.is_empty())
        .and_then(|id| graph.entity(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_graph::Dataset;

    const ME: &str = "https://example.org/card#me";
    const ADDR: &str = "https://example.org/card#addr";
    const TEL: &str = "https://example.org/card#tel";

    #[test]
    fn absent_root_yields_all_defaults() {
        let record = resolve_profile(&Dataset::new(), ME);
        assert_eq!(record, ProfileRecord::default());
    }

    #[test]
    fn root_without_predicates_yields_all_defaults() {
        let mut ds = Dataset::new();
        ds.upsert_entity(ME);
        assert_eq!(resolve_profile(&ds, ME), ProfileRecord::default());
    }

    #[test]
    fn direct_scalars_resolve_independently() {
        let mut ds = Dataset::new();
        let me = ds.upsert_entity(ME);
        me.set_scalar(VCARD_FN, "Ana");
        me.set_scalar(VCARD_NOTE, "hello");

        let record = resolve_profile(&ds, ME);
        assert_eq!(record.name, "Ana");
        assert_eq!(record.note, "hello");
        assert_eq!(record.role, defaults::ROLE);
        assert_eq!(record.organization, defaults::ORGANIZATION);
    }

    #[test]
    fn dangling_address_reference_defaults_all_address_fields() {
        let mut ds = Dataset::new();
        let me = ds.upsert_entity(ME);
        me.set_scalar(VCARD_FN, "Ana");
        me.set_reference(VCARD_HAS_ADDRESS, "https://example.org/missing");

        let record = resolve_profile(&ds, ME);
        assert_eq!(record.name, "Ana");
        assert_eq!(record.address, Address::default());
    }

    #[test]
    fn partial_address_defaults_the_missing_fields() {
        let mut ds = Dataset::new();
        ds.upsert_entity(ME).set_reference(VCARD_HAS_ADDRESS, ADDR);
        ds.upsert_entity(ADDR).set_scalar(VCARD_STREET_ADDRESS, "Main St");

        let record = resolve_profile(&ds, ME);
        assert_eq!(record.address.street, "Main St");
        assert_eq!(record.address.postal_code, defaults::POSTAL_CODE);
        assert_eq!(record.address.country, defaults::COUNTRY);
    }

    #[test]
    fn telephone_resolves_through_reference() {
        let mut ds = Dataset::new();
        ds.upsert_entity(ME).set_reference(VCARD_HAS_TELEPHONE, TEL);
        ds.upsert_entity(TEL).set_scalar(VCARD_VALUE, "tel:+1-555-0100");

        assert_eq!(resolve_profile(&ds, ME).phone, "tel:+1-555-0100");
    }

    #[test]
    fn reference_stored_as_literal_still_resolves() {
        // Documents in the wild store vcard:hasAddress as a plain string.
        let mut ds = Dataset::new();
        ds.upsert_entity(ME).set_scalar(VCARD_HAS_ADDRESS, ADDR);
        ds.upsert_entity(ADDR).set_scalar(VCARD_COUNTRY_NAME, "Portugal");

        assert_eq!(resolve_profile(&ds, ME).address.country, "Portugal");
    }

    #[test]
    fn empty_string_scalar_counts_as_absent() {
        let mut ds = Dataset::new();
        ds.upsert_entity(ME).set_scalar(VCARD_FN, "");

        assert_eq!(resolve_profile(&ds, ME).name, defaults::NAME);
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut ds = Dataset::new();
        let me = ds.upsert_entity(ME);
        me.set_scalar(VCARD_FN, "Ana");
        me.set_reference(VCARD_HAS_TELEPHONE, TEL);
        ds.upsert_entity(TEL).set_scalar(VCARD_VALUE, "tel:+1-555-0100");

        assert_eq!(resolve_profile(&ds, ME), resolve_profile(&ds, ME));
    }
}
