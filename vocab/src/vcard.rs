//! `vcard:` namespace — the subset of the W3C vCard ontology the profile
//! resolver consumes.
//!
//! Ten terms: four direct scalars on the profile node (`fn`, `role`,
//! `organization-name`, `note`), two reference properties (`hasAddress`,
//! `hasTelephone`), three scalars on the address node and one on the
//! telephone node.

use crate::model::iris::*;
use crate::model::{Namespace, Property, PropertyKind, VocabularyModule};

/// Returns the vCard vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        namespace: Namespace {
            prefix: "vcard",
            iri: VCARD,
            label: "vCard Ontology",
            comment: "An ontology for describing people and organizations, \
                      mirroring the vCard 4.0 specification (RFC 6350). Solid \
                      WebID profile documents describe their owner in these \
                      terms.",
        },
        properties: properties(),
    }
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: VCARD_FN,
            label: "fn",
            comment: "The formatted name of the profile owner.",
            kind: PropertyKind::Datatype,
        },
        Property {
            id: VCARD_ROLE,
            label: "role",
            comment: "The role or occupation of the profile owner.",
            kind: PropertyKind::Datatype,
        },
        Property {
            id: VCARD_ORGANIZATION_NAME,
            label: "organization-name",
            comment: "The name of the organization the profile owner belongs to.",
            kind: PropertyKind::Datatype,
        },
        Property {
            id: VCARD_NOTE,
            label: "note",
            comment: "A free-form note attached to the profile.",
            kind: PropertyKind::Datatype,
        },
        Property {
            id: VCARD_HAS_ADDRESS,
            label: "hasAddress",
            comment: "Reference from the profile node to its address node. \
                      Profile documents in the wild store this either as an \
                      IRI or as a plain string holding the node identifier.",
            kind: PropertyKind::Object,
        },
        Property {
            id: VCARD_STREET_ADDRESS,
            label: "street-address",
            comment: "The street address, asserted on the address node.",
            kind: PropertyKind::Datatype,
        },
        Property {
            id: VCARD_POSTAL_CODE,
            label: "postal-code",
            comment: "The postal code, asserted on the address node.",
            kind: PropertyKind::Datatype,
        },
        Property {
            id: VCARD_COUNTRY_NAME,
            label: "country-name",
            comment: "The country name, asserted on the address node.",
            kind: PropertyKind::Datatype,
        },
        Property {
            id: VCARD_HAS_TELEPHONE,
            label: "hasTelephone",
            comment: "Reference from the profile node to its telephone node.",
            kind: PropertyKind::Object,
        },
        Property {
            id: VCARD_VALUE,
            label: "value",
            comment: "The scalar value of a telephone node, typically a \
                      tel: IRI or a plain number string.",
            kind: PropertyKind::Datatype,
        },
    ]
}
