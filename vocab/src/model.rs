//! Core vocabulary model types.
//!
//! These types represent an RDF vocabulary as typed Rust data. All
//! instances are built as owned `Vec`s and referenced via borrows. The
//! entry point for the vCard terms this workspace consumes is
//! [`vcard::module()`](crate::vcard::module).

/// Whether a property relates a resource to a literal or to another resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Relates a resource to a string literal (e.g. `vcard:fn`).
    Datatype,
    /// Relates two resources (e.g. `vcard:hasAddress`).
    Object,
}

/// An RDF namespace (e.g. the vCard ontology).
#[derive(Debug, Clone)]
pub struct Namespace {
    /// The prefix used in serialized documents (e.g. `"vcard"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the namespace.
    pub comment: &'static str,
}

/// A property definition within a vocabulary.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI (e.g. `"http://www.w3.org/2006/vcard/ns#fn"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Datatype or object property.
    pub kind: PropertyKind,
}

/// A complete vocabulary module: namespace metadata plus its properties.
#[derive(Debug, Clone)]
pub struct VocabularyModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// All properties this workspace consumes from the namespace.
    pub properties: Vec<Property>,
}

impl VocabularyModule {
    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == iri)
    }

    /// Returns the number of properties in this module.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// Full-IRI constants for every term the resolver and serializers touch.
pub mod iris {
    /// vCard ontology namespace.
    pub const VCARD: &str = "http://www.w3.org/2006/vcard/ns#";

    /// `vcard:fn` — formatted name.
    pub const VCARD_FN: &str = "http://www.w3.org/2006/vcard/ns#fn";
    /// `vcard:role` — role or occupation.
    pub const VCARD_ROLE: &str = "http://www.w3.org/2006/vcard/ns#role";
    /// `vcard:organization-name`.
    pub const VCARD_ORGANIZATION_NAME: &str =
        "http://www.w3.org/2006/vcard/ns#organization-name";
    /// `vcard:note` — free-form note.
    pub const VCARD_NOTE: &str = "http://www.w3.org/2006/vcard/ns#note";
    /// `vcard:hasAddress` — reference to an address node.
    pub const VCARD_HAS_ADDRESS: &str = "http://www.w3.org/2006/vcard/ns#hasAddress";
    /// `vcard:street-address`.
    pub const VCARD_STREET_ADDRESS: &str = "http://www.w3.org/2006/vcard/ns#street-address";
    /// `vcard:postal-code`.
    pub const VCARD_POSTAL_CODE: &str = "http://www.w3.org/2006/vcard/ns#postal-code";
    /// `vcard:country-name`.
    pub const VCARD_COUNTRY_NAME: &str = "http://www.w3.org/2006/vcard/ns#country-name";
    /// `vcard:hasTelephone` — reference to a telephone node.
    pub const VCARD_HAS_TELEPHONE: &str = "http://www.w3.org/2006/vcard/ns#hasTelephone";
    /// `vcard:value` — the scalar value of a telephone node.
    pub const VCARD_VALUE: &str = "http://www.w3.org/2006/vcard/ns#value";

    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}
