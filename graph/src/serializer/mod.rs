//! Serializers for linked-data datasets.
//!
//! Three output forms: N-Triples (one statement per line, absolute IRIs,
//! diff-friendly), Turtle (prefix declarations plus grouped predicate
//! lists), and a JSON-LD-shaped `serde_json::Value`.

pub mod json;
pub mod ntriples;
pub mod turtle;

pub use json::to_json;
pub use ntriples::to_ntriples;
pub use turtle::to_turtle;

/// Compacts a full IRI to its `vcard:` prefixed form when it lives in
/// the vCard namespace; other IRIs are returned unchanged as `None`.
pub(crate) fn vcard_local(iri: &str) -> Option<&str> {
    iri.strip_prefix(solid_vocab::iris::VCARD)
}
