//! Turtle serializer for linked-data datasets.
//!
//! Produces a Turtle document with prefix declarations for the vCard and
//! XSD namespaces and one grouped predicate block per entity. Intended
//! for human inspection of profile documents; the round-trippable
//! storage form is N-Triples.

use crate::dataset::{Dataset, Object};
use crate::serializer::vcard_local;

/// Serializes a dataset to a Turtle string.
#[must_use]
pub fn to_turtle(dataset: &Dataset) -> String {
    let mut out = String::with_capacity(4 * 1024);

    out.push_str("@prefix vcard: <http://www.w3.org/2006/vcard/ns#> .\n");
    out.push_str("@prefix xsd:   <http://www.w3.org/2001/XMLSchema#> .\n\n");

    for entity in dataset.entities() {
        let statements = entity.statements();
        if statements.is_empty() {
            continue;
        }
        out.push_str(&format!("<{}>\n", entity.id()));
        for (i, (predicate, object)) in statements.iter().enumerate() {
            let pred = match vcard_local(predicate) {
                Some(local) => format!("vcard:{}", local),
                None => format!("<{}>", predicate),
            };
            let obj = match object {
                Object::Literal(s) => turtle_string(s),
                Object::Ref(target) => format!("<{}>", target),
            };
            let terminator = if i + 1 == statements.len() { " ." } else { " ;" };
            out.push_str(&format!("  {} {}{}\n", pred, obj, terminator));
        }
        out.push('\n');
    }

    out
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_vocab::iris::{VCARD_FN, VCARD_HAS_ADDRESS};

    fn sample() -> Dataset {
        let mut ds = Dataset::new();
        let me = ds.upsert_entity("https://example.org/card#me");
        me.set_scalar(VCARD_FN, "Ana");
        me.set_reference(VCARD_HAS_ADDRESS, "https://example.org/card#addr");
        ds
    }

    #[test]
    fn declares_vcard_prefix() {
        let ttl = to_turtle(&sample());
        assert!(ttl.starts_with("@prefix vcard:"));
    }

    #[test]
    fn compacts_vcard_predicates() {
        let ttl = to_turtle(&sample());
        assert!(ttl.contains("vcard:fn \"Ana\" ;"));
        assert!(ttl.contains("vcard:hasAddress <https://example.org/card#addr> ."));
    }

    #[test]
    fn foreign_predicates_stay_absolute() {
        let mut ds = sample();
        ds.upsert_entity("https://example.org/card#me")
            .push("https://example.org/other#p", Object::Literal("v".into()));
        let ttl = to_turtle(&ds);
        assert!(ttl.contains("<https://example.org/other#p> \"v\" ."));
    }

    #[test]
    fn empty_dataset_is_header_only() {
        let ttl = to_turtle(&Dataset::new());
        assert!(ttl.lines().all(|l| l.is_empty() || l.starts_with("@prefix")));
    }
}
