//! N-Triples serializer for linked-data datasets.
//!
//! Produces a valid N-Triples document (one statement per line, absolute
//! IRIs). N-Triples is the storage form used by the file-backed pod
//! store and the inverse of [`parse_ntriples`](crate::parse_ntriples).

use solid_vocab::iris::XSD_STRING;

use crate::dataset::{Dataset, Object};

/// Serializes a dataset to an N-Triples string.
#[must_use]
pub fn to_ntriples(dataset: &Dataset) -> String {
    let mut out = String::with_capacity(4 * 1024);

    for entity in dataset.entities() {
        for (predicate, object) in entity.statements() {
            let obj = match object {
                Object::Literal(s) => lit(s, XSD_STRING),
                Object::Ref(target) => iri(target),
            };
            triple(&mut out, entity.id(), predicate, &obj);
        }
    }

    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str, datatype: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"^^<{}>", escaped, datatype)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parser::parse_ntriples;

    fn sample() -> Dataset {
        let mut ds = Dataset::new();
        let me = ds.upsert_entity("https://example.org/card#me");
        me.set_scalar("http://www.w3.org/2006/vcard/ns#fn", "Ana");
        me.set_reference(
            "http://www.w3.org/2006/vcard/ns#hasAddress",
            "https://example.org/card#addr",
        );
        ds.upsert_entity("https://example.org/card#addr")
            .set_scalar("http://www.w3.org/2006/vcard/ns#street-address", "Main St");
        ds
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(&sample());
        assert!(!nt.is_empty());
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn references_serialize_as_iris() {
        let nt = to_ntriples(&sample());
        assert!(nt.contains(
            "<http://www.w3.org/2006/vcard/ns#hasAddress> <https://example.org/card#addr> ."
        ));
    }

    #[test]
    fn output_reparses_to_the_same_dataset() {
        let ds = sample();
        let reparsed = parse_ntriples(&to_ntriples(&ds)).unwrap();
        assert_eq!(reparsed, ds);
    }

    #[test]
    fn literal_escaping_survives_round_trip() {
        let mut ds = Dataset::new();
        ds.upsert_entity("https://e.org/s")
            .set_scalar("https://e.org/p", "say \"hi\"\nback\\slash");
        let reparsed = parse_ntriples(&to_ntriples(&ds)).unwrap();
        assert_eq!(
            reparsed.entity("https://e.org/s").unwrap().scalar("https://e.org/p"),
            Some("say \"hi\"\nback\\slash")
        );
    }
}
