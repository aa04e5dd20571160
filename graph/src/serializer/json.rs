//! JSON serializer for linked-data datasets.
//!
//! Produces a JSON-LD-shaped document: an `@context` mapping the `vcard`
//! prefix plus an `@graph` array with one node object per entity.
//! References appear as `{ "@id": ... }` objects, literals as plain
//! strings; a repeated predicate becomes an array.

use serde_json::{json, Map, Value};

use crate::dataset::{Dataset, Object};
use crate::serializer::vcard_local;

/// Serializes a dataset to a JSON-LD-shaped `Value`.
///
/// The returned value can be pretty-printed with
/// [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(dataset: &Dataset) -> Value {
    json!({
        "@context": { "vcard": solid_vocab::iris::VCARD },
        "@graph": build_graph(dataset)
    })
}

fn build_graph(dataset: &Dataset) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    for entity in dataset.entities() {
        let mut node = Map::new();
        node.insert("@id".to_owned(), json!(entity.id()));

        for (predicate, object) in entity.statements() {
            let key = match vcard_local(predicate) {
                Some(local) => format!("vcard:{}", local),
                None => predicate.clone(),
            };
            let value = match object {
                Object::Literal(s) => json!(s),
                Object::Ref(target) => json!({ "@id": target }),
            };
            append(&mut node, key, value);
        }

        nodes.push(Value::Object(node));
    }

    Value::Array(nodes)
}

/// Inserts `value` under `key`, promoting an existing scalar to an array
/// when the predicate repeats.
fn append(node: &mut Map<String, Value>, key: String, value: Value) {
    match node.get_mut(&key) {
        None => {
            node.insert(key, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_vocab::iris::{VCARD_FN, VCARD_HAS_ADDRESS};

    #[test]
    fn nodes_carry_compact_keys() {
        let mut ds = Dataset::new();
        let me = ds.upsert_entity("https://example.org/card#me");
        me.set_scalar(VCARD_FN, "Ana");
        me.set_reference(VCARD_HAS_ADDRESS, "https://example.org/card#addr");

        let doc = to_json(&ds);
        let node = &doc["@graph"][0];
        assert_eq!(node["@id"], "https://example.org/card#me");
        assert_eq!(node["vcard:fn"], "Ana");
        assert_eq!(node["vcard:hasAddress"]["@id"], "https://example.org/card#addr");
    }

    #[test]
    fn repeated_predicate_becomes_array() {
        let mut ds = Dataset::new();
        let me = ds.upsert_entity("https://e.org/s");
        me.push(VCARD_FN, Object::Literal("a".into()));
        me.push(VCARD_FN, Object::Literal("b".into()));

        let doc = to_json(&ds);
        assert_eq!(doc["@graph"][0]["vcard:fn"], json!(["a", "b"]));
    }

    #[test]
    fn context_maps_the_vcard_prefix() {
        let doc = to_json(&Dataset::new());
        assert_eq!(doc["@context"]["vcard"], solid_vocab::iris::VCARD);
        assert_eq!(doc["@graph"], json!([]));
    }
}
