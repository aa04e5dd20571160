//! In-memory linked-data dataset model for Solid profile documents.
//!
//! The `solid-graph` crate provides the [`Dataset`]/[`Entity`] graph
//! model the profile resolver reads through the [`LinkedDataGraph`]
//! seam, an N-Triples parser for loading documents, and N-Triples,
//! Turtle, and JSON serializers for writing them back.
//!
//! # Entry Point
//!
//! ```
//! let doc = "<https://example.org/card#me> \
//!            <http://www.w3.org/2006/vcard/ns#fn> \"Ana\" .\n";
//! let dataset = solid_graph::parse_ntriples(doc)?;
//! let me = dataset.entity("https://example.org/card#me");
//! assert!(me.is_some());
//! # Ok::<(), solid_graph::ParseError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod dataset;
pub mod parser;
pub mod serializer;

pub use dataset::{Dataset, Entity, LinkedDataGraph, Object};
pub use parser::{parse_ntriples, ParseError};
pub use serializer::{to_json, to_ntriples, to_turtle};
