//! vCard vocabulary terms for the Solid profile resolver, encoded as typed
//! Rust data.
//!
//! The `solid-vocab` crate provides the ten vCard terms the profile
//! resolver consumes (formatted name, role, organization, note, the
//! address and telephone reference properties and their scalars) as
//! static data structures plus full-IRI constants.
//!
//! # Entry Point
//!
//! ```
//! let vcard = solid_vocab::vcard::module();
//! assert_eq!(vcard.property_count(), 10);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod vcard;

pub use model::{iris, Namespace, Property, PropertyKind, VocabularyModule};
