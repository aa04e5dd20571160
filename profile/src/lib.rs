//! Profile resolution for Solid WebID documents.
//!
//! The `solid-profile-resolver` crate turns a linked-data graph and a
//! WebID into a flat [`ProfileRecord`]: four direct vCard scalars on the
//! profile node, plus the address and telephone nodes reached through
//! one level of reference indirection. Every lookup failure (absent
//! entity, absent predicate, dangling reference) degrades to the
//! field's documented default string; resolution never fails.
//!
//! # Entry Point
//!
//! ```
//! use solid_graph::Dataset;
//! use solid_profile_resolver::{defaults, resolve_profile};
//!
//! let record = resolve_profile(&Dataset::new(), "https://example.org/card#me");
//! assert_eq!(record.name, defaults::NAME);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod record;
pub mod resolver;

pub use record::{defaults, Address, ProfileRecord};
pub use resolver::resolve_profile;
