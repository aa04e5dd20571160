//! The flattened profile record and its documented default strings.

use serde::{Deserialize, Serialize};

/// Default strings substituted for fields no lookup could resolve.
///
/// These exact strings are part of the public contract: a caller can
/// only distinguish "nothing found" from a resolved value by their
/// presence.
pub mod defaults {
    /// Default for [`ProfileRecord::name`](super::ProfileRecord::name).
    pub const NAME: &str = "No name found";
    /// Default for [`ProfileRecord::role`](super::ProfileRecord::role).
    pub const ROLE: &str = "No role found";
    /// Default for [`ProfileRecord::organization`](super::ProfileRecord::organization).
    pub const ORGANIZATION: &str = "No organization found";
    /// Default for [`ProfileRecord::note`](super::ProfileRecord::note).
    pub const NOTE: &str = "No note found";
    /// Default for [`Address::street`](super::Address::street).
    pub const STREET: &str = "No street address found";
    /// Default for [`Address::postal_code`](super::Address::postal_code).
    pub const POSTAL_CODE: &str = "No postal code found";
    /// Default for [`Address::country`](super::Address::country).
    pub const COUNTRY: &str = "No country found";
    /// Default for [`ProfileRecord::phone`](super::ProfileRecord::phone).
    pub const PHONE: &str = "No phone number found";
}

/// Postal address portion of a profile, resolved through the
/// `vcard:hasAddress` reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street address, or [`defaults::STREET`].
    pub street: String,
    /// Postal code, or [`defaults::POSTAL_CODE`].
    pub postal_code: String,
    /// Country name, or [`defaults::COUNTRY`].
    pub country: String,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: defaults::STREET.to_owned(),
            postal_code: defaults::POSTAL_CODE.to_owned(),
            country: defaults::COUNTRY.to_owned(),
        }
    }
}

/// A flattened profile assembled from a WebID document.
///
/// Every field is always populated, either with a resolved value or its
/// documented default string; no field is ever absent. The record is
/// plain owned data with no tie back to the graph that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Formatted name (`vcard:fn`), or [`defaults::NAME`].
    pub name: String,
    /// Role (`vcard:role`), or [`defaults::ROLE`].
    pub role: String,
    /// Organization name (`vcard:organization-name`), or
    /// [`defaults::ORGANIZATION`].
    pub organization: String,
    /// Note (`vcard:note`), or [`defaults::NOTE`].
    pub note: String,
    /// Address resolved through `vcard:hasAddress`.
    pub address: Address,
    /// Telephone value resolved through `vcard:hasTelephone`, or
    /// [`defaults::PHONE`].
    pub phone: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: defaults::NAME.to_owned(),
            role: defaults::ROLE.to_owned(),
            organization: defaults::ORGANIZATION.to_owned(),
            note: defaults::NOTE.to_owned(),
            address: Address::default(),
            phone: defaults::PHONE.to_owned(),
        }
    }
}
