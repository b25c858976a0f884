//! [`User`] definitions.

use serde::Deserialize;

/// Raw user record, as received from a source of [`User`]s.
///
/// Every field is optional: a record with missing or malformed nested
/// fields is still a valid [`User`], it just projects into empty values.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct User {
    /// [`Id`] of this [`User`].
    #[serde(default)]
    pub id: Option<Id>,

    /// [`Name`] of this [`User`].
    #[serde(default)]
    pub name: Option<Name>,

    /// [`Location`] of this [`User`].
    #[serde(default)]
    pub location: Option<Location>,

    /// Phone number of this [`User`], as an arbitrarily formatted string.
    #[serde(default)]
    pub phone: Option<String>,

    /// Date of birth of this [`User`], expected to be parseable as a
    /// calendar date.
    #[serde(default)]
    pub dob: Option<String>,
}

/// ID of a [`User`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Id {
    /// Opaque value of this [`Id`], unique within a fetched collection.
    #[serde(default)]
    pub value: Option<String>,
}

/// Name of a [`User`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Name {
    /// Given name.
    #[serde(default)]
    pub first: Option<String>,

    /// Family name.
    #[serde(default)]
    pub last: Option<String>,
}

/// Location of a [`User`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Location {
    /// City of residence.
    #[serde(default)]
    pub city: Option<String>,
}
