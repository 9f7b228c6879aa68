//! Wire field names and the field mapping consumed by the signer.
//!
//! The field-name constants form the wire contract with the login widget:
//! the widget sends exactly these names as query parameters, and the
//! signature covers them under exactly these names. They must match the
//! widget protocol byte-for-byte, including case.

use std::collections::BTreeMap;

/// Numeric platform user identifier.
pub const ID: &str = "id";
/// The user's first name (always present).
pub const FIRST_NAME: &str = "first_name";
/// The user's last name (optional).
pub const LAST_NAME: &str = "last_name";
/// The user's username (optional).
pub const USERNAME: &str = "username";
/// URL of the user's profile photo (optional).
pub const PHOTO_URL: &str = "photo_url";
/// Unix timestamp at which the widget authenticated the user.
pub const AUTH_DATE: &str = "auth_date";
/// The received signature, hex-encoded. Never part of the signed data.
pub const HASH: &str = "hash";

/// A set of (name, value) string pairs with unique names.
///
/// This is the untyped view of a callback payload: what the widget signed,
/// minus any ordering. Insertion order is irrelevant because the signer
/// always sorts by name before serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    /// Create an empty field mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any existing value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Remove a field by name, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Number of fields in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (name, value) pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
