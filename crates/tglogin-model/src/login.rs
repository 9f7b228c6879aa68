//! The typed identity record received via the login widget callback.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::fields::{self, FieldMap};

/// The set of user-identity fields the widget redirects back with.
///
/// Optional fields that the widget did not send are `None` and are omitted
/// from the signed mapping entirely; sending them as empty strings would
/// change the data-check string and break verification against a genuine
/// signer that never emitted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    /// Numeric platform user identifier.
    pub id: i64,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name, if the widget sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The user's username, if the widget sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// URL of the user's profile photo, if the widget sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Unix timestamp at which the widget authenticated the user.
    pub auth_date: i64,
    /// The received signature, hex-encoded.
    pub hash: String,
}

impl LoginData {
    /// The user's first and last name joined with a space, or just the
    /// first name when no last name was sent.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref().filter(|v| !v.is_empty()) {
            Some(last_name) => format!("{} {last_name}", self.first_name),
            None => self.first_name.clone(),
        }
    }

    /// Whether the widget sent a non-empty last name.
    #[must_use]
    pub fn has_last_name(&self) -> bool {
        self.last_name.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Whether the widget sent a non-empty username.
    #[must_use]
    pub fn has_username(&self) -> bool {
        self.username.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Whether the widget sent a non-empty profile photo URL.
    #[must_use]
    pub fn has_photo(&self) -> bool {
        self.photo_url.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// The authentication timestamp as a UTC datetime.
    ///
    /// Returns `None` for timestamps outside the representable range.
    #[must_use]
    pub fn auth_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.auth_date, 0)
    }

    /// How long ago the widget authenticated the user, relative to `now`.
    ///
    /// Freshness policy is the caller's decision; this only exposes the
    /// measurement.
    #[must_use]
    pub fn auth_age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.auth_time().map(|t| now - t)
    }

    /// Serialize the present fields into the mapping the signer consumes.
    ///
    /// The `hash` field is never included: it is the signature itself, not
    /// part of the signed data. Optional fields that are unset or empty are
    /// omitted. Numeric fields render as base-10 decimal (negative
    /// identifiers keep their leading `-`).
    #[must_use]
    pub fn to_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        map.set(fields::ID, self.id.to_string());
        map.set(fields::FIRST_NAME, self.first_name.clone());
        if let Some(v) = self.last_name.as_deref().filter(|v| !v.is_empty()) {
            map.set(fields::LAST_NAME, v);
        }
        if let Some(v) = self.username.as_deref().filter(|v| !v.is_empty()) {
            map.set(fields::USERNAME, v);
        }
        if let Some(v) = self.photo_url.as_deref().filter(|v| !v.is_empty()) {
            map.set(fields::PHOTO_URL, v);
        }
        map.set(fields::AUTH_DATE, self.auth_date.to_string());
        map
    }
}

impl TryFrom<&FieldMap> for LoginData {
    type Error = ModelError;

    fn try_from(map: &FieldMap) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_i64(map, fields::ID)?,
            first_name: required(map, fields::FIRST_NAME)?,
            last_name: optional(map, fields::LAST_NAME),
            username: optional(map, fields::USERNAME),
            photo_url: optional(map, fields::PHOTO_URL),
            auth_date: required_i64(map, fields::AUTH_DATE)?,
            hash: required(map, fields::HASH)?,
        })
    }
}

fn required(map: &FieldMap, name: &'static str) -> Result<String, ModelError> {
    map.get(name)
        .map(ToOwned::to_owned)
        .ok_or(ModelError::MissingField(name))
}

fn required_i64(map: &FieldMap, name: &'static str) -> Result<i64, ModelError> {
    let value = required(map, name)?;
    value.parse().map_err(|_| ModelError::InvalidField {
        field: name,
        value,
    })
}

fn optional(map: &FieldMap, name: &str) -> Option<String> {
    map.get(name).filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}
