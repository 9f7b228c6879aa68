//! Verification entry points for raw callback payloads.
//!
//! The widget redirects the browser back with the identity fields as
//! URL-encoded query parameters, e.g.:
//!
//! ```text
//! id=123456&first_name=Maxim&auth_date=1410696795&hash=<hex>
//! ```
//!
//! This module decodes such a payload into a [`FieldMap`], extracts and
//! removes the `hash` parameter, and hands the rest to the shared
//! verification path. Signature mismatch is `Ok(false)`; only payloads
//! that cannot be decoded produce an error.

use tracing::debug;

use tglogin_model::{FieldMap, fields};

use crate::error::AuthError;
use crate::key::{SigningKey, derive_signing_key};
use crate::sign::verify_fields;

/// Parse a raw URL-encoded query payload into a field mapping.
///
/// Decoding is strict: the payload must be UTF-8 text, and every
/// percent-escape must decode to valid UTF-8. Duplicate names keep the
/// last value. A parameter without `=` decodes to an empty value.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedPayload`] for non-UTF-8 input and
/// [`AuthError::MalformedPayload`] for broken percent-escapes or a payload
/// with no parameters at all.
pub fn parse_callback_query(raw: &[u8]) -> Result<FieldMap, AuthError> {
    let text = std::str::from_utf8(raw).map_err(|_| AuthError::UnsupportedPayload)?;

    let mut map = FieldMap::new();
    for param in text.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = param.split_once('=').unwrap_or((param, ""));
        map.set(url_decode(name)?, url_decode(value)?);
    }

    if map.is_empty() {
        return Err(AuthError::MalformedPayload(
            "no query parameters".to_owned(),
        ));
    }

    Ok(map)
}

/// Verify a raw URL-encoded callback payload with a derived key.
///
/// Decodes the payload, extracts and removes the `hash` parameter, and
/// verifies the remaining fields. This is the generic untyped path; for
/// payloads already decoded into a [`tglogin_model::LoginData`], use
/// [`crate::sign::verify_login`] - both collapse to the same comparison.
///
/// # Errors
///
/// Returns a decode error for undecodable payloads, or
/// [`AuthError::MissingField`] when the payload carries no `hash`
/// parameter. A signature mismatch is `Ok(false)`, not an error.
pub fn verify_callback_query(raw: &[u8], key: &SigningKey) -> Result<bool, AuthError> {
    let mut fields = parse_callback_query(raw)?;
    let received = fields
        .remove(fields::HASH)
        .ok_or_else(|| AuthError::MissingField(fields::HASH.to_owned()))?;

    debug!(field_count = fields.len(), "verifying callback payload");
    Ok(verify_fields(&fields, &received, key))
}

/// Verify a raw callback payload directly against a bot token.
///
/// Single-call decision API for an HTTP callback handler: derives the
/// signing key from the raw credential and delegates to
/// [`verify_callback_query`]. Handlers verifying many callbacks may prefer
/// to derive the key once and call [`verify_callback_query`] themselves.
///
/// # Errors
///
/// Returns [`AuthError::EmptyToken`] for an empty credential, plus any
/// error [`verify_callback_query`] can return.
pub fn verify_callback(raw: &[u8], bot_token: &str) -> Result<bool, AuthError> {
    if bot_token.is_empty() {
        return Err(AuthError::EmptyToken);
    }
    let key = derive_signing_key(bot_token);
    verify_callback_query(raw, &key)
}

/// Strictly percent-decode a query component, treating `+` as a space.
fn url_decode(input: &str) -> Result<String, AuthError> {
    let unplussed = input.replace('+', " ");
    percent_encoding::percent_decode_str(&unplussed)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| AuthError::MalformedPayload(format!("invalid percent-escape in {input:?}")))
}
