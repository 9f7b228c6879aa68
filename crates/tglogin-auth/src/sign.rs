//! Keyed signature computation and verification.
//!
//! The signature is `hex(HMAC-SHA256(key, data_check_string))` with
//! lowercase hex digits. Both the signing direction (producing a payload
//! this system vouches for) and the verifying direction (deciding whether
//! to trust a received payload) go through the same computation; only the
//! final comparison differs. Divergence between the two directions is the
//! main bug class here, so there is exactly one canonicalize-and-digest
//! path.

use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use tglogin_model::{FieldMap, LoginData};

use crate::canonical::build_data_check_string;
use crate::key::SigningKey;

type HmacSha256 = Hmac<Sha256>;

/// Compute the hex-encoded signature over a field mapping.
///
/// The caller must have stripped the `hash` field already; this function
/// signs exactly what it is given.
#[must_use]
pub fn compute_signature(key: &SigningKey, fields: &FieldMap) -> String {
    let data_check = build_data_check_string(fields);
    debug!(data_check, "built data-check string");
    hex::encode(hmac_sha256(key.as_bytes(), data_check.as_bytes()))
}

/// Verify a field mapping against a received hex signature.
///
/// Returns `false` on any mismatch; a mismatch is a routine outcome
/// (forged or stale callback), not an error. The comparison is
/// constant-time over the hex digests.
#[must_use]
pub fn verify_fields(fields: &FieldMap, received_hex: &str, key: &SigningKey) -> bool {
    let expected = compute_signature(key, fields);
    let matches: bool = received_hex.as_bytes().ct_eq(expected.as_bytes()).into();
    if matches {
        debug!("signature verification succeeded");
    } else {
        debug!(
            expected = %expected,
            provided = %received_hex,
            "signature mismatch"
        );
    }
    matches
}

/// Produce the signature for a typed record's present fields.
///
/// The record's own `hash` field is ignored; feeding the returned digest
/// back through [`verify_login`] with the same key yields `true`.
#[must_use]
pub fn sign_login(data: &LoginData, key: &SigningKey) -> String {
    compute_signature(key, &data.to_field_map())
}

/// Verify a typed record against the signature it carries.
///
/// Re-serializes the record's present fields (unset optionals omitted)
/// and delegates to the same comparison as the untyped path, so the two
/// entry points cannot diverge.
#[must_use]
pub fn verify_login(data: &LoginData, key: &SigningKey) -> bool {
    verify_fields(&data.to_field_map(), &data.hash, key)
}

/// Compute HMAC-SHA256 and return the raw bytes.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::derive_signing_key;

    const TEST_TOKEN: &str = "123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11";
    const TEST_SIGNATURE: &str =
        "d9f340dbf4cbe80f3dd8b4a168e227389a4191527cc800fa428df143b01cb114";

    fn toby3d() -> LoginData {
        LoginData {
            id: 123_456,
            first_name: "Maxim".to_owned(),
            last_name: Some("Lebedev".to_owned()),
            username: Some("toby3d".to_owned()),
            photo_url: Some(
                "https://t.me/i/userpic/320/ABC-DEF1234ghIkl-zyx57W2v1u123ew11.jpg".to_owned(),
            ),
            auth_date: 1_410_696_795,
            hash: TEST_SIGNATURE.to_owned(),
        }
    }

    #[test]
    fn test_should_sign_known_fixture() {
        let key = derive_signing_key(TEST_TOKEN);
        assert_eq!(sign_login(&toby3d(), &key), TEST_SIGNATURE);
    }

    #[test]
    fn test_should_sign_deterministically() {
        let key = derive_signing_key(TEST_TOKEN);
        let data = toby3d();
        assert_eq!(sign_login(&data, &key), sign_login(&data, &key));
    }

    #[test]
    fn test_should_render_lowercase_hex_of_expected_length() {
        let key = derive_signing_key(TEST_TOKEN);
        let signature = sign_login(&toby3d(), &key);
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_should_verify_known_fixture() {
        let key = derive_signing_key(TEST_TOKEN);
        assert!(verify_login(&toby3d(), &key));
    }

    #[test]
    fn test_should_roundtrip_sign_then_verify() {
        let key = derive_signing_key(TEST_TOKEN);
        let mut data = toby3d();
        data.hash = sign_login(&data, &key);
        assert!(verify_login(&data, &key));
    }

    #[test]
    fn test_should_reject_tampered_auth_date() {
        let key = derive_signing_key(TEST_TOKEN);
        let mut data = toby3d();
        data.auth_date += 1;
        assert!(!verify_login(&data, &key));
    }

    #[test]
    fn test_should_reject_tampered_field_value() {
        let key = derive_signing_key(TEST_TOKEN);
        let mut data = toby3d();
        data.first_name = "Maxin".to_owned();
        assert!(!verify_login(&data, &key));
    }

    #[test]
    fn test_should_reject_tampered_received_signature() {
        let key = derive_signing_key(TEST_TOKEN);
        let mut data = toby3d();
        // Flip the first hex character.
        data.hash.replace_range(0..1, "e");
        assert!(!verify_login(&data, &key));
    }

    #[test]
    fn test_should_reject_wrong_key() {
        let key = derive_signing_key("654321:other-token");
        assert!(!verify_login(&toby3d(), &key));
    }

    #[test]
    fn test_should_verify_identically_with_empty_and_absent_optional() {
        let key = derive_signing_key(TEST_TOKEN);
        let mut unset = toby3d();
        unset.username = None;
        let mut empty = toby3d();
        empty.username = Some(String::new());

        let signature = sign_login(&unset, &key);
        assert_eq!(signature, sign_login(&empty, &key));

        unset.hash = signature.clone();
        empty.hash = signature;
        assert!(verify_login(&unset, &key));
        assert!(verify_login(&empty, &key));
    }
}
