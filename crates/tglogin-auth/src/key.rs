//! Signing key derivation.
//!
//! The widget protocol derives the HMAC key from the integration's bot
//! token by hashing it: `key = SHA256(bot_token)`. The derivation is pure
//! and one-directional; the raw token is read once and never retained.

use std::fmt;

use sha2::{Digest, Sha256};

/// The derived 32-byte HMAC signing key.
///
/// Treated as a secret in memory: `Debug` output is redacted and the key
/// is never serialized. Callers that verify many callbacks may cache one
/// `SigningKey` per credential instead of re-deriving per request.
#[derive(Clone)]
pub struct SigningKey([u8; 32]);

impl SigningKey {
    /// The raw key bytes, for feeding into the HMAC construction.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

/// Derive the signing key from the raw bot token.
///
/// Pure function with no failure modes: a zero-length token still has a
/// well-defined digest, though callers should reject an empty token as a
/// configuration error before reaching this point.
#[must_use]
pub fn derive_signing_key(bot_token: &str) -> SigningKey {
    SigningKey(Sha256::digest(bot_token.as_bytes()).into())
}
