//! Signature verification for Telegram Login Widget callbacks.
//!
//! The login widget signs the user-identity fields it redirects back with:
//! the signing key is the SHA-256 digest of the integration's bot token,
//! and the signature is the lowercase-hex HMAC-SHA256 of the canonical
//! data-check string (fields sorted by name, `name=value` pairs joined by
//! newlines, the `hash` field excluded). This crate implements both
//! directions of that contract: verifying received callbacks and producing
//! signatures for outbound payloads.
//!
//! # Usage
//!
//! ```rust
//! use tglogin_auth::{derive_signing_key, verify_callback_query};
//!
//! let key = derive_signing_key("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11");
//!
//! // `Ok(false)` means the payload decoded fine but the signature does
//! // not match; only undecodable payloads produce an error.
//! let trusted = verify_callback_query(
//!     b"id=123456&first_name=Maxim&auth_date=1410696795&hash=abc",
//!     &key,
//! );
//! assert!(!trusted.unwrap());
//! ```
//!
//! # Modules
//!
//! - [`callback`] - Entry points for raw URL-encoded callback payloads
//! - [`canonical`] - Canonical data-check string construction
//! - [`config`] - Environment-driven configuration
//! - [`credentials`] - Credential provider trait and in-memory implementation
//! - [`error`] - Verification error types
//! - [`key`] - Signing key derivation from the raw bot token
//! - [`sign`] - HMAC signature computation and typed sign/verify

pub mod callback;
pub mod canonical;
pub mod config;
pub mod credentials;
pub mod error;
pub mod key;
pub mod sign;

pub use callback::{parse_callback_query, verify_callback, verify_callback_query};
pub use config::WidgetConfig;
pub use credentials::{CredentialProvider, StaticCredentialProvider, bot_id_from_token};
pub use error::AuthError;
pub use key::{SigningKey, derive_signing_key};
pub use sign::{compute_signature, sign_login, verify_fields, verify_login};
