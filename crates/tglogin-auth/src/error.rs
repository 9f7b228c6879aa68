//! Error types for callback verification.
//!
//! A signature mismatch is deliberately NOT represented here: forged or
//! stale callbacks are a routine outcome of verification, so the decision
//! APIs return `Ok(false)` for them. Errors are reserved for payloads that
//! could not be decoded at all and for configuration problems.

/// Errors that can occur while decoding or verifying a callback payload.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The payload is not UTF-8 text; decoding was not even attempted.
    #[error("unsupported payload: not valid UTF-8 text")]
    UnsupportedPayload,

    /// The payload could not be parsed into a field mapping.
    #[error("malformed callback payload: {0}")]
    MalformedPayload(String),

    /// A field required for verification is absent from the payload.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// The configured bot token is empty; no key can be derived from it.
    #[error("bot token is empty")]
    EmptyToken,

    /// No credential is registered for the given bot identifier.
    #[error("no credential registered for bot {0}")]
    UnknownBot(i64),
}
