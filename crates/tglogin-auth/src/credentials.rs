//! Credential provider trait and implementations.
//!
//! Applications embedding several login widgets need to resolve the right
//! bot token for the bot a callback came from. Bot tokens carry their
//! numeric bot identifier as a prefix (`123456:ABC-DEF...`), so providers
//! are keyed by that identifier.

use std::collections::HashMap;

use crate::error::AuthError;

/// Trait for looking up bot tokens by bot identifier.
///
/// Implementations may back this with a secrets manager, configuration
/// file, or any other credential store.
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the raw bot token for the given bot identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UnknownBot`] if the identifier is not
    /// recognized.
    fn bot_token(&self, bot_id: i64) -> Result<String, AuthError>;
}

/// A simple in-memory credential provider backed by a `HashMap`.
///
/// Suitable for testing and development environments. For production use,
/// implement [`CredentialProvider`] with a secure credential store.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    tokens: HashMap<i64, String>,
}

impl StaticCredentialProvider {
    /// Create a provider from an iterable of raw bot tokens.
    ///
    /// Tokens without a parseable `bot_id:` prefix are skipped.
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        let tokens = tokens
            .into_iter()
            .filter_map(|token| bot_id_from_token(&token).map(|id| (id, token)))
            .collect();
        Self { tokens }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn bot_token(&self, bot_id: i64) -> Result<String, AuthError> {
        self.tokens
            .get(&bot_id)
            .cloned()
            .ok_or(AuthError::UnknownBot(bot_id))
    }
}

/// Extract the numeric bot identifier from a raw bot token.
///
/// Returns `None` when the token has no `:` separator or a non-numeric
/// prefix.
#[must_use]
pub fn bot_id_from_token(token: &str) -> Option<i64> {
    token.split_once(':').and_then(|(id, _)| id.parse().ok())
}
