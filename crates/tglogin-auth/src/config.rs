//! Configuration for callback verification.
//!
//! All configuration is driven by environment variables.

use std::fmt;

use crate::error::AuthError;
use crate::key::{SigningKey, derive_signing_key};

/// Configuration for a single login-widget integration.
#[derive(Clone)]
pub struct WidgetConfig {
    /// The raw bot token the widget vendor issued for this integration.
    pub bot_token: String,
    /// Log level.
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            log_level: "info".to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("TELEGRAM_BOT_TOKEN") {
            config.bot_token = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Derive the signing key from the configured token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyToken`] when no token is configured; an
    /// empty credential is a configuration error, not a signer failure.
    pub fn signing_key(&self) -> Result<SigningKey, AuthError> {
        if self.bot_token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(derive_signing_key(&self.bot_token))
    }

    /// The numeric bot identifier embedded in the configured token, if the
    /// token has the usual `bot_id:secret` shape.
    #[must_use]
    pub fn bot_id(&self) -> Option<i64> {
        crate::credentials::bot_id_from_token(&self.bot_token)
    }
}

// The token is a secret; keep it out of Debug output.
impl fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("bot_token", &"[redacted]")
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = WidgetConfig::default();
        assert!(config.bot_token.is_empty());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_reject_empty_token_when_deriving_key() {
        let config = WidgetConfig::default();
        assert!(matches!(config.signing_key(), Err(AuthError::EmptyToken)));
    }

    #[test]
    fn test_should_derive_key_and_bot_id_from_configured_token() {
        let config = WidgetConfig {
            bot_token: "123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11".to_owned(),
            ..WidgetConfig::default()
        };
        assert!(config.signing_key().is_ok());
        assert_eq!(config.bot_id(), Some(123_456));
    }

    #[test]
    fn test_should_redact_token_in_debug_output() {
        let config = WidgetConfig {
            bot_token: "123456:secret".to_owned(),
            ..WidgetConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("secret"));
    }
}
