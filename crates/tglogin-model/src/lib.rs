//! Typed data model for Telegram Login Widget callbacks.
//!
//! The login widget redirects the browser back to the integrating
//! application with the authenticated user's identity fields as query
//! parameters, plus a `hash` parameter signing them. This crate provides
//! the typed view of that payload:
//!
//! - [`LoginData`] - the identity record (user id, names, photo, auth
//!   timestamp, received signature)
//! - [`FieldMap`] - the untyped name/value mapping the signer consumes
//! - [`fields`] - the wire field-name constants
//!
//! Signature computation and verification live in `tglogin-auth`; this
//! crate only models the data and the conversion between the typed and
//! untyped views.

pub mod error;
pub mod fields;
pub mod login;

pub use error::ModelError;
pub use fields::FieldMap;
pub use login::LoginData;
