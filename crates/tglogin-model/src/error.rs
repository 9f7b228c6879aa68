//! Error types for typed decoding of callback fields.

/// Errors that can occur when building a typed record from a field mapping.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A required field is absent from the mapping.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric field does not parse as a base-10 integer.
    #[error("invalid value for field {field}: {value:?}")]
    InvalidField {
        /// The wire name of the offending field.
        field: &'static str,
        /// The received value.
        value: String,
    },
}
