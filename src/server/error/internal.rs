use thiserror::Error;

/// Internal issues with the codebase or stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored column holds a value outside its allowed set
    ///
    /// Raised when converting an entity into a domain model, e.g. a role that is
    /// neither `admin` nor `user`. Results in a 500 Internal Server Error with a
    /// generic message returned to client.
    #[error("Invalid stored value '{value}' for {entity}.{field}")]
    InvalidStoredValue {
        /// Table the row belongs to
        entity: &'static str,
        /// Offending column
        field: &'static str,
        /// The raw stored value
        value: String,
    },

    /// Argon2 failed to hash a password or the stored hash is malformed
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a bearer token failed
    #[error("Failed to sign token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),

    /// printpdf failed to build or serialize the document
    #[error("Failed to render PDF: {0}")]
    PdfRender(String),
}
