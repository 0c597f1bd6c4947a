//! Error types for meta tag registration

use thiserror::Error;

/// Errors raised while resolving a model's configured meta attributes.
///
/// Both variants signal a misconfiguration and are surfaced to the caller
/// immediately. Missing data under convention-based fallback is not an error;
/// absent values are skipped without a tag being emitted.
#[derive(Error, Debug)]
pub enum MetaError {
    /// A configured logical tag name has no registration handler.
    #[error("the '{name}' meta tag is unknown")]
    UnknownTag {
        /// Logical tag name from the attribute configuration.
        name: String,
    },

    /// A configured attribute extractor names an attribute the model does not answer.
    #[error("model '{kind}' does not expose the '{attribute}' attribute")]
    UnknownAttribute {
        /// Attribute name from the configuration entry.
        attribute: String,
        /// Kind reported by the model being resolved.
        kind: String,
    },
}

/// Result type for meta tag operations
pub type Result<T> = std::result::Result<T, MetaError>;
