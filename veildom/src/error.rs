use thiserror::Error;

/// Errors returned by document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element '{0}' not found")]
    NotFound(String),

    #[error("element '{0}' cannot receive focus")]
    NotFocusable(String),

    #[error("an element with id '{0}' is already in the document")]
    DuplicateId(String),

    #[error("the body element cannot be removed or moved")]
    BodyImmutable,

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}
