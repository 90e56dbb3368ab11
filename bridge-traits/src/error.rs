use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("No element with id `{0}` in the document")]
    ElementNotFound(String),

    #[error("Element `{0}` is not a media element")]
    NotAMediaElement(String),
}

impl BridgeError {
    /// Returns `true` when the id did not resolve to any node.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, BridgeError::ElementNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
