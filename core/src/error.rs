use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The form has no element with this id.
    #[error("form element not found: {id}")]
    MissingElement { id: String },
}

pub type Result<T> = std::result::Result<T, FormError>;
