//! Unified error handling for admin.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::FormError;
use crate::services::StoreError;

/// Application-level error type.
///
/// Login failures are not errors at this level: they are reported to the
/// user through a notification.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistence failed where the caller asked for it explicitly.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The author store refused the change.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The author form did not validate.
    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    /// A screen could not be rendered.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// The current role may not perform the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A form operation was requested with no form open.
    #[error("No author form is open")]
    FormClosed,

    /// The operation is hidden while the author form is shown.
    #[error("Save or cancel the open author form first")]
    FormOpen,
}
