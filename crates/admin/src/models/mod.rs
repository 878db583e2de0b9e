//! Domain models for admin.
//!
//! - [`session`] - Authentication state of the single user
//! - [`form`] - The create/edit author form of the admin panel

pub mod form;
pub mod session;

pub use form::{AuthorForm, FormError, FormField, FormSubmission};
pub use session::{Session, SessionState};
