//! Author create/edit form.
//!
//! The only validation performed anywhere is here: every field is required.

use author_desk_core::{Author, AuthorDraft, AuthorId};
use thiserror::Error;

/// Errors raised by the author form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The named field does not exist.
    #[error("unknown field '{0}' (expected first, last or bio)")]
    UnknownField(String),
}

/// Editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Bio,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::Bio];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Bio => "Biography",
        }
    }
}

impl std::str::FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" | "firstName" | "first_name" => Ok(Self::FirstName),
            "last" | "lastName" | "last_name" => Ok(Self::LastName),
            "bio" => Ok(Self::Bio),
            other => Err(FormError::UnknownField(other.to_owned())),
        }
    }
}

/// What a successful submit asks the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Create(AuthorDraft),
    Update(Author),
}

/// Form state for creating a new author or editing an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorForm {
    editing: Option<AuthorId>,
    draft: AuthorDraft,
}

impl AuthorForm {
    /// An empty form for a new author.
    #[must_use]
    pub fn new_author() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing author.
    #[must_use]
    pub fn edit(author: &Author) -> Self {
        Self {
            editing: Some(author.id),
            draft: AuthorDraft::from(author.clone()),
        }
    }

    /// ID of the author being edited, `None` for a new author.
    #[must_use]
    pub const fn editing(&self) -> Option<AuthorId> {
        self.editing
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.draft.first_name,
            FormField::LastName => &self.draft.last_name,
            FormField::Bio => &self.draft.bio,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.draft.first_name,
            FormField::LastName => &mut self.draft.last_name,
            FormField::Bio => &mut self.draft.bio,
        };
        *slot = value.into();
    }

    /// Validate and turn the form into a store operation.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingField` for the first blank field.
    pub fn submit(&self) -> Result<FormSubmission, FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(FormError::MissingField(field.label()));
        }

        let draft = self.draft.clone();
        Ok(match self.editing {
            Some(id) => FormSubmission::Update(Author::from_draft(id, draft)),
            None => FormSubmission::Create(draft),
        })
    }
}
