//! Author collection persistence.
//!
//! The whole collection is one JSON array stored under [`AUTHORS_KEY`].

use tracing::{debug, instrument, warn};

use author_desk_core::{Author, AuthorDraft, AuthorId};

use super::{KeyValueSlot, RepositoryError};

/// Slot key holding the author collection.
pub const AUTHORS_KEY: &str = "authors";

/// The collection used when nothing usable is stored yet.
#[must_use]
pub fn seed_authors() -> Vec<Author> {
    [
        ("Jānis", "Bērziņš", "Latvian writer and poet."),
        ("Anna", "Liepiņa", "Author of contemporary novels."),
        ("Pēteris", "Kalniņš", "Researcher of historical works."),
        ("Līga", "Ozoliņa", "Children's book illustrator."),
    ]
    .into_iter()
    .zip(1..)
    .map(|((first, last, bio), id)| {
        Author::from_draft(AuthorId::new(id), AuthorDraft::new(first, last, bio))
    })
    .collect()
}

/// Repository for the persisted author collection.
pub struct AuthorRepository {
    slot: Box<dyn KeyValueSlot>,
}

impl std::fmt::Debug for AuthorRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorRepository")
            .field("key", &AUTHORS_KEY)
            .finish_non_exhaustive()
    }
}

impl AuthorRepository {
    /// Create a repository over the given slot.
    #[must_use]
    pub fn new(slot: impl KeyValueSlot + 'static) -> Self {
        Self {
            slot: Box::new(slot),
        }
    }

    /// Load the collection, falling back to the seed collection.
    ///
    /// An absent slot, an unreadable slot, and unparsable contents all
    /// yield [`seed_authors`]. None of these are surfaced to the caller.
    #[instrument(skip(self))]
    pub fn load(&self) -> Vec<Author> {
        match self.try_load() {
            Ok(Some(authors)) => {
                debug!(count = authors.len(), "Loaded authors from slot");
                authors
            }
            Ok(None) => {
                debug!("Slot empty, using seed authors");
                seed_authors()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load authors, using seed authors");
                seed_authors()
            }
        }
    }

    /// Load the collection without any fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be read or its contents do not parse.
    pub fn try_load(&self) -> Result<Option<Vec<Author>>, RepositoryError> {
        let Some(raw) = self.slot.get(AUTHORS_KEY)? else {
            return Ok(None);
        };
        let authors = serde_json::from_str(&raw)?;
        Ok(Some(authors))
    }

    /// Write the full collection to the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the slot write fails.
    pub fn save(&self, authors: &[Author]) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(authors)?;
        self.slot.set(AUTHORS_KEY, &raw)
    }

    /// Overwrite the slot with the seed collection and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot write fails.
    pub fn reset(&self) -> Result<Vec<Author>, RepositoryError> {
        let authors = seed_authors();
        self.save(&authors)?;
        Ok(authors)
    }
}
