//! In-memory author store with write-through persistence.
//!
//! Every mutation writes the full collection back through the
//! [`AuthorRepository`]. A failed write is logged and dropped; the
//! in-memory collection stays authoritative for the rest of the run.

use thiserror::Error;
use tracing::{info, instrument, warn};

use author_desk_core::{Author, AuthorDraft, AuthorId};

use crate::db::AuthorRepository;

/// Errors raised by the author store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The largest ID in use has no successor.
    #[error("no author id left after {0}")]
    IdsExhausted(AuthorId),
}

/// Ordered author collection.
#[derive(Debug)]
pub struct AuthorStore {
    authors: Vec<Author>,
    repo: AuthorRepository,
}

impl AuthorStore {
    /// Open the store, loading the persisted collection (or the seed).
    #[must_use]
    pub fn open(repo: AuthorRepository) -> Self {
        let authors = repo.load();
        info!(count = authors.len(), "Author store opened");
        Self { authors, repo }
    }

    /// All authors in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Author] {
        &self.authors
    }

    /// Look up an author by ID.
    #[must_use]
    pub fn get(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Append a new author, assigning the next ID.
    ///
    /// The ID is one more than the largest ID present, or 1 for an empty
    /// store. Fields are stored as given.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdsExhausted` if the largest ID is `i32::MAX`;
    /// the collection is left unchanged.
    #[instrument(skip(self, draft))]
    pub fn add(&mut self, draft: AuthorDraft) -> Result<Author, StoreError> {
        let id = self.next_id()?;
        let author = Author::from_draft(id, draft);
        self.authors.push(author.clone());
        self.persist();
        info!(%id, "Author added");
        Ok(author)
    }

    /// Replace the author with the same ID.
    ///
    /// Returns `false` and leaves the collection unchanged if no author
    /// has that ID.
    #[instrument(skip(self, author), fields(id = %author.id))]
    pub fn update(&mut self, author: Author) -> bool {
        let matched = match self.authors.iter_mut().find(|a| a.id == author.id) {
            Some(existing) => {
                *existing = author;
                true
            }
            None => false,
        };
        if !matched {
            warn!("Update for unknown author ignored");
        }
        self.persist();
        matched
    }

    /// Remove the author with the given ID.
    ///
    /// Returns `false` if no author has that ID.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: AuthorId) -> bool {
        let before = self.authors.len();
        self.authors.retain(|a| a.id != id);
        let matched = self.authors.len() != before;
        if !matched {
            warn!("Remove for unknown author ignored");
        }
        self.persist();
        matched
    }

    fn next_id(&self) -> Result<AuthorId, StoreError> {
        match self.authors.iter().map(|a| a.id).max() {
            None => Ok(AuthorId::new(1)),
            Some(max) => max.checked_next().ok_or_else(|| {
                warn!(%max, "Author ids exhausted");
                StoreError::IdsExhausted(max)
            }),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.authors) {
            warn!(error = %e, count = self.authors.len(), "Failed to persist authors, write dropped");
        }
    }
}
