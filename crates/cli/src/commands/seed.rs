//! Write the seed collection to the data directory.

use tracing::{info, warn};

use author_desk_admin::config::AdminConfig;
use author_desk_admin::db::{AuthorRepository, FileSlot, KeyValueSlot, RepositoryError};

/// Outcome of a seed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The seed collection was written; holds its length.
    Written(usize),
    /// Stored data exists and `force` was not given; holds its length.
    Kept(usize),
}

/// Store the seed collection unless data exists and `force` is false.
///
/// Unreadable stored data counts as absent.
///
/// # Errors
///
/// Returns `RepositoryError` if the seed cannot be written.
pub fn seed(slot: impl KeyValueSlot + 'static, force: bool) -> Result<SeedOutcome, RepositoryError> {
    let repo = AuthorRepository::new(slot);

    let existing = match repo.try_load() {
        Ok(existing) => existing,
        Err(e) => {
            warn!(error = %e, "Stored authors unreadable, overwriting");
            None
        }
    };

    if let Some(existing) = existing
        && !force
    {
        return Ok(SeedOutcome::Kept(existing.len()));
    }

    let authors = repo.reset()?;
    Ok(SeedOutcome::Written(authors.len()))
}

/// Seed the configured data directory.
///
/// # Errors
///
/// Returns an error if data exists and `force` is false, or if writing fails.
pub fn run(config: &AdminConfig, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    match seed(FileSlot::new(&config.data_dir), force)? {
        SeedOutcome::Written(count) => {
            info!(count, data_dir = %config.data_dir.display(), "Seed authors written");
            Ok(())
        }
        SeedOutcome::Kept(count) => Err(format!(
            "{} already holds {count} authors; pass --force to overwrite",
            config.data_dir.display()
        )
        .into()),
    }
}
