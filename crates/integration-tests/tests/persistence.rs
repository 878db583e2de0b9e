//! File-backed storage across app restarts.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use author_desk_admin::db::{AUTHORS_KEY, AuthorRepository, FileSlot, KeyValueSlot, seed_authors};
use author_desk_core::{AuthorDraft, AuthorId};
use author_desk_integration_tests::{file_app, secret};

const TTL: Duration = Duration::from_secs(3);

#[tokio::test]
async fn test_changes_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut app = file_app(dir.path(), TTL);
        app.login("admin", &secret("admin")).unwrap();
        app.add_author(AuthorDraft::new("Rūdolfs", "Blaumanis", "Writer.")).unwrap();
        app.delete_author(AuthorId::new(1)).unwrap();
    }

    let app = file_app(dir.path(), TTL);
    let names: Vec<String> = app.authors().iter().map(|a| a.full_name()).collect();
    assert_eq!(
        names,
        vec!["Anna Liepiņa", "Pēteris Kalniņš", "Līga Ozoliņa", "Rūdolfs Blaumanis"]
    );
    // Session is not persisted
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_fresh_directory_shows_seed_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let app = file_app(&dir.path().join("nested"), TTL);

    assert_eq!(app.authors(), seed_authors().as_slice());
    assert!(FileSlot::new(dir.path().join("nested")).get(AUTHORS_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_corrupt_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("authors.json"), "[{\"id\":").unwrap();

    let app = file_app(dir.path(), TTL);
    assert_eq!(app.authors(), seed_authors().as_slice());
}

#[test]
fn test_empty_collection_stays_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = AuthorRepository::new(FileSlot::new(dir.path()));
    repo.save(&[]).unwrap();

    assert!(repo.load().is_empty());
}
