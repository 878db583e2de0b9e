//! Author search.

use author_desk_core::Author;

/// Filter authors by a case-insensitive substring of first or last name.
///
/// An empty term matches every author. Order is preserved.
#[must_use]
pub fn filter<'a>(authors: &'a [Author], term: &str) -> Vec<&'a Author> {
    let needle = term.to_lowercase();
    authors
        .iter()
        .filter(|author| matches(author, &needle))
        .collect()
}

fn matches(author: &Author, needle: &str) -> bool {
    needle.is_empty()
        || author.first_name.to_lowercase().contains(needle)
        || author.last_name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use author_desk_core::{AuthorDraft, AuthorId};

    use super::*;
    use crate::db::seed_authors;

    fn names(authors: &[&Author]) -> Vec<String> {
        authors.iter().map(|a| a.full_name()).collect()
    }

    #[test]
    fn test_empty_term_returns_all_in_order() {
        let seed = seed_authors();
        let found = filter(&seed, "");
        assert_eq!(found.len(), seed.len());
        assert!(found.iter().zip(&seed).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_case_insensitive_first_name() {
        let seed = seed_authors();
        assert_eq!(names(&filter(&seed, "ANNA")), vec!["Anna Liepiņa"]);
    }

    #[test]
    fn test_matches_last_name_with_diacritics() {
        let seed = seed_authors();
        assert_eq!(names(&filter(&seed, "OZOLIŅA")), vec!["Līga Ozoliņa"]);
        assert_eq!(
            names(&filter(&seed, "iņ")),
            vec!["Jānis Bērziņš", "Anna Liepiņa", "Pēteris Kalniņš", "Līga Ozoliņa"]
        );
    }

    #[test]
    fn test_bio_is_not_searched() {
        let seed = seed_authors();
        assert!(filter(&seed, "dzejnieks").is_empty());
    }

    #[test]
    fn test_term_spanning_first_and_last_name_does_not_match() {
        let authors = vec![Author::from_draft(
            AuthorId::new(1),
            AuthorDraft::new("Anna", "Liepiņa", ""),
        )];
        assert!(filter(&authors, "anna liepiņa").is_empty());
    }
}
