//! Tests for catalog search
//!
//! Search is a filtered view: case-insensitive substring match against
//! id, title, or author, with an empty query meaning "everything".

use libris::{Config, Library, MemoryStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_catalog() -> Library<MemoryStore> {
    let mut library = Library::open(Config::default(), MemoryStore::new()).unwrap();
    library.add_book("B1", "Tom Sawyer", "Mark Twain", 2).unwrap();
    library.add_book("B2", "War", "Tomas Mann", 1).unwrap();
    library.add_book("B3", "Dune", "Frank Herbert", 3).unwrap();
    library
}

fn ids(books: &[&libris::domain::Book]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_empty_query_returns_everything_in_order() {
    let library = setup_catalog();

    let results = library.search_books("");
    assert_eq!(ids(&results), vec!["B1", "B2", "B3"]);
}

#[test]
fn test_whitespace_query_returns_everything() {
    let library = setup_catalog();

    let results = library.search_books("   ");
    assert_eq!(results.len(), 3);
}

#[test]
fn test_query_matches_title_and_author_case_insensitively() {
    let library = setup_catalog();

    // "tom" hits Tom Sawyer by title and Tomas Mann by author
    let results = library.search_books("tom");
    assert_eq!(ids(&results), vec!["B1", "B2"]);

    let results = library.search_books("TOM");
    assert_eq!(ids(&results), vec!["B1", "B2"]);
}

#[test]
fn test_query_matches_id_substring() {
    let library = setup_catalog();

    let results = library.search_books("b3");
    assert_eq!(ids(&results), vec!["B3"]);
}

#[test]
fn test_query_with_no_hits_is_empty() {
    let library = setup_catalog();

    assert!(library.search_books("austen").is_empty());
}

#[test]
fn test_search_is_a_view_and_mutates_nothing() {
    let library = setup_catalog();
    let before = library.stats();

    library.search_books("tom");
    library.search_books("");

    assert_eq!(library.stats(), before);
    assert_eq!(library.books().len(), 3);
}
