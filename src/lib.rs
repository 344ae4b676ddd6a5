//! A ranked inverted file index.
//!
//! Documents are split into terms, and every term maps to the documents it occurs in,
//! ranked by how many times it occurs in each. Terms are kept in ascending order and each
//! term's documents in descending order of occurrences, both in a `SortedList`: a
//! comparator-ordered linked list whose cursors stay valid while the list changes.

pub mod config;
pub mod error;
pub mod index;
pub mod list;
pub mod tokenizers;
pub mod util;
pub mod walk;
pub mod writer;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::index::{Document, Index, Posting, RankedList, TermEntry, TermTable};
pub use crate::list::{Comparator, Cursor, Natural, Reverse, SortedList};
pub use crate::writer::Format;

#[test]
fn test_rank_by_occurrences() {
    let mut index = Index::new();
    index.index(&Document::new("1", "learn to program in rust today"));
    index.index(&Document::new("2", "what did you do today today"));
    let today: Vec<_> = index.postings("today").unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(today, ["2 2", "1 1"]);
}

#[test]
fn test_terms_ascending() {
    let mut index = Index::new();
    index.index(&Document::new("1", "what did you do today"));
    let terms: Vec<_> = index.terms().collect();
    assert_eq!(terms, ["did", "do", "today", "what", "you"]);
}

#[test]
fn test_unknown_term() {
    let mut index = Index::new();
    index.index(&Document::new("3", "hey today"));
    assert!(index.postings("tomorrow").is_none());
    assert!(index.get("tomorrow").is_none());
}
