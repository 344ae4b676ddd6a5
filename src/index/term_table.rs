use std::collections::HashMap;

use crate::list::{Cursor, Reverse, SortedList};
use crate::{Error, Result};
use super::RankedList;

/// A term together with the documents that contain it.
#[derive(Debug)]
pub struct TermEntry {
    term: String,
    documents: RankedList,
}

impl TermEntry {
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns the term's documents, most occurrences first.
    pub fn documents(&self) -> &RankedList {
        &self.documents
    }

    /// Returns the number of distinct documents containing the term.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

/// Maps terms to their ranked documents, and keeps every known term in lexicographic
/// order for output.
#[derive(Debug)]
pub struct TermTable {
    entries: HashMap<String, TermEntry>,
    // Reversed so that the list, which runs greatest to least, iterates ascending.
    order: SortedList<String, Reverse>,
}

impl TermTable {
    pub fn new() -> TermTable {
        TermTable {
            entries: HashMap::new(),
            order: SortedList::new(Reverse),
        }
    }

    /// Returns the ranked documents of `term`.
    pub fn find(&self, term: &str) -> Option<&RankedList> {
        self.entries.get(term).map(|entry| &entry.documents)
    }

    pub fn find_mut(&mut self, term: &str) -> Option<&mut RankedList> {
        self.entries.get_mut(term).map(|entry| &mut entry.documents)
    }

    pub fn entry(&self, term: &str) -> Option<&TermEntry> {
        self.entries.get(term)
    }

    /// Stores `documents` as the ranked documents of `term`, replacing any list the term
    /// already had.
    pub fn insert(&mut self, term: String, documents: RankedList) -> Result<()> {
        if term.is_empty() {
            return Err(Error::InvalidArgument("terms must not be empty"));
        }
        if let Some(entry) = self.entries.get_mut(&term) {
            entry.documents = documents;
            return Ok(());
        }
        self.order.insert(term.clone())?;
        self.entries.insert(term.clone(),
                            TermEntry {
                                term: term,
                                documents: documents,
                            });
        Ok(())
    }

    /// Removes `term` and its documents from the table.
    pub fn remove(&mut self, term: &str) -> Result<TermEntry> {
        if !self.entries.contains_key(term) {
            return Err(Error::NotFound);
        }
        self.order.remove(&term.to_string())?;
        self.entries.remove(term).ok_or(Error::NotFound)
    }

    /// Returns the number of terms in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a cursor over the terms in ascending order.
    pub fn terms(&self) -> Cursor<String, Reverse> {
        self.order.iter()
    }
}

impl Default for TermTable {
    fn default() -> TermTable {
        TermTable::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn list_of(documents: &[&str]) -> RankedList {
        let mut list = RankedList::new();
        for doc in documents {
            list.bump(doc).unwrap();
        }
        list
    }

    #[test]
    fn test_insert_and_find() {
        let mut table = TermTable::new();
        table.insert("cat".into(), list_of(&["a"])).unwrap();
        assert_eq!(table.find("cat").unwrap().len(), 1);
        assert!(table.find("dog").is_none());
        table.find_mut("cat").unwrap().bump("b").unwrap();
        assert_eq!(table.entry("cat").unwrap().document_count(), 2);
    }

    #[test]
    fn test_terms_ascending() {
        let mut table = TermTable::new();
        for term in &["pear", "apple", "zoo", "banana", "apple2"] {
            table.insert(term.to_string(), RankedList::new()).unwrap();
        }
        let terms: Vec<_> = table.terms().collect();
        assert_eq!(terms, ["apple", "apple2", "banana", "pear", "zoo"]);
    }

    #[test]
    fn test_insert_existing_replaces_list() {
        let mut table = TermTable::new();
        table.insert("cat".into(), list_of(&["a"])).unwrap();
        table.insert("cat".into(), list_of(&["b", "c"])).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.terms().count(), 1);
        assert!(table.find("cat").unwrap().get("a").is_none());
    }

    #[test]
    fn test_insert_empty_term() {
        let mut table = TermTable::new();
        assert!(matches!(table.insert(String::new(), RankedList::new()),
                         Err(Error::InvalidArgument(_))));
        assert!(table.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut table = TermTable::new();
        table.insert("cat".into(), list_of(&["a"])).unwrap();
        table.insert("dog".into(), list_of(&["a"])).unwrap();
        let removed = table.remove("cat").unwrap();
        assert_eq!(removed.term(), "cat");
        let terms: Vec<_> = table.terms().collect();
        assert_eq!(terms, ["dog"]);
        assert!(matches!(table.remove("cat"), Err(Error::NotFound)));
    }

    #[test]
    fn test_remove_keeps_terms_in_step() {
        let mut table = TermTable::new();
        for term in &["x", "y", "z"] {
            table.insert(term.to_string(), list_of(&["a"])).unwrap();
        }
        assert!(matches!(table.remove("w"), Err(Error::NotFound)));
        assert_eq!(table.len(), 3);
        assert_eq!(table.terms().count(), 3);

        table.remove("y").unwrap();
        assert_eq!(table.len(), 2);
        let terms: Vec<_> = table.terms().collect();
        assert_eq!(terms, ["x", "z"]);
        assert!(terms.iter().all(|term| table.entry(term).is_some()));
    }

    #[test]
    fn test_remove_while_listing_terms() {
        let mut table = TermTable::new();
        for term in &["a", "b", "c"] {
            table.insert(term.to_string(), RankedList::new()).unwrap();
        }
        let mut terms = table.terms();
        assert_eq!(terms.next().as_deref(), Some("a"));
        table.remove("a").unwrap();
        table.remove("c").unwrap();
        assert_eq!(terms.next().as_deref(), Some("b"));
        assert_eq!(terms.next(), None);
    }
}
