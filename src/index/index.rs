use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::list::{Cursor, Reverse};
use crate::tokenizers::{EscapedText, LowercaseFilter, Tokenizer};
use crate::walk;
use crate::{Error, Result};
use super::*;

/// An inverted index mapping every term to the documents containing it, each term's
/// documents ranked by how often the term occurs in them.
///
/// The index owns all of its state; dropping it tears everything down.
#[derive(Debug)]
pub struct Index {
    terms: TermTable,
    // Ids of the documents indexed so far
    documents: BTreeSet<String>,
    lowercase: bool,
}

impl Index {
    /// Constructs a new, empty Index that lowercases terms.
    pub fn new() -> Index {
        Index::with_config(&Config::default())
    }

    /// Constructs a new, empty Index using the tokenizer settings of `config`.
    pub fn with_config(config: &Config) -> Index {
        Index {
            terms: TermTable::new(),
            documents: BTreeSet::new(),
            lowercase: config.lowercase,
        }
    }

    /// Inserts the document.
    /// Inserting a document involves tokenizing the document's content and recording one
    /// occurrence of each term in the document. Indexing a document again adds to its
    /// counts. Returns the number of terms recorded.
    pub fn index(&mut self, doc: &Document) -> usize {
        let recorded = if self.lowercase {
            self.index_terms(doc.id(), LowercaseFilter::new(doc.content()))
        } else {
            self.index_terms(doc.id(), EscapedText::new(doc.content()))
        };
        self.documents.insert(doc.id.clone());
        debug!(document = doc.id(), terms = recorded, "indexed document");
        recorded
    }

    fn index_terms<Tknzr: Tokenizer>(&mut self, document: &str, tokenizer: Tknzr) -> usize {
        let mut recorded = 0;
        for term in tokenizer.into_iter() {
            match self.add_term(term, document) {
                Ok(()) => recorded += 1,
                Err(err) => warn!(document, %err, "skipping term"),
            }
        }
        recorded
    }

    /// Records one occurrence of `term` in `document`.
    pub fn add_term(&mut self, term: String, document: &str) -> Result<()> {
        if let Some(documents) = self.terms.find_mut(&term) {
            return documents.bump(document).map(|_| ());
        }
        let mut documents = RankedList::new();
        documents.bump(document)?;
        debug!(term = %term, "new term");
        self.terms.insert(term, documents)
    }

    /// Indexes every file under `path`, or the file at `path` itself.
    /// Files that cannot be read are skipped. Returns the number of documents indexed.
    pub fn index_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        fs::metadata(path).map_err(|err| Error::io(path, err))?;
        let mut indexed = 0;
        for doc in walk::documents(path) {
            match doc {
                Ok(doc) => {
                    self.index(&doc);
                    indexed += 1;
                }
                Err(err) if err.is_recoverable() => warn!(%err, "skipping file"),
                Err(err) => return Err(err),
            }
        }
        info!(path = %path.display(), documents = indexed, terms = self.term_count(), "indexed path");
        Ok(indexed)
    }

    /// Removes `term` and its postings from the index.
    pub fn remove_term(&mut self, term: &str) -> Result<()> {
        self.terms.remove(term).map(|_| ())
    }

    /// Returns the term's entry, if the term occurs anywhere.
    pub fn get(&self, term: &str) -> Option<&TermEntry> {
        self.terms.entry(term)
    }

    /// Returns the term's postings, most occurrences first.
    pub fn postings(&self, term: &str) -> Option<Vec<Posting>> {
        self.terms.find(term).map(RankedList::to_vec)
    }

    /// Returns a cursor over the indexed terms in ascending order.
    pub fn terms(&self) -> Cursor<String, Reverse> {
        self.terms.terms()
    }

    /// Visits the term entries in ascending term order.
    pub fn entries(&self) -> impl Iterator<Item = &TermEntry> + '_ {
        self.terms().filter_map(move |term| self.terms.entry(&term))
    }

    /// Returns the number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Returns the number of distinct documents indexed.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

impl Default for Index {
    fn default() -> Index {
        Index::new()
    }
}

#[cfg(test)]
mod test {
    use crate::Config;
    use crate::Error;
    use super::super::*;

    fn ranked(index: &Index, term: &str) -> Vec<(String, usize)> {
        index.postings(term)
             .unwrap_or_default()
             .into_iter()
             .map(|posting| (posting.document, posting.occurrences))
             .collect()
    }

    fn owned(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected.iter().map(|&(doc, n)| (doc.to_string(), n)).collect()
    }

    #[test]
    fn test_two_documents() {
        let mut index = Index::new();
        index.index(&Document::new("doc1", "the cat sat"));
        index.index(&Document::new("doc2", "the cat ran"));
        assert_eq!(ranked(&index, "the"), owned(&[("doc2", 1), ("doc1", 1)]));
        assert_eq!(ranked(&index, "cat"), owned(&[("doc2", 1), ("doc1", 1)]));
        assert_eq!(ranked(&index, "sat"), owned(&[("doc1", 1)]));
        assert_eq!(ranked(&index, "ran"), owned(&[("doc2", 1)]));
        assert_eq!(index.term_count(), 4);
        assert_eq!(index.document_count(), 2);
    }

    #[test]
    fn test_reindex_bumps_counts() {
        let mut index = Index::new();
        let doc1 = Document::new("doc1", "the cat sat");
        index.index(&doc1);
        index.index(&Document::new("doc2", "the cat ran"));
        index.index(&doc1);
        assert_eq!(ranked(&index, "the"), owned(&[("doc1", 2), ("doc2", 1)]));
        assert_eq!(ranked(&index, "cat"), owned(&[("doc1", 2), ("doc2", 1)]));
        assert_eq!(ranked(&index, "sat"), owned(&[("doc1", 2)]));
        assert_eq!(ranked(&index, "ran"), owned(&[("doc2", 1)]));
        assert_eq!(index.document_count(), 2);
    }

    #[test]
    fn test_repeated_term_in_one_document() {
        let mut index = Index::new();
        index.index(&Document::new("a", "to be or not to be"));
        index.index(&Document::new("b", "be quick"));
        assert_eq!(ranked(&index, "be"), owned(&[("a", 2), ("b", 1)]));
        assert_eq!(index.get("to").unwrap().document_count(), 1);
    }

    #[test]
    fn test_lowercase_index() {
        let mut index = Index::new();
        index.index(&Document::new("0", "BeAt beat"));
        assert_eq!(ranked(&index, "beat"), owned(&[("0", 2)]));
        assert!(index.postings("BeAt").is_none());
    }

    #[test]
    fn test_case_sensitive_index() {
        let config = Config::default().with_lowercase(false);
        let mut index = Index::with_config(&config);
        index.index(&Document::new("0", "BeAt beat"));
        assert_eq!(ranked(&index, "BeAt"), owned(&[("0", 1)]));
        assert_eq!(ranked(&index, "beat"), owned(&[("0", 1)]));
    }

    #[test]
    fn test_escapes_in_content() {
        let mut index = Index::new();
        index.index(&Document::new("0", r"new\nline \x41pple"));
        let terms: Vec<_> = index.terms().collect();
        assert_eq!(terms, ["apple", "line", "new"]);
    }

    #[test]
    fn test_terms_in_order() {
        let mut index = Index::new();
        index.index(&Document::new("0", "zebra apple mango apple"));
        let terms: Vec<_> = index.entries().map(|entry| entry.term().to_string()).collect();
        assert_eq!(terms, ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_remove_term() {
        let mut index = Index::new();
        index.index(&Document::new("0", "keep drop"));
        index.remove_term("drop").unwrap();
        assert!(index.get("drop").is_none());
        let terms: Vec<_> = index.terms().collect();
        assert_eq!(terms, ["keep"]);
        assert!(matches!(index.remove_term("drop"), Err(Error::NotFound)));
    }

    #[test]
    fn test_index_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut index = Index::new();
        let err = index.index_path(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
