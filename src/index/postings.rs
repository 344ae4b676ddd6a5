use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use rustc_serialize::json::{Json, ToJson};
use tracing::trace;

use crate::list::{Comparator, Cursor, SortedList};
use crate::{Error, Result};

/// A single document's entry in a term's postings: which document contains the term, and
/// how many times.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Posting {
    /// The id of the document
    pub document: String,
    /// The number of times the term occurs in the document
    pub occurrences: usize,
}

impl Posting {
    /// Creates a posting for `document` with the given occurrence count.
    pub fn new<S: Into<String>>(document: S, occurrences: usize) -> Posting {
        Posting {
            document: document.into(),
            occurrences: occurrences,
        }
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} {}", self.document, self.occurrences)
    }
}

impl ToJson for Posting {
    fn to_json(&self) -> Json {
        let mut object = BTreeMap::new();
        object.insert("document".to_string(), self.document.to_json());
        object.insert("occurrences".to_string(), self.occurrences.to_json());
        Json::Object(object)
    }
}

/// Orders postings by occurrence count alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByOccurrences;

impl Comparator<Posting> for ByOccurrences {
    fn compare(&self, a: &Posting, b: &Posting) -> Ordering {
        a.occurrences.cmp(&b.occurrences)
    }
}

/// The documents containing a term, most occurrences first.
///
/// Among documents with equal counts the one that reached that count last comes first.
#[derive(Debug)]
pub struct RankedList {
    postings: SortedList<Posting, ByOccurrences>,
}

impl RankedList {
    /// Constructs a new, empty RankedList
    pub fn new() -> RankedList {
        RankedList { postings: SortedList::new(ByOccurrences) }
    }

    /// Records one more occurrence of the term in `document`, returning the document's new
    /// count.
    ///
    /// A document seen before moves up past the documents it now outranks; a new document
    /// enters with a count of one.
    pub fn bump(&mut self, document: &str) -> Result<usize> {
        let mut occurrences = 1;
        let found = self.postings.rerank(|posting| posting.document == document, |posting| {
            posting.occurrences += 1;
            occurrences = posting.occurrences;
        });
        match found {
            Ok(()) => {
                trace!(document, occurrences, "reranked posting");
                Ok(occurrences)
            }
            Err(Error::NotFound) => {
                self.postings.insert(Posting::new(document, 1))?;
                Ok(1)
            }
            Err(err) => Err(err),
        }
    }

    /// Returns the posting for `document`, if the term occurs in it.
    pub fn get(&self, document: &str) -> Option<Posting> {
        self.postings.find(|posting| posting.document == document)
    }

    /// Drops `document` from the list.
    pub fn remove(&mut self, document: &str) -> Result<()> {
        let posting = self.get(document).ok_or(Error::NotFound)?;
        self.postings.remove(&posting)
    }

    /// Returns the number of documents in the list.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Returns a cursor over the postings, most occurrences first.
    pub fn iter(&self) -> Cursor<Posting, ByOccurrences> {
        self.postings.iter()
    }

    pub fn to_vec(&self) -> Vec<Posting> {
        self.postings.to_vec()
    }
}

impl Default for RankedList {
    fn default() -> RankedList {
        RankedList::new()
    }
}

impl ToJson for RankedList {
    fn to_json(&self) -> Json {
        Json::Array(self.iter().map(|posting| posting.to_json()).collect())
    }
}
