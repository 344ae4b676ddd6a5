use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::{Error, Result};

/// A Document contains an id and content.
/// Hashing and equality are based only on the id field.
#[derive(Clone, Debug, Eq)]
pub struct Document {
    /// The id of the document, which is what postings refer to
    pub id: String,
    /// The document's raw text
    pub content: String,
}

impl Document {
    /// Construct a new Document from an id and content.
    /// Both two arguments can be anything that can be turned into a String.
    pub fn new<S, T>(id: S, content: T) -> Document
        where S: Into<String>,
              T: Into<String>
    {
        Document {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Reads the file at `path` into a Document whose id is the path as given.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| Error::io(path, err))?;
        Ok(Document::new(path.display().to_string(), String::from_utf8_lossy(&bytes)))
    }

    /// Returns a reference to the document's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a reference to the document's content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Hash for Document {
    // Documents are unique only upon their id
    fn hash<H>(&self, state: &mut H)
        where H: Hasher
    {
        self.id.hash(state);
    }
}

impl PartialEq for Document {
    // Documents are unique only upon their id
    fn eq(&self, other: &Document) -> bool {
        self.id == other.id
    }
}
