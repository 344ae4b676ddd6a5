//! Depth-first discovery of the documents under a path.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::index::Document;
use crate::{Error, Result};

/// Iterator over the documents under a root path, in depth-first order with the entries
/// of each directory visited by file name.
pub struct Documents {
    entries: walkdir::IntoIter,
}

/// Walks `root`, yielding a Document for every regular file found. If `root` is a file it
/// is the only document. Each document's id is its path as reached from `root`.
pub fn documents<P: AsRef<Path>>(root: P) -> Documents {
    Documents { entries: WalkDir::new(root).sort_by_file_name().into_iter() }
}

impl Iterator for Documents {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Result<Document>> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(PathBuf::new);
                    return Some(Err(Error::io(path, io::Error::from(err))));
                }
            };
            if entry.file_type().is_file() {
                return Some(Document::read(entry.path()));
            }
        }
    }
}
