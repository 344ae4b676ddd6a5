mod document;
mod index;
mod postings;
mod term_table;

pub use self::document::Document;
pub use self::index::Index;
pub use self::postings::{ByOccurrences, Posting, RankedList};
pub use self::term_table::{TermEntry, TermTable};
