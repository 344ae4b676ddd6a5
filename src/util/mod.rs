pub mod escape;

pub use self::escape::{unescape, Unescape};
