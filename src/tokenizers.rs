use std::str::Chars;

use crate::util::Unescape;

/// A type that can output a sequence of terms
pub trait Tokenizer {
    /// Reads the next term from the input into `tok`, replacing its contents.
    /// Returns false once the input is exhausted.
    fn read(&mut self, tok: &mut String) -> bool;

    /// Returns the tokenizer output as an iterator.
    fn into_iter(self) -> Iter<Self>
        where Self: Sized
    {
        Iter { tokenizer: self }
    }
}

/// Iterator over a tokenizer's output.
pub struct Iter<Tknzr> {
    tokenizer: Tknzr,
}

impl<Tknzr: Tokenizer> Iterator for Iter<Tknzr> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut tok = String::with_capacity(8);
        if self.tokenizer.read(&mut tok) {
            Some(tok)
        } else {
            None
        }
    }
}

/// A tokenizer over text that may contain backslash escapes.
///
/// Escapes are decoded first, then the text is split into maximal runs of alphanumeric
/// chars; every other char is a delimiter. Nothing is read ahead of the term being built.
pub struct EscapedText<'a> {
    chars: Unescape<Chars<'a>>,
}

impl<'a> EscapedText<'a> {
    /// Creates a new tokenizer over `text`.
    pub fn new(text: &'a str) -> EscapedText<'a> {
        EscapedText { chars: Unescape::new(text.chars()) }
    }
}

impl<'a> Tokenizer for EscapedText<'a> {
    fn read(&mut self, tok: &mut String) -> bool {
        tok.clear();
        for c in &mut self.chars {
            if is_delimiter(c) {
                if tok.is_empty() {
                    continue;
                }
                break;
            }
            tok.push(c);
        }
        !tok.is_empty()
    }
}

/// Returns true for the chars that separate terms.
pub fn is_delimiter(c: char) -> bool {
    !c.is_alphanumeric()
}

/// A tokenizer that lowercases the terms of another
pub struct LowercaseFilter<Tknzr: Tokenizer> {
    tokenizer: Tknzr,
}

impl<Tknzr: Tokenizer> LowercaseFilter<Tknzr> {
    /// Creates a new LowercaseFilter with the specified backing tokenizer.
    pub fn after_tokenizer(tokenizer: Tknzr) -> LowercaseFilter<Tknzr> {
        LowercaseFilter { tokenizer: tokenizer }
    }
}

impl<'a> LowercaseFilter<EscapedText<'a>> {
    /// Creates a new LowercaseFilter backed by an EscapedText tokenizer over `text`.
    pub fn new(text: &'a str) -> LowercaseFilter<EscapedText<'a>> {
        LowercaseFilter::after_tokenizer(EscapedText::new(text))
    }
}

impl<Tknzr: Tokenizer> Tokenizer for LowercaseFilter<Tknzr> {
    fn read(&mut self, tok: &mut String) -> bool {
        if !self.tokenizer.read(tok) {
            return false;
        }
        if tok.chars().any(char::is_uppercase) {
            *tok = tok.to_lowercase();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{EscapedText, LowercaseFilter, Tokenizer};

    fn collect<T: Tokenizer>(tokenizer: T) -> Vec<String> {
        tokenizer.into_iter().collect()
    }

    #[test]
    fn delimiters() {
        let toks = collect(EscapedText::new("Hi, Dave! How are you?"));
        assert_eq!(toks, ["Hi", "Dave", "How", "are", "you"]);
    }

    #[test]
    fn empty_and_delimiters_only() {
        assert!(collect(EscapedText::new("")).is_empty());
        assert!(collect(EscapedText::new(" ,.;!\n")).is_empty());
    }

    #[test]
    fn escapes_split_and_join() {
        // the decoded newline separates, the decoded 'B' joins
        let toks = collect(EscapedText::new(r"one\ntwo \x41\x42c"));
        assert_eq!(toks, ["one", "two", "ABc"]);
    }

    #[test]
    fn digits_are_term_chars() {
        let toks = collect(EscapedText::new("a1b2 3c4d 2013"));
        assert_eq!(toks, ["a1b2", "3c4d", "2013"]);
    }

    #[test]
    fn unicode_terms() {
        let toks = collect(EscapedText::new("嗨, 您好 café"));
        assert_eq!(toks, ["嗨", "您好", "café"]);
    }

    #[test]
    fn lowercase() {
        let toks = collect(LowercaseFilter::new("The CAT sat on THE mat"));
        assert_eq!(toks, ["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn read_reuses_buffer() {
        let mut tokenizer = EscapedText::new("alpha beta");
        let mut tok = String::new();
        assert!(tokenizer.read(&mut tok));
        assert_eq!(tok, "alpha");
        assert!(tokenizer.read(&mut tok));
        assert_eq!(tok, "beta");
        assert!(!tokenizer.read(&mut tok));
        assert!(tok.is_empty());
    }
}
