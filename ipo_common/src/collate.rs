//! Natural, case-insensitive string ordering.
//!
//! Runs of ASCII digits compare by numeric value (`2.9` < `2.10`), letters
//! compare without regard to case, and the character classes order as
//! whitespace < punctuation < digits < letters. Strings that differ only in
//! letter case or in leading zeros compare equal.
//!
//! This approximates locale collation at base sensitivity without collation
//! tables. Accents are not folded: a letter outside ASCII compares by its
//! lowercase code point, so `é` sorts after `z` rather than next to `e`.
//! Serial labels and category names from the exchange are ASCII.
use std::cmp::Ordering;

/// Punctuation in collation order; anything not listed sorts after these.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punctuation,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy)]
enum Token<'a> {
    Number(&'a str),
    Char(char),
}

impl Token<'_> {
    fn weight(&self) -> (Class, u32) {
        match *self {
            Token::Number(_) => (Class::Digit, 0),
            Token::Char(c) if c.is_whitespace() => (Class::Space, c as u32),
            Token::Char(c) if c.is_alphanumeric() => {
                let folded = c.to_lowercase().next().unwrap_or(c);
                (Class::Letter, folded as u32)
            }
            Token::Char(c) => match PUNCTUATION_ORDER.find(c) {
                Some(index) => (Class::Punctuation, index as u32),
                None => (Class::Punctuation, 0x100 + c as u32),
            },
        }
    }
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        if first.is_ascii_digit() {
            let end = self
                .rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (digits, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Token::Number(digits))
        } else {
            self.rest = &self.rest[first.len_utf8()..];
            Some(Token::Char(first))
        }
    }
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_tokens(a: Token<'_>, b: Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Number(x), Token::Number(y)) => compare_numbers(x, y),
        _ => a.weight().cmp(&b.weight()),
    }
}

/// Compares two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Tokens { rest: a };
    let mut right = Tokens { rest: b };
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare_tokens(x, y) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
}
