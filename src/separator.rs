use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};

const LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const SYMBOLS: &[char] = &[
    '!', '#', '$', '%', '&', '(', ')', '*', '+', '-', '.', '/', ':', ';', '<', '=', '>', '?', '@',
    '[', ']', '^', '_', '`', '{', '|', '}', '~',
];

const WHITESPACE: &[char] = &[' '];

/// The kind of character that is placed between the words of a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeparatorClass {
    Letters,
    #[default]
    Digits,
    Symbols,
    Whitespace,
}

impl SeparatorClass {
    pub const ALL: [SeparatorClass; 4] = [
        SeparatorClass::Letters,
        SeparatorClass::Digits,
        SeparatorClass::Symbols,
        SeparatorClass::Whitespace,
    ];

    /// The characters a separator of this class is drawn from.
    pub fn alphabet(&self) -> &'static [char] {
        match self {
            SeparatorClass::Letters => LETTERS,
            SeparatorClass::Digits => DIGITS,
            SeparatorClass::Symbols => SYMBOLS,
            SeparatorClass::Whitespace => WHITESPACE,
        }
    }

    /// Human readable label, used by the frontends.
    pub fn label(&self) -> &'static str {
        match self {
            SeparatorClass::Letters => "Letters",
            SeparatorClass::Digits => "Numbers",
            SeparatorClass::Symbols => "Symbols",
            SeparatorClass::Whitespace => "Whitespaces",
        }
    }
}

impl TryFrom<&str> for SeparatorClass {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "letters" => Ok(SeparatorClass::Letters),
            "numbers" | "digits" => Ok(SeparatorClass::Digits),
            "symbols" => Ok(SeparatorClass::Symbols),
            "whitespaces" | "whitespace" | "space" => Ok(SeparatorClass::Whitespace),
            _ => Err(Error::UnknownSeparatorClass(value.to_owned())),
        }
    }
}

impl std::fmt::Display for SeparatorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SeparatorClass::Letters => write!(f, "letters"),
            SeparatorClass::Digits => write!(f, "numbers"),
            SeparatorClass::Symbols => write!(f, "symbols"),
            SeparatorClass::Whitespace => write!(f, "whitespaces"),
        }
    }
}

/// Produces the characters placed between words.
pub trait SeparatorGenerator {
    /// Returns a freshly generated separator, every call is independent of the previous ones.
    fn next_separator(&self) -> String;
}

/// Generates separators of one class using the operating system's random number generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorPolicy {
    class: SeparatorClass,
}

impl SeparatorPolicy {
    pub fn new(class: SeparatorClass) -> SeparatorPolicy {
        SeparatorPolicy { class }
    }

    pub fn class(&self) -> SeparatorClass {
        self.class
    }
}

impl SeparatorGenerator for SeparatorPolicy {
    fn next_separator(&self) -> String {
        match self.class.alphabet().choose(&mut OsRng) {
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
#[path = "tests/separator.rs"]
mod test;
