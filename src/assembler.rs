use crate::selector::PassphraseResult;
use crate::separator::SeparatorGenerator;

/// Joins selected words into the final passphrase.
pub struct PassphraseAssembler<'a, G: SeparatorGenerator + ?Sized> {
    words: &'a PassphraseResult,
    separators: &'a G,
}

impl<'a, G: SeparatorGenerator + ?Sized> PassphraseAssembler<'a, G> {
    pub fn new(words: &'a PassphraseResult, separators: &'a G) -> PassphraseAssembler<'a, G> {
        PassphraseAssembler { words, separators }
    }

    /// Every pair of adjacent words gets its own freshly generated separator, there is none
    /// after the last word.
    pub fn assemble(&self) -> String {
        let words = self.words.words();
        debug_assert!(!words.is_empty(), "a passphrase always contains its seed");

        // separators are single characters, at most 4 bytes each
        let capacity = words.iter().map(String::len).sum::<usize>() + 4 * words.len();
        let mut passphrase = String::with_capacity(capacity);
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                passphrase.push_str(&self.separators.next_separator());
            }
            passphrase.push_str(word);
        }

        passphrase
    }
}

#[cfg(test)]
#[path = "tests/assembler.rs"]
mod test;
