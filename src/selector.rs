use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::corpus::WordCorpus;
use crate::separator::SeparatorGenerator;

/// Words shorter than this are never picked from the corpus.
pub const MIN_WORD_LENGTH: usize = 3;

/// The phrase the user wants the passphrase to start with.
#[derive(Clone, PartialEq, Eq, Default, Zeroize, ZeroizeOnDrop)]
pub struct SeedPhrase {
    text: String,
}

impl SeedPhrase {
    /// Creates a seed phrase, all whitespace is removed from the input.
    pub fn new(raw: &str) -> SeedPhrase {
        SeedPhrase {
            text: raw.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// A seed phrase of length 0 means that the user didn't supply one.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SeedPhrase")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Maximum number of characters in the passphrase, separators included.
    pub char_limit: i64,
    /// Number of words to add after the seed phrase.
    pub word_count: usize,
    pub capitalize: bool,
}

/// The ordered words of a passphrase, the seed phrase is always the first one.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PassphraseResult {
    words: Vec<String>,
}

impl PassphraseResult {
    pub fn new(seed: String) -> PassphraseResult {
        PassphraseResult { words: vec![seed] }
    }

    pub(crate) fn push(&mut self, word: String) {
        self.words.push(word);
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn seed(&self) -> &str {
        &self.words[0]
    }

    /// Number of words, the seed included. Never zero.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl std::fmt::Debug for PassphraseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PassphraseResult")
            .field("word_count", &self.word_count())
            .finish_non_exhaustive()
    }
}

/// Uppercases the first character, the rest of the word is left as is.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Picks random corpus words that fit into the character budget.
pub struct PhraseSelector<'a, G: SeparatorGenerator + ?Sized> {
    corpus: &'a WordCorpus,
    config: SelectionConfig,
    seed: &'a SeedPhrase,
    separators: &'a G,
}

impl<'a, G: SeparatorGenerator + ?Sized> PhraseSelector<'a, G> {
    pub fn new(
        corpus: &'a WordCorpus,
        config: SelectionConfig,
        seed: &'a SeedPhrase,
        separators: &'a G,
    ) -> PhraseSelector<'a, G> {
        PhraseSelector {
            corpus,
            config,
            seed,
            separators,
        }
    }

    /// Returns the seed phrase followed by up to `word_count` random words. Running out of
    /// budget or of fitting words ends the selection early, that is not an error.
    ///
    /// The separator in front of every drawn word is charged to the budget, the one between
    /// the seed phrase and the first word included.
    pub fn select(&self) -> PassphraseResult {
        let seed = if self.config.capitalize {
            capitalize(self.seed.text())
        } else {
            self.seed.text().to_owned()
        };
        let mut result = PassphraseResult::new(seed);

        let mut budget = self
            .config
            .char_limit
            .saturating_sub(self.seed.len() as i64);
        let mut selected = 0;

        while budget > 0 && selected < self.config.word_count {
            // one separator per boundary, including the one in front of the next word
            let separator_len = self.separators.next_separator().chars().count() as i64;
            let separator_cost = (selected as i64 + 1).saturating_mul(separator_len);
            let ceiling = budget.saturating_sub(separator_cost);

            let candidates = if ceiling < MIN_WORD_LENGTH as i64 {
                Vec::new()
            } else {
                self.corpus.words_within(MIN_WORD_LENGTH, ceiling as usize)
            };

            let word = match candidates.choose(&mut OsRng) {
                Some(word) => *word,
                None => {
                    log::debug!(
                        "no word fits into the remaining {} characters, stopping after {} words",
                        ceiling,
                        selected
                    );
                    break;
                }
            };
            log::trace!("picked word {} out of {} candidates", selected + 1, candidates.len());

            if self.config.capitalize {
                result.push(capitalize(word));
            } else {
                result.push(word.clone());
            }
            budget = budget.saturating_sub(word.chars().count() as i64);
            selected += 1;
        }

        result
    }
}

#[cfg(test)]
#[path = "tests/selector.rs"]
mod test;
