use std::collections::BTreeSet;
use std::path::Path;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};

/// The set of words passphrases are built from. It's never modified after it has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    pub fn new<I, S>(words: I) -> WordCorpus
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: BTreeSet<String> = words.into_iter().map(Into::into).collect();

        WordCorpus {
            words: words.into_iter().collect(),
        }
    }

    /// Parses a JSON object that maps every word to some metadata, only the keys are kept.
    pub fn from_json_str(json: &str) -> Result<WordCorpus> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        match value {
            serde_json::Value::Object(map) => Ok(WordCorpus::new(map.into_iter().map(|(k, _)| k))),
            _ => Err(Error::Generic("word dictionary must be a JSON object")),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<WordCorpus> {
        let content = std::fs::read_to_string(path)?;
        let corpus = WordCorpus::from_json_str(&content)?;
        log::debug!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Reads a plain word list, one word per line.
    pub fn from_wordlist(list: &str) -> WordCorpus {
        WordCorpus::new(
            list.lines()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words whose length, in characters, lies within `min..=max`.
    pub fn words_within(&self, min: usize, max: usize) -> Vec<&String> {
        self.words
            .iter()
            .filter(|w| {
                let len = w.chars().count();
                min <= len && len <= max
            })
            .collect()
    }

    /// Picks one word, uniformly, using the operating system's random number generator.
    pub fn random_word(&self) -> Result<&str> {
        self.words
            .choose(&mut OsRng)
            .map(String::as_str)
            .ok_or(Error::EmptyCorpus)
    }
}

#[cfg(test)]
#[path = "tests/corpus.rs"]
mod test;
