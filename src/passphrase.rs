use crate::assembler::PassphraseAssembler;
use crate::corpus::WordCorpus;
use crate::error::Result;
use crate::selector::{PassphraseResult, PhraseSelector, SeedPhrase};
use crate::separator::{SeparatorGenerator, SeparatorPolicy};
use crate::settings::Settings;

/// Selects the words of a passphrase. When no personal phrase is configured a random
/// dictionary word takes its place, that word is only used for this one passphrase.
pub fn generate_words<G: SeparatorGenerator + ?Sized>(
    corpus: &WordCorpus,
    settings: &Settings,
    separators: &G,
) -> Result<PassphraseResult> {
    let mut seed = settings.seed_phrase();
    if seed.is_empty() {
        seed = SeedPhrase::new(corpus.random_word()?);
    }

    let selector = PhraseSelector::new(corpus, settings.selection_config(), &seed, separators);
    Ok(selector.select())
}

/// Generates a complete passphrase from the settings.
pub fn generate_passphrase(corpus: &WordCorpus, settings: &Settings) -> Result<String> {
    let separators = SeparatorPolicy::new(settings.separator);
    let words = generate_words(corpus, settings, &separators)?;
    log::debug!(
        "assembling {} words with {} separators",
        words.word_count(),
        settings.separator
    );

    Ok(PassphraseAssembler::new(&words, &separators).assemble())
}

#[cfg(test)]
#[path = "tests/passphrase.rs"]
mod test;
