/// Errors returned by the library.
pub mod error;
/// The characters placed between the words of a passphrase.
pub mod separator;
/// Loading the dictionary that words are picked from.
pub mod corpus;
/// Picks the words of a passphrase within a character budget.
pub mod selector;
/// Joins the picked words into one string.
pub mod assembler;
/// User options and the `settings.toml` file.
pub mod settings;
/// Ties the pieces together into one generation request.
pub mod passphrase;

pub use crate::error::{Error, Result};
pub use crate::passphrase::{generate_passphrase, generate_words};

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
pub(crate) mod test_helpers;
