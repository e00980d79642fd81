use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::selector::{SeedPhrase, SelectionConfig};
use crate::separator::SeparatorClass;

pub const DEFAULT_CHAR_LIMIT: i64 = 40;
pub const DEFAULT_CAPITALIZE: bool = true;
pub const DEFAULT_WORD_COUNT: usize = 8;
pub const DEFAULT_SEPARATOR: SeparatorClass = SeparatorClass::Digits;
pub const DEFAULT_WORDS_PATH: &str = "words_dictionary.json";

/// The options a passphrase is generated with. A new value is built every time the options
/// change, a generation request only ever sees one consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub char_limit: i64,
    pub capitalize: bool,
    /// Empty means that a random dictionary word is used as the first word instead.
    pub personal_phrase: String,
    pub word_count: usize,
    pub separator: SeparatorClass,
    pub words_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            char_limit: DEFAULT_CHAR_LIMIT,
            capitalize: DEFAULT_CAPITALIZE,
            personal_phrase: String::new(),
            word_count: DEFAULT_WORD_COUNT,
            separator: DEFAULT_SEPARATOR,
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
        }
    }
}

impl Settings {
    pub fn with_char_limit(self, char_limit: i64) -> Settings {
        Settings { char_limit, ..self }
    }

    pub fn with_capitalize(self, capitalize: bool) -> Settings {
        Settings { capitalize, ..self }
    }

    pub fn with_personal_phrase(self, personal_phrase: &str) -> Settings {
        Settings {
            personal_phrase: personal_phrase.to_owned(),
            ..self
        }
    }

    pub fn with_word_count(self, word_count: usize) -> Settings {
        Settings { word_count, ..self }
    }

    pub fn with_separator(self, separator: SeparatorClass) -> Settings {
        Settings { separator, ..self }
    }

    pub fn selection_config(&self) -> SelectionConfig {
        SelectionConfig {
            char_limit: self.char_limit,
            word_count: self.word_count,
            capitalize: self.capitalize,
        }
    }

    pub fn seed_phrase(&self) -> SeedPhrase {
        SeedPhrase::new(&self.personal_phrase)
    }

    /// Builds settings from a configuration that has been through `read_config`.
    pub fn from_config(config: &config::Config) -> Result<Settings> {
        let word_count = config.get_int("word_count")?;
        let word_count = usize::try_from(word_count).map_err(|_| {
            Error::InvalidSetting(format!("word_count must not be negative, was {word_count}"))
        })?;

        Ok(Settings {
            char_limit: config.get_int("char_limit")?,
            capitalize: config.get_bool("capitalize")?,
            personal_phrase: config.get_str("personal_phrase")?,
            word_count,
            separator: SeparatorClass::try_from(config.get_str("separator")?.as_str())?,
            words_path: PathBuf::from(config.get_str("words")?),
        })
    }
}

/// Location of the settings file, `$XDG_CONFIG_HOME` takes precedence over `$HOME/.config`.
pub fn settings_path(home: &Option<PathBuf>, xdg_config_home: &Option<PathBuf>) -> Result<PathBuf> {
    let config_dir = match (xdg_config_home, home) {
        (Some(xdg), _) => xdg.clone(),
        (None, Some(home)) => home.join(".config"),
        (None, None) => return Err(Error::Generic("failed to locate the home directory")),
    };

    Ok(config_dir.join("phrasegen").join("settings.toml"))
}

/// Reads the settings file on top of the built in defaults. A missing file is not an error.
///
/// `words_path` comes from the `PHRASEGEN_WORDS` environment variable and overrides the file.
/// Returns the configuration together with the path of the settings file.
pub fn read_config(
    words_path: &Option<String>,
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(config::Config, PathBuf)> {
    let mut settings = config::Config::default();
    settings.set_default("char_limit", DEFAULT_CHAR_LIMIT)?;
    settings.set_default("capitalize", DEFAULT_CAPITALIZE)?;
    settings.set_default("personal_phrase", "")?;
    settings.set_default("word_count", DEFAULT_WORD_COUNT as i64)?;
    settings.set_default("separator", DEFAULT_SEPARATOR.to_string())?;
    settings.set_default("words", DEFAULT_WORDS_PATH)?;

    let path = settings_path(home, xdg_config_home)?;
    if path.exists() {
        log::debug!("reading settings from {}", path.display());
        settings.merge(config::File::new(
            &path.to_string_lossy(),
            config::FileFormat::Toml,
        ))?;
    }

    if let Some(words_path) = words_path {
        settings.set("words", words_path.as_str())?;
    }

    Ok((settings, path))
}

/// Writes the settings as toml, creating the parent directory if needed.
pub fn save_config(settings: &Settings, config_file_location: &Path) -> Result<()> {
    let mut table = toml::Table::new();
    table.insert(
        "char_limit".to_owned(),
        toml::Value::Integer(settings.char_limit),
    );
    table.insert(
        "capitalize".to_owned(),
        toml::Value::Boolean(settings.capitalize),
    );
    table.insert(
        "personal_phrase".to_owned(),
        toml::Value::String(settings.personal_phrase.clone()),
    );
    table.insert(
        "word_count".to_owned(),
        toml::Value::Integer(i64::try_from(settings.word_count).map_err(|_| {
            Error::InvalidSetting(format!("word_count is too large, was {}", settings.word_count))
        })?),
    );
    table.insert(
        "separator".to_owned(),
        toml::Value::String(settings.separator.to_string()),
    );
    table.insert(
        "words".to_owned(),
        toml::Value::String(settings.words_path.to_string_lossy().into_owned()),
    );

    if let Some(parent) = config_file_location.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_file_location, toml::to_string(&table)?)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod test;
