use std::fs::File;
use std::io::Write;

use super::*;

fn write_settings(home: &Path, content: &str) -> Result<()> {
    let dir = home.join(".config").join("phrasegen");
    std::fs::create_dir_all(&dir)?;
    let mut file = File::create(dir.join("settings.toml"))?;
    write!(file, "{}", content)?;
    file.flush()?;
    Ok(())
}

#[test]
fn settings_path_prefers_xdg() -> Result<()> {
    let path = settings_path(
        &Some(PathBuf::from("/home/user")),
        &Some(PathBuf::from("/tmp/xdg")),
    )?;

    assert_eq!(PathBuf::from("/tmp/xdg/phrasegen/settings.toml"), path);
    Ok(())
}

#[test]
fn settings_path_home() -> Result<()> {
    let path = settings_path(&Some(PathBuf::from("/home/user")), &None)?;

    assert_eq!(
        PathBuf::from("/home/user/.config/phrasegen/settings.toml"),
        path
    );
    Ok(())
}

#[test]
fn settings_path_none() {
    let err = settings_path(&None, &None).unwrap_err();

    assert!(matches!(
        err,
        Error::Generic("failed to locate the home directory")
    ));
}

#[test]
fn read_config_no_file_gives_defaults() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();

    let (config, path) = read_config(&None, &Some(dir.path().to_path_buf()), &None)?;
    let settings = Settings::from_config(&config)?;

    assert_eq!(Settings::default(), settings);
    assert_eq!(
        dir.path().join(".config/phrasegen/settings.toml"),
        path
    );
    Ok(())
}

#[test]
fn read_config_file_overrides_defaults() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_settings(
        dir.path(),
        "char_limit = 25\ncapitalize = false\nseparator = \"symbols\"\n",
    )?;

    let (config, _) = read_config(&None, &Some(dir.path().to_path_buf()), &None)?;
    let settings = Settings::from_config(&config)?;

    assert_eq!(25, settings.char_limit);
    assert!(!settings.capitalize);
    assert_eq!(SeparatorClass::Symbols, settings.separator);
    assert_eq!(DEFAULT_WORD_COUNT, settings.word_count);
    assert_eq!("", settings.personal_phrase);
    Ok(())
}

#[test]
fn read_config_words_env_overrides_file() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), "words = \"/usr/share/words.json\"\n")?;

    let (config, _) = read_config(
        &Some("/tmp/other.json".to_owned()),
        &Some(dir.path().to_path_buf()),
        &None,
    )?;
    let settings = Settings::from_config(&config)?;

    assert_eq!(PathBuf::from("/tmp/other.json"), settings.words_path);
    Ok(())
}

#[test]
fn from_config_negative_word_count() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), "word_count = -2\n")?;

    let (config, _) = read_config(&None, &Some(dir.path().to_path_buf()), &None)?;
    let err = Settings::from_config(&config).unwrap_err();

    assert!(matches!(err, Error::InvalidSetting(_)));
    Ok(())
}

#[test]
fn from_config_unknown_separator() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    write_settings(dir.path(), "separator = \"emoji\"\n")?;

    let (config, _) = read_config(&None, &Some(dir.path().to_path_buf()), &None)?;
    let err = Settings::from_config(&config).unwrap_err();

    assert!(matches!(err, Error::UnknownSeparatorClass(_)));
    Ok(())
}

#[test]
fn save_config_can_be_read_back() -> Result<()> {
    let home = tempfile::tempdir().unwrap();
    let settings = Settings::default()
        .with_char_limit(32)
        .with_capitalize(false)
        .with_personal_phrase("correcthorse")
        .with_word_count(3)
        .with_separator(SeparatorClass::Whitespace);
    let path = settings_path(&Some(home.path().to_path_buf()), &None)?;

    save_config(&settings, &path)?;

    let content = std::fs::read_to_string(&path)?;
    assert!(content.contains("char_limit = 32\n"));
    assert!(content.contains("capitalize = false\n"));
    assert!(content.contains("word_count = 3\n"));

    let (config, _) = read_config(&None, &Some(home.path().to_path_buf()), &None)?;
    assert_eq!(settings, Settings::from_config(&config)?);
    Ok(())
}

#[test]
fn selection_config_and_seed() {
    let settings = Settings::default()
        .with_char_limit(20)
        .with_word_count(2)
        .with_personal_phrase("my phrase");

    assert_eq!(
        SelectionConfig {
            char_limit: 20,
            word_count: 2,
            capitalize: true,
        },
        settings.selection_config()
    );
    assert_eq!("myphrase", settings.seed_phrase().text());
}

#[test]
fn save_config_word_count_too_large() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("settings.toml");
    let settings = Settings::default().with_word_count(usize::MAX);

    let err = save_config(&settings, &path).unwrap_err();

    assert!(matches!(err, Error::InvalidSetting(_)));
    assert!(!path.exists());
}

#[test]
fn save_config_large_word_count_can_be_read_back() -> Result<()> {
    let home = tempfile::tempdir().unwrap();
    let settings = Settings::default().with_word_count(i64::MAX as usize);
    let path = settings_path(&Some(home.path().to_path_buf()), &None)?;

    save_config(&settings, &path)?;

    let (config, _) = read_config(&None, &Some(home.path().to_path_buf()), &None)?;
    assert_eq!(settings, Settings::from_config(&config)?);
    Ok(())
}
