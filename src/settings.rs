use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::DEFAULT_WORDLIST_URL;
use crate::error::{Error, Result};
use crate::generator::{DEFAULT_COMPLEX_CHARS, DEFAULT_MIN_CHARS, DEFAULT_QUANTITY};

/// Location of the settings file: `$XDG_CONFIG_HOME/rollpass/settings.toml`
/// when the override is given, otherwise `~/.config/rollpass/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_dir = match xdg_config_home {
        Some(dir) => dir.clone(),
        None => match home {
            Some(home) => home.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };
    Ok(config_dir.join("rollpass").join("settings.toml"))
}

pub fn file_settings(settings_file_location: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(settings_file_location.to_path_buf())
}

/// The built-in defaults as a `Config`, before any settings file is merged.
pub fn default_settings() -> Result<config::Config> {
    let mut settings = config::Config::default();
    settings.set_default("wordlist_url", DEFAULT_WORDLIST_URL)?;
    settings.set_default("min_chars", DEFAULT_MIN_CHARS as i64)?;
    settings.set_default("quantity", DEFAULT_QUANTITY as i64)?;
    settings.set_default("complex", false)?;
    settings.set_default("complex_chars", DEFAULT_COMPLEX_CHARS)?;
    Ok(settings)
}

/// Reads the effective configuration: the defaults, with the user's
/// settings.toml merged over them when one exists.
pub fn read_config(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<config::Config> {
    let mut settings = default_settings()?;

    let settings_file = xdg_config_file_location(home, xdg_config_home)?;
    if settings_file.exists() {
        settings.merge(file_settings(&settings_file))?;
    }

    Ok(settings)
}

/// Writes a settings.toml containing the built-in defaults, creating parent
/// directories as needed. Refuses to overwrite an existing file.
pub fn write_default_settings(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::GenericDyn(format!(
            "settings file already exists at {}",
            path.display()
        )));
    }

    let mut table = toml::value::Table::new();
    table.insert(
        "wordlist_url".to_owned(),
        toml::Value::from(DEFAULT_WORDLIST_URL),
    );
    table.insert(
        "min_chars".to_owned(),
        toml::Value::from(DEFAULT_MIN_CHARS as i64),
    );
    table.insert(
        "quantity".to_owned(),
        toml::Value::from(DEFAULT_QUANTITY as i64),
    );
    table.insert("complex".to_owned(), toml::Value::from(false));
    table.insert(
        "complex_chars".to_owned(),
        toml::Value::from(DEFAULT_COMPLEX_CHARS),
    );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(&table)?)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
