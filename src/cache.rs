use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::wordlist::WordList;

/// The EFF large diceware wordlist, one `<code>\t<word>` entry per line.
pub const DEFAULT_WORDLIST_URL: &str =
    "https://www.eff.org/files/2016/07/18/eff_large_wordlist.txt";

/// Resolves where the wordlist is cached: `$XDG_CACHE_HOME/rollpass/wordlist.txt`
/// when the override is given, otherwise `~/.cache/rollpass/wordlist.txt`.
pub fn default_wordlist_path(
    home: &Option<PathBuf>,
    xdg_cache_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let cache_dir = match xdg_cache_home {
        Some(dir) => dir.clone(),
        None => match home {
            Some(home) => home.join(".cache"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };
    Ok(cache_dir.join("rollpass").join("wordlist.txt"))
}

/// Makes sure the wordlist exists locally, fetching it from `url` into
/// `path` on first use. An already cached file is never re-fetched.
pub fn ensure_word_list(url: &str, path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let body = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(|err| Error::WordListUnavailable(format!("{url}: {err}")))?;

    write_cache_file(path, &body)
}

/// Writes the fetched wordlist into the cache, creating parent directories.
/// Any failure names the cache location attempted, like a failed read does.
fn write_cache_file(path: &Path, body: &str) -> Result<()> {
    let unavailable = |err: std::io::Error| {
        Error::WordListUnavailable(format!("{}: {err}", path.display()))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(unavailable)?;
    }
    fs::write(path, body).map_err(unavailable)?;

    Ok(())
}

/// Reads and parses the cached wordlist file.
pub fn load_word_list(path: &Path) -> Result<WordList> {
    let raw = fs::read_to_string(path)
        .map_err(|err| Error::WordListUnavailable(format!("{}: {err}", path.display())))?;
    WordList::parse(&raw)
}

#[cfg(test)]
#[path = "tests/cache.rs"]
mod cache_tests;
