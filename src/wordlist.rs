use std::collections::HashMap;
use std::str::FromStr;

use crate::dice::RollCode;
use crate::error::{Error, Result};

/// Number of entries in a complete diceware wordlist, one per possible
/// five-dice roll: 6^5.
pub const COMPLETE_LEN: usize = 7776;

/// Immutable mapping from roll code to word. Built once, then shared
/// read-only by every passphrase generated in an invocation.
pub struct WordList {
    words: HashMap<RollCode, String>,
}

impl WordList {
    /// Parses wordlist text with one `<code> <word>` entry per line.
    ///
    /// Each line is split on the first run of whitespace: the part before it
    /// must be a valid five-digit roll code, everything after it is the word.
    /// A word containing further spaces or punctuation is kept whole and
    /// treated as one dictionary unit. Blank lines are skipped.
    pub fn parse(input: &str) -> Result<Self> {
        let mut words = HashMap::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (key, word) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| Error::GenericDyn(format!("malformed wordlist line: {line}")))?;
            let word = word.trim_start();
            if word.is_empty() {
                return Err(Error::GenericDyn(format!(
                    "wordlist line without a word: {line}"
                )));
            }
            words.insert(RollCode::from_str(key)?, word.to_owned());
        }
        if words.is_empty() {
            return Err(Error::Generic("the word list is empty"));
        }
        Ok(Self { words })
    }

    /// Looks up the word for a rolled code. A code without an entry is an
    /// error; the caller must never substitute an empty token for it.
    pub fn lookup(&self, code: &RollCode) -> Result<&str> {
        self.words
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingWord(code.as_str().to_owned()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the list covers all 7776 possible roll codes. An incomplete
    /// list still loads; a rolled hole surfaces as an error at lookup time.
    pub fn is_complete(&self) -> bool {
        self.words.len() == COMPLETE_LEN
    }
}

#[cfg(test)]
#[path = "tests/wordlist.rs"]
mod wordlist_tests;
