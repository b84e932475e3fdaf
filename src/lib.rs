/// This is the library part of rollpass, it implements diceware passphrase
/// generation based on the long word list from EFF
/// https://www.eff.org/sv/deeplinks/2016/07/new-wordlists-random-passphrases
pub mod generator;

/// Simulated dice rolls that drive word selection.
pub mod dice;
/// The immutable roll-code-to-word mapping and its parser.
pub mod wordlist;

/// Fetching and caching of the wordlist resource.
pub mod cache;
/// The settings file layer.
pub mod settings;

pub(crate) mod error;

#[cfg(test)]
#[path = "tests/test_helpers.rs"]
pub(crate) mod test_helpers;
