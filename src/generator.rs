pub use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::dice::{DiceRoller, RandRoller};
use crate::wordlist::WordList;

/// Lowest minimum length a request may ask for.
pub const MIN_CHARS_FLOOR: usize = 12;
/// Minimum passphrase length used when the caller doesn't pick one.
pub const DEFAULT_MIN_CHARS: usize = 19;
/// Number of passphrases generated when the caller doesn't pick one.
pub const DEFAULT_QUANTITY: usize = 1;
/// Characters that replace the space delimiters in complex mode.
pub const DEFAULT_COMPLEX_CHARS: &str = "0123456789`~!@#$%^&*()-_=+[]{}\\|;:,.<>/?";

/// The parameter set for one batch of passphrases, validated once at
/// construction so that no dice are rolled for a bad request.
pub struct GenerationRequest {
    min_chars: usize,
    quantity: usize,
    complex: bool,
    complex_chars: Vec<char>,
}

impl GenerationRequest {
    pub fn new(
        min_chars: usize,
        quantity: usize,
        complex: bool,
        complex_chars: &str,
    ) -> Result<Self> {
        if min_chars < MIN_CHARS_FLOOR {
            return Err(Error::InvalidConfiguration(format!(
                "minimum length {min_chars} is below the floor of {MIN_CHARS_FLOOR} characters"
            )));
        }
        if quantity < 1 {
            return Err(Error::InvalidConfiguration(
                "at least one passphrase must be requested".to_owned(),
            ));
        }
        let complex_chars: Vec<char> = complex_chars.chars().collect();
        if complex && complex_chars.is_empty() {
            return Err(Error::InvalidConfiguration(
                "complex mode needs a non-empty replacement character set".to_owned(),
            ));
        }
        Ok(Self {
            min_chars,
            quantity,
            complex,
            complex_chars,
        })
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn complex(&self) -> bool {
        self.complex
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            quantity: DEFAULT_QUANTITY,
            complex: false,
            complex_chars: DEFAULT_COMPLEX_CHARS.chars().collect(),
        }
    }
}

/// Builds one passphrase: rolls dice, appends the looked-up word and a space
/// delimiter, and stops as soon as the accumulated length minus the trailing
/// delimiter reaches `min_chars`. At least one word is always appended, even
/// for a minimum of zero.
///
/// A rolled code without a wordlist entry fails the passphrase; no empty
/// token is ever substituted for a missing word.
pub fn build_passphrase(
    min_chars: usize,
    wordlist: &WordList,
    roller: &mut dyn DiceRoller,
) -> Result<String> {
    let mut words: Vec<String> = Vec::new();
    // Counts one delimiter after every word; the termination check discounts
    // the trailing one that join never emits.
    let mut len = 0;
    loop {
        let code = roller.roll();
        let word = wordlist.lookup(&code)?;
        len += word.chars().count() + 1;
        words.push(word.to_owned());
        if len - 1 >= min_chars {
            break;
        }
    }
    Ok(words.join(" "))
}

/// The complex-mode pass over a finished passphrase, in order: title-case
/// every word, replace each space delimiter left to right with an
/// independent uniform draw from `complex_chars`, then overwrite one
/// character at a uniform position (never the first) with a uniform decimal
/// digit. The result contains no spaces and at least one digit.
pub fn apply_complexity<R: Rng>(
    passphrase: &str,
    complex_chars: &[char],
    rng: &mut R,
) -> Result<String> {
    if complex_chars.is_empty() {
        return Err(Error::Generic("empty complexity character set"));
    }

    let mut out = String::with_capacity(passphrase.len());
    for (i, word) in passphrase.split(' ').enumerate() {
        if i > 0 {
            let sep = complex_chars
                .choose(rng)
                .copied()
                .ok_or(Error::Generic("empty complexity character set"))?;
            out.push(sep);
        }
        out.push_str(&title_case(word));
    }

    let mut chars: Vec<char> = out.chars().collect();
    if chars.len() > 1 {
        let pos = rng.gen_range(1..chars.len());
        let digit: u8 = rng.gen_range(0..=9);
        chars[pos] = char::from(b'0' + digit);
    }
    Ok(chars.into_iter().collect())
}

/// ASCII title-casing: first letter upper, the rest lower, independent of
/// any locale state.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}

/// Generates exactly `request.quantity()` mutually independent passphrases.
/// The whole batch fails on the first error; no partial output is returned.
pub fn generate_passphrases(
    request: &GenerationRequest,
    wordlist: &WordList,
) -> Result<Vec<String>> {
    let mut roller = RandRoller::new();
    let mut rng = rand::thread_rng();
    generate_with(request, wordlist, &mut roller, &mut rng)
}

/// The quantity loop behind [`generate_passphrases`], with the dice and the
/// complexity RNG supplied by the caller.
pub fn generate_with<R: Rng>(
    request: &GenerationRequest,
    wordlist: &WordList,
    roller: &mut dyn DiceRoller,
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut passphrases = Vec::with_capacity(request.quantity);
    for _ in 0..request.quantity {
        let mut passphrase = build_passphrase(request.min_chars, wordlist, roller)?;
        if request.complex {
            passphrase = apply_complexity(&passphrase, &request.complex_chars, rng)?;
        }
        passphrases.push(passphrase);
    }
    Ok(passphrases)
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator_tests;
