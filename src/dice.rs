use std::str::FromStr;

use rand::{rngs::ThreadRng, Rng};

use crate::error::{Error, Result};

/// Number of dice thrown for one wordlist key.
pub const DICE_PER_ROLL: usize = 5;

/// Five concatenated die faces, each '1'-'6', used as the wordlist key.
/// Only ever used for lookups, never shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RollCode(String);

impl RollCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RollCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != DICE_PER_ROLL || !s.chars().all(|c| ('1'..='6').contains(&c)) {
            return Err(Error::InvalidRollCode(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

/// Source of roll codes, so that generation code doesn't care whether the
/// dice are real randomness or a scripted sequence in a test.
pub trait DiceRoller {
    fn roll(&mut self) -> RollCode;
}

/// The production roller: five independent uniform draws in [1,6] per code.
pub struct RandRoller<R: Rng = ThreadRng> {
    rng: R,
}

impl RandRoller {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandRoller<R> {
    /// Wraps a specific RNG, mostly useful for seeded runs.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceRoller for RandRoller<R> {
    fn roll(&mut self) -> RollCode {
        let mut code = String::with_capacity(DICE_PER_ROLL);
        for _ in 0..DICE_PER_ROLL {
            let face: u8 = self.rng.gen_range(1..=6);
            code.push(char::from(b'0' + face));
        }
        RollCode(code)
    }
}

#[cfg(test)]
#[path = "tests/dice.rs"]
mod dice_tests;
