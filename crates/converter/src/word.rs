use std::{fmt, str::FromStr};

use thiserror::Error;

/// Number of input bytes that make up one word
pub const WORD_BYTES: usize = 4;

/// Number of binary digits in a rendered word
pub const WORD_BITS: usize = 32;

/// A 32-bit word decoded from little-endian bytes.
///
/// Renders as exactly 32 binary digits, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word(pub u32);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseWordError {
    #[error("Expected 32 binary digits, found {0}")]
    InvalidLength(usize),

    #[error("Invalid binary digit `{1}` at position {0}")]
    InvalidDigit(usize, char),
}

impl Word {
    pub fn from_le_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        Word(u32::from_le_bytes(bytes))
    }

    pub fn to_le_bytes(self) -> [u8; WORD_BYTES] {
        self.0.to_le_bytes()
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Word {
    fn from(value: u32) -> Self {
        Word(value)
    }
}

impl From<Word> for u32 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    /// Parse a single output line back into a word
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();

        let len = line.chars().count();
        if len != WORD_BITS {
            return Err(ParseWordError::InvalidLength(len));
        }

        line.chars()
            .enumerate()
            .try_fold(0u32, |acc, (i, ch)| match ch {
                '0' => Ok(acc << 1),
                '1' => Ok((acc << 1) | 1),
                _ => Err(ParseWordError::InvalidDigit(i, ch)),
            })
            .map(Word)
    }
}
