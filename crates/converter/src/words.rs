use std::iter::FusedIterator;

use crate::word::{WORD_BYTES, Word};

/// Iterator over the complete little-endian words of a byte slice.
///
/// Trailing bytes that do not fill a whole word are never yielded, see
/// [`Words::remainder`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Words<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Bytes past the last complete word
    pub fn remainder(&self) -> &'a [u8] {
        let whole = self.input.len() - self.input.len() % WORD_BYTES;
        &self.input[whole..]
    }

    /// Peek at the next complete word without consuming
    fn peek(&self) -> Option<[u8; WORD_BYTES]> {
        self.input
            .get(self.pos..self.pos + WORD_BYTES)?
            .try_into()
            .ok()
    }
}

impl Iterator for Words<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.peek()?;
        self.pos += WORD_BYTES;
        Some(Word::from_le_bytes(bytes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.input.len() - self.pos) / WORD_BYTES;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Words<'_> {}

impl FusedIterator for Words<'_> {}
