//! Letter universe for masks and feedback counters.
//!
//! Every letter gets a stable index: consonants first, in the order given,
//! then vowels. The index doubles as the letter's bit in a [`LetterMask`].

use crate::error::{Error, Result};

/// One bit per alphabet letter.
pub type LetterMask = u32;

/// Largest alphabet a [`LetterMask`] can describe.
pub const MAX_LETTERS: usize = LetterMask::BITS as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    num_consonants: usize,
}

impl Alphabet {
    /// Build an alphabet from its consonants and vowels.
    ///
    /// Letters are lowercased. Fails on duplicates or when the alphabet
    /// would not fit in a [`LetterMask`].
    pub fn new(consonants: &str, vowels: &str) -> Result<Self> {
        let mut letters: Vec<char> = Vec::new();
        for c in consonants.chars().chain(vowels.chars()).flat_map(char::to_lowercase) {
            if letters.contains(&c) {
                return Err(Error::DuplicateLetter(c));
            }
            letters.push(c);
        }
        if letters.len() > MAX_LETTERS {
            return Err(Error::TooManyLetters(letters.len()));
        }
        let num_consonants = consonants.chars().flat_map(char::to_lowercase).count();
        Ok(Self { letters, num_consonants })
    }

    /// Danish letters, split the way the puzzle generator has always split them.
    pub fn danish() -> Self {
        Self {
            letters: "bcdfghjklmnpqrstvwxzaeiouyæøå".chars().collect(),
            num_consonants: 20,
        }
    }

    /// The 26 Latin letters with `y` counted as a consonant.
    pub fn english() -> Self {
        Self {
            letters: "bcdfghjklmnpqrstvwxyzaeiou".chars().collect(),
            num_consonants: 21,
        }
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// All letters in canonical order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Center-eligible letters, in canonical order.
    pub fn consonants(&self) -> &[char] {
        &self.letters[..self.num_consonants]
    }

    /// Letters that can never be a center.
    pub fn vowels(&self) -> &[char] {
        &self.letters[self.num_consonants..]
    }

    /// Canonical index of `c`, if it belongs to the alphabet. Case-sensitive;
    /// callers normalize first.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == c)
    }

    #[inline]
    /// Single-bit mask for `c`.
    pub fn bit(&self, c: char) -> Option<LetterMask> {
        self.index_of(c).map(|i| 1 << i)
    }

    /// True for letters in the consonant half.
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants().contains(&c)
    }

    /// Mask of every distinct letter in `word`, or `None` if any character
    /// falls outside the alphabet.
    pub fn mask_of(&self, word: &str) -> Option<LetterMask> {
        word.chars()
            .try_fold(0, |mask, c| self.bit(c).map(|bit| mask | bit))
    }

    /// Combined mask of a set of letters. Letters outside the alphabet
    /// contribute nothing.
    pub fn mask_of_letters(&self, letters: &[char]) -> LetterMask {
        letters
            .iter()
            .filter_map(|&c| self.bit(c))
            .fold(0, |mask, bit| mask | bit)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::danish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for alphabet in [Alphabet::danish(), Alphabet::english()] {
            let consonants: String = alphabet.consonants().iter().collect();
            let vowels: String = alphabet.vowels().iter().collect();
            assert_eq!(Alphabet::new(&consonants, &vowels).unwrap(), alphabet);
        }
        assert_eq!(Alphabet::danish().len(), 29);
        assert_eq!(Alphabet::english().len(), 26);
    }

    #[test]
    fn consonants_come_first() {
        let alphabet = Alphabet::new("bc", "ae").unwrap();
        assert_eq!(alphabet.index_of('b'), Some(0));
        assert_eq!(alphabet.index_of('a'), Some(2));
        assert_eq!(alphabet.bit('e'), Some(0b1000));
        assert_eq!(alphabet.index_of('z'), None);
    }

    #[test]
    fn rejects_duplicates_and_overflow() {
        assert!(matches!(Alphabet::new("bcb", "a"), Err(Error::DuplicateLetter('b'))));
        assert!(matches!(Alphabet::new("B", "b"), Err(Error::DuplicateLetter('b'))));
        let many: String = ('\u{4e00}'..'\u{4e21}').collect();
        assert!(matches!(Alphabet::new(&many, ""), Err(Error::TooManyLetters(33))));
    }

    #[test]
    fn mask_ignores_multiplicity() {
        let alphabet = Alphabet::english();
        assert_eq!(alphabet.mask_of("aaa"), alphabet.mask_of("a"));
        assert_eq!(alphabet.mask_of("ab"), Some(alphabet.mask_of_letters(&['a', 'b'])));
        assert_eq!(alphabet.mask_of("a-b"), None);
    }
}
