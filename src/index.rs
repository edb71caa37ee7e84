//! Bitmask index over the dictionary.
//!
//! Each usable word becomes a [`WordEntry`] carrying its letter mask and the
//! metadata the puzzle search reads per word. Entries are then bucketed by
//! every consonant they contain, so a search centered on a consonant only
//! scans words that can possibly contain it.

use log::{debug, info};

use crate::alphabet::{Alphabet, LetterMask};
use crate::MIN_WORD_LENGTH;

/// A dictionary word with its precomputed mask and scoring data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub mask: LetterMask,
    pub length: usize,
    pub first_letter: char,
    pub second_letter: char,
    pub base_score: u32,
}

impl WordEntry {
    /// Index a single word. `None` if it is too short or uses a character
    /// outside `alphabet`.
    pub fn new(word: &str, alphabet: &Alphabet) -> Option<Self> {
        let length = word.chars().count();
        if length < MIN_WORD_LENGTH {
            return None;
        }
        let mask = alphabet.mask_of(word)?;
        let mut chars = word.chars();
        let first_letter = chars.next()?;
        let second_letter = chars.next()?;
        Some(Self {
            word: word.to_owned(),
            mask,
            length,
            first_letter,
            second_letter,
            base_score: base_score(length),
        })
    }
}

/// One point for four-letter words, one per letter beyond three otherwise.
pub fn base_score(length: usize) -> u32 {
    length.saturating_sub(3).max(1) as u32
}

/// Indexed dictionary. Read-only once built.
#[derive(Debug, Clone)]
pub struct WordIndex {
    alphabet: Alphabet,
    entries: Vec<WordEntry>,
    /// Entry positions per consonant, parallel to `alphabet.consonants()`.
    buckets: Vec<Vec<u32>>,
    skipped: usize,
}

impl WordIndex {
    pub fn build<S: AsRef<str>>(words: &[S], alphabet: Alphabet) -> Self {
        let consonant_bits: Vec<LetterMask> = alphabet
            .consonants()
            .iter()
            .filter_map(|&c| alphabet.bit(c))
            .collect();
        let mut buckets = vec![Vec::new(); consonant_bits.len()];
        let mut entries = Vec::new();
        let mut skipped = 0;

        for word in words {
            let word = word.as_ref();
            if word.chars().count() < MIN_WORD_LENGTH {
                continue;
            }
            let Some(entry) = WordEntry::new(word, &alphabet) else {
                debug!("skipping '{}': letters outside the alphabet", word);
                skipped += 1;
                continue;
            };
            let position = entries.len() as u32;
            for (bucket, &bit) in buckets.iter_mut().zip(&consonant_bits) {
                if entry.mask & bit != 0 {
                    bucket.push(position);
                }
            }
            entries.push(entry);
        }

        info!(
            "indexed {} words ({} skipped for foreign letters)",
            entries.len(),
            skipped
        );
        Self {
            alphabet,
            entries,
            buckets,
            skipped,
        }
    }

    /// Alphabet the masks were built against.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Every indexed word, in dictionary order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Long-enough words dropped because they use letters outside the alphabet.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Words containing `consonant`, in dictionary order. Empty for letters
    /// that are not consonants of the alphabet.
    pub fn bucket(&self, consonant: char) -> impl Iterator<Item = &WordEntry> + '_ {
        let slots: &[u32] = match self.consonant_slot(consonant) {
            Some(i) => &self.buckets[i],
            None => &[],
        };
        slots.iter().map(move |&i| &self.entries[i as usize])
    }

    /// Number of words containing `consonant`.
    pub fn bucket_len(&self, consonant: char) -> usize {
        self.consonant_slot(consonant)
            .map_or(0, |i| self.buckets[i].len())
    }

    fn consonant_slot(&self, consonant: char) -> Option<usize> {
        self.alphabet.consonants().iter().position(|&c| c == consonant)
    }
}
