//! Spelling Bee puzzle search.
//!
//! For every center consonant, every choice of the remaining consonants and
//! every choice of vowels is scored against the center's bucket using two
//! mask tests per word: `mask & !puzzle == 0` (word fits the puzzle) and
//! `mask == puzzle` (pangram). Candidates are scored with plain counters and
//! abandoned as soon as they go over budget; only accepted letter sets are
//! rescanned into a full [`Puzzle`].

use log::{debug, info};
use rayon::prelude::*;

use crate::alphabet::LetterMask;
use crate::error::{Error, Result};
use crate::index::{WordEntry, WordIndex};
use crate::puzzle::Puzzle;
use crate::{PANGRAM_BONUS, PUZZLE_SIZE};

/// Search parameters. Defaults match the site's daily puzzle range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Consonants per puzzle, center included.
    pub consonants: usize,
    pub vowels: usize,
    pub min_score: u32,
    pub max_score: u32,
    /// Stop after this many puzzles. `None` searches exhaustively.
    pub limit: Option<usize>,
    /// Evaluate centers on the rayon pool. Output is unchanged.
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            consonants: 4,
            vowels: 3,
            min_score: 150,
            max_score: 250,
            limit: None,
            parallel: false,
        }
    }
}

impl SearchParams {
    /// Parameters for a letter split and score range, other fields default.
    pub fn new(consonants: usize, vowels: usize, min_score: u32, max_score: u32) -> Self {
        Self {
            consonants,
            vowels,
            min_score,
            max_score,
            ..Self::default()
        }
    }

    /// Stop after `limit` puzzles.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.consonants + self.vowels != PUZZLE_SIZE {
            return Err(Error::LetterSplit {
                consonants: self.consonants,
                vowels: self.vowels,
            });
        }
        Ok(())
    }
}

/// Running totals for one candidate letter set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    words: u32,
    points: u32,
    pangrams: u32,
}

impl Tally {
    /// Score `puzzle_mask` against a bucket, giving up once over `max_score`.
    fn score<'a>(
        bucket: impl Iterator<Item = &'a WordEntry>,
        puzzle_mask: LetterMask,
        max_score: u32,
    ) -> Self {
        let mut tally = Self::default();
        for entry in bucket {
            if entry.mask & !puzzle_mask != 0 {
                continue;
            }
            tally.words += 1;
            tally.points += entry.base_score;
            if entry.mask == puzzle_mask {
                tally.pangrams += 1;
                tally.points += PANGRAM_BONUS;
            }
            if tally.points > max_score {
                break;
            }
        }
        tally
    }

    fn accepts(&self, params: &SearchParams) -> bool {
        self.pangrams > 0 && (params.min_score..=params.max_score).contains(&self.points)
    }
}

/// Find puzzles whose total score lies in `[min_score, max_score]` and that
/// have at least one pangram.
///
/// Results come in a fixed order: centers in alphabet order, then consonant
/// combinations, then vowel combinations, both lexicographic over the
/// alphabet. The parallel mode returns exactly the same list.
pub fn find_valid_puzzles(index: &WordIndex, params: &SearchParams) -> Result<Vec<Puzzle>> {
    params.validate()?;
    let limit = params.limit.unwrap_or(usize::MAX);
    if limit == 0 {
        return Ok(Vec::new());
    }

    let centers: Vec<char> = index
        .alphabet()
        .consonants()
        .iter()
        .copied()
        .filter(|&c| index.bucket_len(c) > 0)
        .collect();
    info!(
        "searching {} centers for {}+{} puzzles scoring {}..={}",
        centers.len(),
        params.consonants,
        params.vowels,
        params.min_score,
        params.max_score
    );

    let puzzles = if params.parallel {
        let per_center: Vec<Vec<Puzzle>> = centers
            .par_iter()
            .map(|&center| search_center(index, center, params, limit))
            .collect();
        per_center.into_iter().flatten().take(limit).collect()
    } else {
        let mut puzzles = Vec::new();
        for &center in &centers {
            let remaining = limit - puzzles.len();
            puzzles.extend(search_center(index, center, params, remaining));
            if puzzles.len() >= limit {
                break;
            }
        }
        puzzles
    };

    info!("found {} puzzles", puzzles.len());
    Ok(puzzles)
}

/// All accepted puzzles for one center, up to `limit`, in combination order.
fn search_center(
    index: &WordIndex,
    center: char,
    params: &SearchParams,
    limit: usize,
) -> Vec<Puzzle> {
    let alphabet = index.alphabet();
    let center_mask = alphabet.mask_of_letters(&[center]);
    let others: Vec<char> = alphabet
        .consonants()
        .iter()
        .copied()
        .filter(|&c| c != center)
        .collect();
    // Without a consonant there is no center, so 0+7 finds nothing.
    let Some(extra_consonants) = params.consonants.checked_sub(1) else {
        return Vec::new();
    };
    let consonant_combos = combinations(&others, extra_consonants);
    let vowel_combos = combinations(alphabet.vowels(), params.vowels);

    let mut puzzles = Vec::new();
    for consonants in &consonant_combos {
        let consonant_mask = center_mask | alphabet.mask_of_letters(consonants);
        for vowels in &vowel_combos {
            let puzzle_mask = consonant_mask | alphabet.mask_of_letters(vowels);
            let tally = Tally::score(index.bucket(center), puzzle_mask, params.max_score);
            if !tally.accepts(params) {
                continue;
            }

            let puzzle = Puzzle::collect(
                center,
                consonants.clone(),
                vowels.clone(),
                puzzle_mask,
                index.bucket(center),
            );
            debug!(
                "accepted {:?}: {} words, {} points, pangrams {:?}",
                puzzle.letters(),
                puzzle.total_words,
                puzzle.total_points,
                puzzle.pangrams
            );
            puzzles.push(puzzle);
            if puzzles.len() >= limit {
                return puzzles;
            }
        }
    }
    puzzles
}

/// All `k`-element combinations of `items`, in lexicographic index order.
/// Empty when `k` exceeds the number of items.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn extend<T: Clone>(items: &[T], k: usize, start: usize, combo: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if combo.len() == k {
            out.push(combo.clone());
            return;
        }
        for i in start..items.len() {
            combo.push(items[i].clone());
            extend(items, k, i + 1, combo, out);
            combo.pop();
        }
    }

    let mut out = Vec::new();
    if k <= items.len() {
        extend(items, k, 0, &mut Vec::with_capacity(k), &mut out);
    }
    out
}
