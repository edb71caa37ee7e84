//! Accepted puzzles and their statistics.
//!
//! A [`Puzzle`] is only ever built for a letter set that already passed the
//! search's acceptance test, by rescanning the center's bucket from scratch.

use std::collections::BTreeMap;
use std::fmt;

use crate::alphabet::LetterMask;
use crate::index::WordEntry;
use crate::PANGRAM_BONUS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub center: char,
    pub consonants: Vec<char>,
    pub vowels: Vec<char>,
    pub total_words: u32,
    pub total_points: u32,
    pub pangram_count: u32,
    /// First letter → word length → number of words.
    pub row_counts: BTreeMap<char, BTreeMap<usize, u32>>,
    /// Word length → number of words.
    pub col_totals: BTreeMap<usize, u32>,
    /// First letter → second letter → number of words.
    pub prefix_counts: BTreeMap<char, BTreeMap<char, u32>>,
    /// Every valid word, in dictionary order.
    pub words: Vec<String>,
    pub pangrams: Vec<String>,
}

impl Puzzle {
    pub(crate) fn collect<'a>(
        center: char,
        consonants: Vec<char>,
        vowels: Vec<char>,
        puzzle_mask: LetterMask,
        bucket: impl Iterator<Item = &'a WordEntry>,
    ) -> Self {
        let mut puzzle = Self {
            center,
            consonants,
            vowels,
            total_words: 0,
            total_points: 0,
            pangram_count: 0,
            row_counts: BTreeMap::new(),
            col_totals: BTreeMap::new(),
            prefix_counts: BTreeMap::new(),
            words: Vec::new(),
            pangrams: Vec::new(),
        };
        let letters = puzzle.letters();

        for entry in bucket {
            if entry.mask & !puzzle_mask != 0 {
                continue;
            }
            puzzle.total_words += 1;
            puzzle.total_points += entry.base_score;
            if entry.mask == puzzle_mask {
                puzzle.pangram_count += 1;
                puzzle.total_points += PANGRAM_BONUS;
                puzzle.pangrams.push(entry.word.clone());
            }
            *puzzle
                .row_counts
                .entry(entry.first_letter)
                .or_default()
                .entry(entry.length)
                .or_default() += 1;
            *puzzle.col_totals.entry(entry.length).or_default() += 1;
            if letters.contains(&entry.second_letter) {
                *puzzle
                    .prefix_counts
                    .entry(entry.first_letter)
                    .or_default()
                    .entry(entry.second_letter)
                    .or_default() += 1;
            }
            puzzle.words.push(entry.word.clone());
        }
        puzzle
    }

    /// The seven letters: center first, the rest sorted.
    pub fn letters(&self) -> Vec<char> {
        let mut others: Vec<char> = self.consonants.iter().chain(&self.vowels).copied().collect();
        others.sort_unstable();
        let mut letters = Vec::with_capacity(others.len() + 1);
        letters.push(self.center);
        letters.extend(others);
        letters
    }

    /// Two-letter prefix counts, one line per first letter that has any,
    /// e.g. `ba-3 be-1`.
    pub fn prefix_lines(&self) -> Vec<String> {
        let letters = self.letters();
        letters
            .iter()
            .filter_map(|first| {
                let seconds = self.prefix_counts.get(first)?;
                let parts: Vec<String> = letters
                    .iter()
                    .filter_map(|second| {
                        let count = seconds.get(second).filter(|&&n| n > 0)?;
                        Some(format!("{first}{second}-{count}"))
                    })
                    .collect();
                (!parts.is_empty()).then(|| parts.join(" "))
            })
            .collect()
    }

    /// `WORDS: n, POINTS: p, PANGRAMS: k`.
    pub fn summary(&self) -> String {
        format!(
            "WORDS: {}, POINTS: {}, PANGRAMS: {}",
            self.total_words, self.total_points, self.pangram_count
        )
    }

    /// Count grid: one row per starting letter, one column per word length,
    /// with `Σ` totals on both axes. Letters and lengths without words are
    /// left out.
    pub fn grid(&self) -> String {
        let lengths: Vec<usize> = self
            .col_totals
            .iter()
            .filter(|&(&len, &n)| len >= crate::MIN_WORD_LENGTH && n > 0)
            .map(|(&len, _)| len)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut header = vec![String::new()];
        header.extend(lengths.iter().map(usize::to_string));
        header.push("Σ".to_owned());
        rows.push(header);

        for letter in self.letters() {
            let Some(counts) = self.row_counts.get(&letter) else {
                continue;
            };
            let sum: u32 = lengths.iter().filter_map(|len| counts.get(len)).sum();
            if sum == 0 {
                continue;
            }
            let mut row = vec![letter.to_string()];
            row.extend(lengths.iter().map(|len| cell(counts.get(len).copied())));
            row.push(sum.to_string());
            rows.push(row);
        }

        let mut footer = vec!["Σ".to_owned()];
        footer.extend(lengths.iter().map(|len| cell(self.col_totals.get(len).copied())));
        footer.push(self.total_words.to_string());
        rows.push(footer);

        render_table(&rows)
    }
}

fn cell(count: Option<u32>) -> String {
    match count {
        Some(n) if n > 0 => n.to_string(),
        _ => "-".to_owned(),
    }
}

/// First column left-aligned, the rest right-aligned.
fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (text, &width))| {
                if col == 0 {
                    format!("{text:<width$}")
                } else {
                    format!("{text:>width$}")
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.prefix_lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        let letters: Vec<String> = self.letters().iter().map(char::to_string).collect();
        writeln!(f, "{}", letters.join(" "))?;
        writeln!(f, "{}", self.summary())?;
        write!(f, "{}", self.grid())
    }
}
