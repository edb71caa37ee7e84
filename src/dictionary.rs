//! Word-list loading.
//!
//! The source is a full-form list with one `lemma;form;class` record per
//! line. Only the form (second field) is used.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::info;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

const FIELD_SEPARATOR: char = ';';
const REJECTED_CHARS: [char; 4] = ['\'', '-', ' ', '.'];

/// Extract the usable word forms from a word-list, in source order.
///
/// A record is kept when its second field, trimmed, is non-empty, already
/// lowercase and free of apostrophes, hyphens, spaces and periods. Records
/// without a second field are skipped. Duplicates are kept.
pub fn parse_word_list(data: &str) -> Vec<String> {
    data.lines()
        .filter_map(|line| line.split(FIELD_SEPARATOR).nth(1))
        .map(str::trim)
        .filter(|word| is_plain_word(word))
        .map(str::to_owned)
        .collect()
}

fn is_plain_word(word: &str) -> bool {
    !word.is_empty() && word.to_lowercase() == word && !word.contains(&REJECTED_CHARS[..])
}

/// Read and parse a word-list file.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&data);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Distinct words of exactly `length` letters, all from `alphabet`, in
/// first-appearance order. This is the answer pool for a Wordle round.
pub fn solution_words(words: &[String], length: usize, alphabet: &Alphabet) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut solutions = Vec::new();
    for word in words {
        if word.chars().count() != length || alphabet.mask_of(word).is_none() {
            continue;
        }
        if seen.insert(word) {
            solutions.push(word.clone());
        }
    }
    solutions
}
