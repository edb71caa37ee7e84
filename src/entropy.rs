//! Entropy-based guess ranking.
//!
//! A good guess splits the remaining solutions into many small feedback
//! classes. Its entropy is the Shannon entropy (in bits) of that split,
//! which is the expected information gained by playing it.

use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::feedback::FeedbackPattern;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessRanking {
    pub word: String,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

/// Entropy of the feedback distribution `guess` produces over `solutions`.
/// Zero when there is at most one solution left.
pub fn guess_entropy(guess: &str, solutions: &[String], alphabet: &Alphabet) -> Result<f64> {
    let n = solutions.len() as f64;
    if solutions.len() <= 1 {
        return Ok(0.0);
    }

    let mut pattern_counts: HashMap<FeedbackPattern, u32> = HashMap::new();
    for secret in solutions {
        let pattern = FeedbackPattern::calculate(guess, secret, alphabet)?;
        *pattern_counts.entry(pattern).or_insert(0) += 1;
    }

    // Summing in a fixed order keeps equal splits at bit-identical entropy.
    let mut counts: Vec<u32> = pattern_counts.into_values().collect();
    counts.sort_unstable();
    let mut entropy = 0.0;
    for count in counts {
        let p = count as f64 / n;
        entropy -= p * p.log2();
    }
    Ok(entropy)
}

/// The `n` most informative guesses against `solutions`, best first.
///
/// Ties in entropy go to guesses that could themselves be the answer, then
/// to the earlier guess in `guesses`. Every guess must have the solutions'
/// length.
pub fn rank_guesses(
    guesses: &[String],
    solutions: &[String],
    alphabet: &Alphabet,
    n: usize,
) -> Result<Vec<GuessRanking>> {
    if solutions.is_empty() {
        return Ok(vec![]);
    }

    let mut rankings: Vec<GuessRanking> = guesses
        .par_iter()
        .map(|word| -> Result<GuessRanking> {
            let entropy = guess_entropy(word, solutions, alphabet)?;
            Ok(GuessRanking {
                word: word.clone(),
                entropy,
                expected_remaining: solutions.len() as f64 / 2_f64.powf(entropy),
                is_possible_answer: solutions.contains(word),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable sort keeps input order among full ties.
    rankings.sort_by(|a, b| match b.entropy.partial_cmp(&a.entropy) {
        Some(Ordering::Equal) | None => b.is_possible_answer.cmp(&a.is_possible_answer),
        Some(ord) => ord,
    });

    rankings.truncate(n);
    Ok(rankings)
}
