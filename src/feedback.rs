//! Feedback calculation for Wordle guesses.
//!
//! This module computes the green/yellow/black pattern for a guess against
//! a secret of the same length, over any [`Alphabet`].

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position
    Green,
    /// Letter in the secret, but not here
    Yellow,
    /// Letter not in the secret, or every copy already matched
    Black,
}

impl Feedback {
    /// `G`, `Y` or `B`.
    pub fn to_char(self) -> char {
        match self {
            Feedback::Green => 'G',
            Feedback::Yellow => 'Y',
            Feedback::Black => 'B',
        }
    }

    /// Colored square, as shared after a game.
    pub fn to_emoji(self) -> char {
        match self {
            Feedback::Green => '🟩',
            Feedback::Yellow => '🟨',
            Feedback::Black => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Green),
            'y' | '1' => Some(Feedback::Yellow),
            'b' | 'x' | '0' => Some(Feedback::Black),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one symbol per character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub Vec<Feedback>);

impl FeedbackPattern {
    /// Score `guess` against `secret`.
    ///
    /// Two passes with one counter per alphabet letter:
    /// - pass 1 marks greens and counts every unmatched secret letter;
    /// - pass 2 gives each remaining guess letter a yellow while unmatched
    ///   copies of it are left in the secret, black otherwise.
    ///
    /// Comparison is case-insensitive. Characters outside the alphabet never
    /// match anything. Lengths are counted in characters and must agree.
    pub fn calculate(guess: &str, secret: &str, alphabet: &Alphabet) -> Result<Self> {
        let guess: Vec<char> = guess.chars().map(fold_case).collect();
        let secret: Vec<char> = secret.chars().map(fold_case).collect();
        if guess.len() != secret.len() {
            return Err(Error::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }

        let mut feedback = vec![Feedback::Black; guess.len()];
        let mut remaining = vec![0u32; alphabet.len()];

        for (i, (&g, &s)) in guess.iter().zip(&secret).enumerate() {
            match alphabet.index_of(s) {
                Some(_) if g == s => feedback[i] = Feedback::Green,
                Some(idx) => remaining[idx] += 1,
                None => feedback[i] = Feedback::Black,
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if feedback[i] == Feedback::Green {
                continue;
            }
            feedback[i] = match alphabet.index_of(g) {
                Some(idx) if remaining[idx] > 0 => {
                    remaining[idx] -= 1;
                    Feedback::Yellow
                }
                _ => Feedback::Black,
            };
        }

        Ok(Self(feedback))
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-position feedback.
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.0
    }

    /// All green, i.e. the guess was the secret.
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Green)
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        s.chars().map(Feedback::from_char).collect::<Option<Vec<_>>>().map(Self)
    }

    /// The pattern as colored squares, e.g. 🟩🟨⬛⬛🟨.
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|fb| write!(f, "{}", fb.to_char()))
    }
}

/// Score a guess against a secret. See [`FeedbackPattern::calculate`].
pub fn score_guess(guess: &str, secret: &str, alphabet: &Alphabet) -> Result<FeedbackPattern> {
    FeedbackPattern::calculate(guess, secret, alphabet)
}
