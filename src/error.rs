//! Error type shared by every part of the engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The word-list source could not be read.
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a puzzle needs 7 letters, got {consonants} consonants + {vowels} vowels")]
    LetterSplit { consonants: usize, vowels: usize },

    #[error("length mismatch: guess is {guess}, secret is {secret}")]
    LengthMismatch { guess: usize, secret: usize },

    #[error("letter '{0}' appears more than once in the alphabet")]
    DuplicateLetter(char),

    #[error("alphabet has {0} letters, at most 32 fit in a letter mask")]
    TooManyLetters(usize),
}
