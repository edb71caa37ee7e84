//! # Wordgame
//!
//! The algorithmic core of a word-game site:
//!
//! - a bitmask-indexed dictionary search that generates Spelling Bee
//!   puzzles within a score range,
//! - Wordle feedback scoring over any alphabet of up to 32 letters,
//! - entropy-based ranking of Wordle guesses, and a greedy solver tree
//!   built on it.

pub mod alphabet;
pub mod cli;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod index;
pub mod puzzle;
pub mod search;
pub mod solver;

pub use alphabet::{Alphabet, LetterMask};
pub use dictionary::{load_word_list, parse_word_list, solution_words};
pub use entropy::{guess_entropy, rank_guesses, GuessRanking};
pub use error::{Error, Result};
pub use feedback::{score_guess, Feedback, FeedbackPattern};
pub use index::{WordEntry, WordIndex};
pub use puzzle::Puzzle;
pub use search::{find_valid_puzzles, SearchParams};
pub use solver::{build_tree, filter_solutions, solution_path, tree_stats, SolverNode, TreeStats};

/// Letters in every Spelling Bee puzzle
pub const PUZZLE_SIZE: usize = 7;

/// Shorter words never count towards a puzzle
pub const MIN_WORD_LENGTH: usize = 4;

/// Extra points for a pangram
pub const PANGRAM_BONUS: u32 = 7;
