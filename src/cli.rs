//! Command-line arguments for the `wordgame` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::alphabet::Alphabet;
use crate::search::SearchParams;
use crate::solver::DEFAULT_MAX_DEPTH;

/// Spelling Bee puzzle generator and Wordle helper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Semicolon-delimited word list (`lemma;form;class` per line)
    #[arg(short, long = "words", global = true)]
    pub word_list: Option<PathBuf>,

    /// Letters to play with
    #[arg(short, long, value_enum, global = true, default_value_t = AlphabetChoice::Danish)]
    pub alphabet: AlphabetChoice,

    /// Log at debug level (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Spelling Bee puzzles within a score range
    Puzzles(PuzzleArgs),

    /// Show Wordle feedback for a guess against a secret
    Feedback { guess: String, secret: String },

    /// Rank opening guesses by expected information
    Rank {
        /// Word length of the game
        #[arg(short = 'n', long, default_value_t = 5)]
        length: usize,

        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },

    /// Build the greedy solver tree and report how many guesses it needs
    Tree(TreeArgs),
}

/// Built-in alphabets selectable with `--alphabet`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetChoice {
    Danish,
    English,
}

impl From<AlphabetChoice> for Alphabet {
    fn from(choice: AlphabetChoice) -> Self {
        match choice {
            AlphabetChoice::Danish => Alphabet::danish(),
            AlphabetChoice::English => Alphabet::english(),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PuzzleArgs {
    /// Consonants per puzzle, center included
    #[arg(short, long, default_value_t = 4)]
    pub consonants: usize,

    #[arg(long, default_value_t = 3)]
    pub vowels: usize,

    #[arg(long, default_value_t = 150)]
    pub min_score: u32,

    #[arg(long, default_value_t = 250)]
    pub max_score: u32,

    /// Stop after this many puzzles
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Search centers in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TreeArgs {
    /// Opening guess
    #[arg(short, long, default_value = "sarte")]
    pub start: String,

    #[arg(short = 'n', long, default_value_t = 5)]
    pub length: usize,

    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Also show the guesses the tree plays against this word
    #[arg(long)]
    pub secret: Option<String>,
}

impl From<&PuzzleArgs> for SearchParams {
    fn from(args: &PuzzleArgs) -> Self {
        Self {
            consonants: args.consonants,
            vowels: args.vowels,
            min_score: args.min_score,
            max_score: args.max_score,
            limit: args.limit,
            parallel: args.parallel,
        }
    }
}

/// Parse the process arguments, exiting with usage on error.
#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
