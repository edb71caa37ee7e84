//! Wordgame CLI
//!
//! Generates Spelling Bee puzzles, scores Wordle guesses, ranks openers and
//! builds solver trees from a word-list file.

use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use wordgame::cli::{parse_cli, Cli, Command};
use wordgame::{
    build_tree, find_valid_puzzles, load_word_list, rank_guesses, score_guess, solution_path,
    solution_words, tree_stats, Alphabet, SearchParams, WordIndex,
};

fn load_words(cli: &Cli) -> Result<Vec<String>> {
    let path = cli
        .word_list
        .as_deref()
        .context("this command needs a word list, pass --words <PATH>")?;
    load_word_list(path).context("loading dictionary")
}

fn main() -> Result<()> {
    let cli = parse_cli();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let alphabet = Alphabet::from(cli.alphabet);

    match &cli.command {
        Command::Puzzles(args) => {
            let params = SearchParams::from(args);
            let words = load_words(&cli)?;
            let index = WordIndex::build(&words, alphabet);

            let start = Instant::now();
            let puzzles = find_valid_puzzles(&index, &params)?;
            info!("generated {} puzzles in {:.2?}", puzzles.len(), start.elapsed());

            if puzzles.is_empty() {
                println!("No puzzles found.");
            }
            for puzzle in &puzzles {
                println!("{puzzle}");
                println!("Pangrams: {}", puzzle.pangrams.join(", "));
                println!();
            }
        }
        Command::Feedback { guess, secret } => {
            let pattern = score_guess(guess, secret, &alphabet)?;
            println!("{} {}", guess.to_uppercase(), pattern);
            println!("{}", pattern.to_emoji_string());
            if pattern.is_win() {
                println!("Solved!");
            }
        }
        Command::Rank { length, top } => {
            let words = load_words(&cli)?;
            let solutions = solution_words(&words, *length, &alphabet);
            println!("{} candidate words of length {}.", solutions.len(), length);

            let start = Instant::now();
            let ranked = rank_guesses(&solutions, &solutions, &alphabet, *top)?;
            info!("ranked {} guesses in {:.2?}", solutions.len(), start.elapsed());

            println!("{:>4} {:>8} {:>8} {:>12}", "#", "Word", "Entropy", "Exp. Remain");
            println!("{}", "-".repeat(36));
            for (i, ranking) in ranked.iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>8.3} {:>12.1}",
                    i + 1,
                    ranking.word.to_uppercase(),
                    ranking.entropy,
                    ranking.expected_remaining
                );
            }
        }
        Command::Tree(args) => {
            let words = load_words(&cli)?;
            let solutions = solution_words(&words, args.length, &alphabet);
            println!("{} candidate words of length {}.", solutions.len(), args.length);

            let start = Instant::now();
            let tree = build_tree(&args.start, &solutions, &solutions, &alphabet, args.max_depth)?;
            info!("built tree from '{}' in {:.2?}", args.start, start.elapsed());

            let stats = tree_stats(&tree);
            println!("Solved: {}/{}", stats.solved(), solutions.len());
            if let (Some(average), Some(worst)) = (stats.average_guesses(), stats.worst_case()) {
                println!("Average guesses: {average:.3}, worst case: {worst}");
            }
            for (guesses, count) in &stats.guess_counts {
                println!("{guesses:>3} guesses: {count}");
            }
            if !stats.unsolved.is_empty() {
                println!("Unsolved at depth {}: {}", args.max_depth, stats.unsolved.join(", "));
            }

            if let Some(secret) = &args.secret {
                println!();
                for (guess, pattern) in solution_path(&tree, secret, &alphabet)? {
                    println!("{} {} {}", guess.to_uppercase(), pattern, pattern.to_emoji_string());
                }
            }
        }
    }

    Ok(())
}
