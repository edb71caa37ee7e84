//! Greedy Wordle solver tree.
//!
//! The root plays a fixed opener. Every other node plays the guess with the
//! highest entropy over the solutions still consistent with the feedback
//! seen so far, and branches on each pattern that guess can produce.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::alphabet::Alphabet;
use crate::entropy::{guess_entropy, rank_guesses};
use crate::error::Result;
use crate::feedback::FeedbackPattern;

/// Deepest a tree grows unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Solutions that would produce `pattern` if `guess` were played.
pub fn filter_solutions(
    guess: &str,
    pattern: &FeedbackPattern,
    solutions: &[String],
    alphabet: &Alphabet,
) -> Result<Vec<String>> {
    let mut remaining = Vec::new();
    for secret in solutions {
        if FeedbackPattern::calculate(guess, secret, alphabet)? == *pattern {
            remaining.push(secret.clone());
        }
    }
    Ok(remaining)
}

/// One node of a solver tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverNode {
    /// No guess is made here: at most one solution is left, or the depth
    /// limit was reached.
    Leaf { solutions: Vec<String> },
    /// Play `guess`, then follow the branch matching the feedback. Branches
    /// appear in the order their patterns first occur among the solutions.
    Guess {
        guess: String,
        entropy: f64,
        branches: Vec<(FeedbackPattern, SolverNode)>,
    },
}

impl SolverNode {
    /// The word played at this node, if any.
    pub fn guess(&self) -> Option<&str> {
        match self {
            SolverNode::Guess { guess, .. } => Some(guess),
            SolverNode::Leaf { .. } => None,
        }
    }

    /// Child reached after seeing `pattern`.
    pub fn branch(&self, pattern: &FeedbackPattern) -> Option<&SolverNode> {
        match self {
            SolverNode::Guess { branches, .. } => {
                branches.iter().find(|(p, _)| p == pattern).map(|(_, child)| child)
            }
            SolverNode::Leaf { .. } => None,
        }
    }
}

/// Build the greedy tree for `solutions`, opening with `start` and picking
/// later guesses from `guesses`.
///
/// Ties in entropy go to words that are still possible answers. Every word
/// involved must have the solutions' length.
pub fn build_tree(
    start: &str,
    solutions: &[String],
    guesses: &[String],
    alphabet: &Alphabet,
    max_depth: usize,
) -> Result<SolverNode> {
    build_node(Some(start), solutions, guesses, alphabet, 0, max_depth)
}

fn build_node(
    opener: Option<&str>,
    solutions: &[String],
    guesses: &[String],
    alphabet: &Alphabet,
    depth: usize,
    max_depth: usize,
) -> Result<SolverNode> {
    if depth >= max_depth || solutions.len() <= 1 {
        debug!("depth {depth}: leaf with {} solutions", solutions.len());
        return Ok(SolverNode::Leaf {
            solutions: solutions.to_vec(),
        });
    }

    let guess = match opener {
        Some(word) => word.to_owned(),
        None => match rank_guesses(guesses, solutions, alphabet, 1)?.into_iter().next() {
            Some(best) => best.word,
            None => {
                return Ok(SolverNode::Leaf {
                    solutions: solutions.to_vec(),
                })
            }
        },
    };
    let entropy = guess_entropy(&guess, solutions, alphabet)?;

    let mut slots: HashMap<FeedbackPattern, usize> = HashMap::new();
    let mut partitions: Vec<(FeedbackPattern, Vec<String>)> = Vec::new();
    for secret in solutions {
        let pattern = FeedbackPattern::calculate(&guess, secret, alphabet)?;
        match slots.get(&pattern) {
            Some(&slot) => partitions[slot].1.push(secret.clone()),
            None => {
                slots.insert(pattern.clone(), partitions.len());
                partitions.push((pattern, vec![secret.clone()]));
            }
        }
    }
    debug!(
        "depth {depth}: '{guess}' over {} solutions, entropy {entropy:.4}, {} branches",
        solutions.len(),
        partitions.len()
    );

    let mut branches = Vec::with_capacity(partitions.len());
    for (pattern, subset) in partitions {
        let child = build_node(None, &subset, guesses, alphabet, depth + 1, max_depth)?;
        branches.push((pattern, child));
    }

    Ok(SolverNode::Guess {
        guess,
        entropy,
        branches,
    })
}

/// How well a tree solves its solution set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Guesses needed → number of solutions solved in that many.
    pub guess_counts: BTreeMap<usize, usize>,
    /// Solutions left ambiguous where the tree stopped.
    pub unsolved: Vec<String>,
}

impl TreeStats {
    pub fn solved(&self) -> usize {
        self.guess_counts.values().sum()
    }

    /// Mean guesses over the solved words.
    pub fn average_guesses(&self) -> Option<f64> {
        let solved = self.solved();
        if solved == 0 {
            return None;
        }
        let total: usize = self.guess_counts.iter().map(|(&g, &n)| g * n).sum();
        Some(total as f64 / solved as f64)
    }

    /// Most guesses any solved word needs.
    pub fn worst_case(&self) -> Option<usize> {
        self.guess_counts.keys().next_back().copied()
    }
}

/// Walk the tree and count the guesses each solution takes.
///
/// A solution found by an all-green pattern counts the guess that hit it. A
/// lone solution in a leaf costs one more guess to play it.
pub fn tree_stats(root: &SolverNode) -> TreeStats {
    fn walk(node: &SolverNode, played: usize, stats: &mut TreeStats) {
        match node {
            SolverNode::Leaf { solutions } => match solutions.as_slice() {
                [] => {}
                [_] => *stats.guess_counts.entry(played + 1).or_insert(0) += 1,
                many => stats.unsolved.extend(many.iter().cloned()),
            },
            SolverNode::Guess { branches, .. } => {
                for (pattern, child) in branches {
                    if pattern.is_win() {
                        *stats.guess_counts.entry(played + 1).or_insert(0) += 1;
                    } else {
                        walk(child, played + 1, stats);
                    }
                }
            }
        }
    }

    let mut stats = TreeStats::default();
    walk(root, 0, &mut stats);
    stats
}

/// The guesses the tree plays against `secret`, each with its feedback.
///
/// Ends at the winning guess, or early when the secret falls outside the
/// tree or in an ambiguous leaf.
pub fn solution_path(
    root: &SolverNode,
    secret: &str,
    alphabet: &Alphabet,
) -> Result<Vec<(String, FeedbackPattern)>> {
    let mut path = Vec::new();
    let mut node = root;
    loop {
        match node {
            SolverNode::Guess { guess, .. } => {
                let pattern = FeedbackPattern::calculate(guess, secret, alphabet)?;
                let next = if pattern.is_win() { None } else { node.branch(&pattern) };
                path.push((guess.clone(), pattern));
                match next {
                    Some(child) => node = child,
                    None => break,
                }
            }
            SolverNode::Leaf { solutions } => {
                if let [only] = solutions.as_slice() {
                    let pattern = FeedbackPattern::calculate(only, secret, alphabet)?;
                    path.push((only.clone(), pattern));
                }
                break;
            }
        }
    }
    Ok(path)
}
