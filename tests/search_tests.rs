use std::collections::BTreeMap;

use wordgame::{find_valid_puzzles, Alphabet, Error, Puzzle, SearchParams, WordIndex};

/// Only "certain" has seven distinct letters, so every accepted 4+3 puzzle
/// uses {c, n, r, t} + {a, e, i}.
fn get_test_words() -> Vec<String> {
    [
        "certain", "train", "crate", "trace", "nectar", "cite", "rain", "tine", "act", "cart",
        "brain", "dance", "café", "retain",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn test_index() -> WordIndex {
    WordIndex::build(&get_test_words(), Alphabet::english())
}

fn assert_invariants(puzzle: &Puzzle, params: &SearchParams) {
    assert!(puzzle.pangram_count >= 1);
    assert!(params.min_score <= puzzle.total_points && puzzle.total_points <= params.max_score);
    assert_eq!(puzzle.col_totals.values().sum::<u32>(), puzzle.total_words);
    let row_sum: u32 = puzzle.row_counts.values().flat_map(|row| row.values()).sum();
    assert_eq!(row_sum, puzzle.total_words);
    assert_eq!(puzzle.words.len() as u32, puzzle.total_words);
    assert_eq!(puzzle.pangrams.len() as u32, puzzle.pangram_count);
    assert_eq!(puzzle.consonants.len() + 1, params.consonants);
    assert_eq!(puzzle.vowels.len(), params.vowels);
}

#[test]
fn test_exhaustive_search() {
    let index = test_index();
    let params = SearchParams::new(4, 3, 0, 1000);
    let puzzles = find_valid_puzzles(&index, &params).unwrap();

    let centers: Vec<char> = puzzles.iter().map(|p| p.center).collect();
    assert_eq!(centers, vec!['c', 'n', 'r', 't']);

    let summary: Vec<(u32, u32, u32)> = puzzles
        .iter()
        .map(|p| (p.total_words, p.total_points, p.pangram_count))
        .collect();
    assert_eq!(summary, vec![(6, 20, 1), (6, 21, 1), (8, 25, 1), (9, 26, 1)]);

    for puzzle in &puzzles {
        assert_invariants(puzzle, &params);
        assert_eq!(puzzle.vowels, vec!['a', 'e', 'i']);
        assert_eq!(puzzle.pangrams, vec!["certain".to_string()]);
    }
}

#[test]
fn test_puzzle_statistics() {
    let index = test_index();
    let puzzles = find_valid_puzzles(&index, &SearchParams::new(4, 3, 0, 1000).with_limit(1)).unwrap();
    assert_eq!(puzzles.len(), 1);
    let puzzle = &puzzles[0];

    assert_eq!(puzzle.center, 'c');
    assert_eq!(puzzle.consonants, vec!['n', 'r', 't']);
    assert_eq!(puzzle.letters(), vec!['c', 'a', 'e', 'i', 'n', 'r', 't']);
    assert_eq!(
        puzzle.words,
        vec!["certain", "crate", "trace", "nectar", "cite", "cart"]
    );

    let expected_rows: BTreeMap<char, BTreeMap<usize, u32>> = BTreeMap::from([
        ('c', BTreeMap::from([(4, 2), (5, 1), (7, 1)])),
        ('n', BTreeMap::from([(6, 1)])),
        ('t', BTreeMap::from([(5, 1)])),
    ]);
    assert_eq!(puzzle.row_counts, expected_rows);
    assert_eq!(puzzle.col_totals, BTreeMap::from([(4, 2), (5, 2), (6, 1), (7, 1)]));

    let expected_prefixes: BTreeMap<char, BTreeMap<char, u32>> = BTreeMap::from([
        ('c', BTreeMap::from([('a', 1), ('e', 1), ('i', 1), ('r', 1)])),
        ('n', BTreeMap::from([('e', 1)])),
        ('t', BTreeMap::from([('r', 1)])),
    ]);
    assert_eq!(puzzle.prefix_counts, expected_prefixes);
}

#[test]
fn test_score_range() {
    let index = test_index();

    let params = SearchParams::new(4, 3, 21, 25);
    let puzzles = find_valid_puzzles(&index, &params).unwrap();
    let centers: Vec<char> = puzzles.iter().map(|p| p.center).collect();
    assert_eq!(centers, vec!['n', 'r']);
    puzzles.iter().for_each(|p| assert_invariants(p, &params));

    let params = SearchParams::new(4, 3, 0, 20);
    let puzzles = find_valid_puzzles(&index, &params).unwrap();
    assert_eq!(puzzles.len(), 1);
    assert_eq!(puzzles[0].center, 'c');

    assert!(find_valid_puzzles(&index, &SearchParams::new(4, 3, 27, 1000)).unwrap().is_empty());
}

#[test]
fn test_limit_short_circuits() {
    let index = test_index();
    let base = SearchParams::new(4, 3, 0, 1000);

    let puzzles = find_valid_puzzles(&index, &base.clone().with_limit(3)).unwrap();
    let centers: Vec<char> = puzzles.iter().map(|p| p.center).collect();
    assert_eq!(centers, vec!['c', 'n', 'r']);

    assert!(find_valid_puzzles(&index, &base.clone().with_limit(0)).unwrap().is_empty());
    assert_eq!(find_valid_puzzles(&index, &base.with_limit(100)).unwrap().len(), 4);
}

#[test]
fn test_parallel_matches_sequential() {
    let index = test_index();
    for limit in [None, Some(1), Some(2), Some(3), Some(10)] {
        let mut params = SearchParams::new(4, 3, 0, 1000);
        params.limit = limit;
        let sequential = find_valid_puzzles(&index, &params).unwrap();
        let parallel = find_valid_puzzles(&index, &params.clone().parallel(true)).unwrap();
        assert_eq!(sequential, parallel, "limit {limit:?}");
    }
}

#[test]
fn test_search_is_deterministic() {
    let index = test_index();
    let params = SearchParams::new(4, 3, 0, 1000);
    let first = find_valid_puzzles(&index, &params).unwrap();
    let second = find_valid_puzzles(&index, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_letter_split_must_make_seven() {
    let index = test_index();
    for (consonants, vowels) in [(4, 2), (4, 4), (7, 1), (0, 6), (3, 3)] {
        let err = find_valid_puzzles(&index, &SearchParams::new(consonants, vowels, 0, 100)).unwrap_err();
        assert!(
            matches!(err, Error::LetterSplit { consonants: c, vowels: v } if c == consonants && v == vowels),
            "{consonants}+{vowels}"
        );
    }
}

#[test]
fn test_oversized_letter_class_yields_nothing() {
    let index = test_index();
    // English has five vowels.
    assert!(find_valid_puzzles(&index, &SearchParams::new(1, 6, 0, 1000)).unwrap().is_empty());

    let small = Alphabet::new("cnr", "aeit").unwrap();
    let index = WordIndex::build(&get_test_words(), small);
    assert!(find_valid_puzzles(&index, &SearchParams::new(4, 3, 0, 1000)).unwrap().is_empty());
}

#[test]
fn test_zero_consonants_yields_nothing() {
    let index = test_index();
    for parallel in [false, true] {
        let params = SearchParams::new(0, 7, 0, 1000).parallel(parallel);
        assert!(find_valid_puzzles(&index, &params).unwrap().is_empty());
    }
}

#[test]
fn test_no_pangram_no_puzzle() {
    let index = test_index();
    // "certain" needs four consonants, so a 5+2 split has no pangram.
    assert!(find_valid_puzzles(&index, &SearchParams::new(5, 2, 0, 1000)).unwrap().is_empty());
}

#[test]
fn test_empty_dictionary() {
    let index = WordIndex::build(&Vec::<String>::new(), Alphabet::danish());
    let puzzles = find_valid_puzzles(&index, &SearchParams::default()).unwrap();
    assert!(puzzles.is_empty());
}

#[test]
fn test_danish_pangram() {
    let words = ["København", "kræftsvulst", "æble", "skøjtebane", "bøje", "søbaner"];
    let index = WordIndex::build(&words, Alphabet::danish());
    let params = SearchParams::new(4, 3, 0, 1000);
    let puzzles = find_valid_puzzles(&index, &params).unwrap();
    // "søbaner" = {b, n, r, s} + {a, e, ø}; the rest use other letters.
    assert_eq!(puzzles.len(), 4);
    for puzzle in &puzzles {
        assert_invariants(puzzle, &params);
        assert_eq!(puzzle.words, vec!["søbaner".to_string()]);
        assert_eq!(puzzle.total_points, 4 + 7);
    }
}
