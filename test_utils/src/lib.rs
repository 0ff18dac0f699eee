use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use csv::Reader;

use crypto_mention_counter::{count_mentions_in_text, CoinSymbolList};

pub mod constants;
pub use constants::{TEST_COIN_SYMBOLS_CSV_PATH, TEST_COMMENT_CORPUS_PATH, TEST_FILES_DIRECTORY};

/// Utility to load a coin symbol list from a CSV file for testing and benchmarking.
pub fn load_coin_symbols_from_file(file_path: &str) -> Result<CoinSymbolList, Box<dyn Error>> {
    let mut coin_symbol_list = CoinSymbolList::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 3 {
            let symbol = record.get(0).unwrap().trim().to_uppercase();
            let coin_name = record
                .get(1)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| name.to_string());
            let bare_match = record.get(2).unwrap().trim() == "true";
            coin_symbol_list.push((symbol, coin_name, bare_match));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(coin_symbol_list)
}

/// Helper function to get the expected mention counts from a test file.
/// Expectations are written one per line as `EXPECTED: SYMBOL=COUNT`.
pub fn get_expected_frequencies(file_path: &Path) -> HashMap<String, usize> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:").map(|entry| {
                let (symbol, count) = entry
                    .split_once('=')
                    .expect("EXPECTED lines use the form 'EXPECTED: SYMBOL=COUNT'");
                (
                    symbol.trim().to_string(),
                    count
                        .trim()
                        .parse::<usize>()
                        .expect("EXPECTED count is not a number"),
                )
            })
        })
        .collect()
}

/// Strips annotation lines (`EXPECTED:`, `COMMENT:`) so they never reach the
/// matcher.
pub fn filter_annotation_lines(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Helper function to run the mention-count test for a single annotated file.
pub fn run_count_test_for_file(test_file_path: &str) {
    // Load symbols from the shared test CSV file
    let coin_symbol_list = load_coin_symbols_from_file(TEST_COIN_SYMBOLS_CSV_PATH)
        .expect("Failed to load coin symbols from CSV");

    // Read the content of the text file
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");
    let filtered_text = filter_annotation_lines(&raw_text);

    let results = count_mentions_in_text(&filtered_text, &coin_symbol_list)
        .expect("Failed to count mentions");

    let expected_frequencies = get_expected_frequencies(Path::new(test_file_path));

    assert_eq!(
        results.len(),
        expected_frequencies.len(),
        "{} - Expected: {:?}, but got: {:?}",
        test_file_path,
        expected_frequencies,
        results
    );

    for (symbol, expected_count) in &expected_frequencies {
        assert_eq!(
            results.get(symbol),
            Some(expected_count),
            "{} - Expected {} mention(s) of {:?}, but got: {:?}",
            test_file_path,
            expected_count,
            symbol,
            results.get(symbol)
        );
    }
}
