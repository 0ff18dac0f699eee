/// Directory of annotated comment-body fixtures, relative to the crate root.
pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

/// Curated coin list fixture shared by the integration tests.
pub const TEST_COIN_SYMBOLS_CSV_PATH: &str = "tests/test_data_files/test_coin_symbols.csv";

/// Sample JSON Lines corpus shared by the loader tests.
pub const TEST_COMMENT_CORPUS_PATH: &str = "tests/test_data_files/comments_sample.jsonl";
