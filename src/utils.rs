pub mod read_coin_symbol_list;
pub mod read_comment_corpus;

pub use read_coin_symbol_list::{read_coin_symbol_list_from_path, read_coin_symbol_list_from_string};
pub use read_comment_corpus::{read_comment_corpus_from_path, read_comment_corpus_from_reader};
