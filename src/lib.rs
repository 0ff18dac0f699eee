mod config;
mod constants;
pub mod models;
pub mod types;
mod utils;

pub use config::DEFAULT_MENTION_COUNTER_CONFIG;
pub use models::{
    BotFilter, Comment, CountAggregator, CountMode, Error, MentionCounter, MentionCounterConfig,
    MentionReport, ResultProjector, ResultRecord, TextNormalizer, TickerMatcher, TICKER_MARKER,
};
pub use types::{
    CoinName, CoinSymbolList, CommentId, TickerSymbol, TickerSymbolFrequency,
    TickerSymbolFrequencyMap,
};
pub use utils::{
    read_coin_symbol_list_from_path, read_coin_symbol_list_from_string,
    read_comment_corpus_from_path, read_comment_corpus_from_reader,
};

#[cfg(all(doctest, feature = "embed-bytes"))]
doc_comment::doctest!("../README.md");

#[cfg(feature = "embed-bytes")]
const COMPRESSED_COIN_SYMBOL_LIST_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/coin_symbol_list.csv.gz"));

/// Loads the curated coin symbol list bundled into the crate at build time.
#[cfg(feature = "embed-bytes")]
pub fn load_embedded_coin_symbol_list() -> Result<CoinSymbolList, Error> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(COMPRESSED_COIN_SYMBOL_LIST_BYTES);
    let mut csv = String::new();
    decoder.read_to_string(&mut csv)?;

    read_coin_symbol_list_from_string(&csv)
}

/// Counts ticker mentions in a single text body using the default
/// configuration (occurrence mode, quote/code stripping enabled).
///
/// ### Example:
/// ```rust
/// use crypto_mention_counter::count_mentions_in_text;
///
/// let coin_symbol_list = vec![
///     ("BTC".to_string(), Some("Bitcoin".to_string()), true),
///     ("GAS".to_string(), None, false),
/// ];
///
/// let frequencies =
///     count_mentions_in_text("btc to the moon, gas fees aside ($GAS!)", &coin_symbol_list)
///         .unwrap();
///
/// assert_eq!(frequencies.get("BTC"), Some(&1));
/// assert_eq!(frequencies.get("GAS"), Some(&1));
/// ```
pub fn count_mentions_in_text(
    text: &str,
    coin_symbol_list: &CoinSymbolList,
) -> Result<TickerSymbolFrequencyMap, Error> {
    count_mentions_in_text_with_custom_config(
        DEFAULT_MENTION_COUNTER_CONFIG,
        text,
        coin_symbol_list,
    )
}

pub fn count_mentions_in_text_with_custom_config(
    config: &MentionCounterConfig,
    text: &str,
    coin_symbol_list: &CoinSymbolList,
) -> Result<TickerSymbolFrequencyMap, Error> {
    let mention_counter = MentionCounter::new(config, coin_symbol_list)?;

    Ok(mention_counter.count_text(text))
}

/// Counts ticker mentions across a whole thread's comments using the default
/// configuration.
pub fn count_mentions_in_comments(
    comments: &[Comment],
    coin_symbol_list: &CoinSymbolList,
) -> Result<TickerSymbolFrequencyMap, Error> {
    count_mentions_in_comments_with_custom_config(
        DEFAULT_MENTION_COUNTER_CONFIG,
        comments,
        coin_symbol_list,
    )
}

pub fn count_mentions_in_comments_with_custom_config(
    config: &MentionCounterConfig,
    comments: &[Comment],
    coin_symbol_list: &CoinSymbolList,
) -> Result<TickerSymbolFrequencyMap, Error> {
    let mention_counter = MentionCounter::new(config, coin_symbol_list)?;

    Ok(mention_counter.process_comments(comments))
}
