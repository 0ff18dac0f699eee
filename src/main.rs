use std::env;
use std::io;
use std::process;
use std::str::FromStr;

use chrono::Utc;
use log::{error, info};

use crypto_mention_counter::{
    read_coin_symbol_list_from_path, read_comment_corpus_from_path, read_comment_corpus_from_reader,
    CoinSymbolList, CountMode, Error, MentionCounter, MentionCounterConfig,
    DEFAULT_MENTION_COUNTER_CONFIG,
};

fn main() {
    // Initialize the logger
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    // Configuration problems must surface before any comment is read.
    let config = config_from_env()?;

    let coin_symbol_list = match env::var("COIN_SYMBOL_LIST") {
        Ok(path) => read_coin_symbol_list_from_path(&path)?,
        Err(_) => default_coin_symbol_list()?,
    };

    let mention_counter = MentionCounter::new(&config, &coin_symbol_list)?;

    // The corpus comes from a JSON Lines file argument, or stdin without one.
    let comments = match env::args().nth(1) {
        Some(path) => read_comment_corpus_from_path(&path)?,
        None => read_comment_corpus_from_reader(io::stdin().lock())?,
    };
    info!("Total comments: {}", comments.len());

    let thread_title = env::var("THREAD_TITLE").unwrap_or_default();
    let thread_url = env::var("THREAD_URL").unwrap_or_default();

    let report = mention_counter.generate_report(&comments, &thread_title, &thread_url, Utc::now());

    info!("Top 10 mentions ({} mode):", config.count_mode.as_str());
    for record in report.results_list.iter().take(10) {
        info!("- {}: {}", record.symbol, record.count);
    }

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::ParserError(format!("Failed to serialize report: {}", e)))?;
    println!("{}", json);

    Ok(())
}

/// Builds the run configuration from the defaults plus environment overrides:
/// `COUNT_MODE`, `EXCLUDE_BOTS`, and `STRIP_QUOTES_AND_CODE`.
fn config_from_env() -> Result<MentionCounterConfig, Error> {
    let mut config = *DEFAULT_MENTION_COUNTER_CONFIG;

    if let Ok(value) = env::var("COUNT_MODE") {
        config.count_mode = CountMode::from_str(&value)?;
    }
    if let Ok(value) = env::var("EXCLUDE_BOTS") {
        config.exclude_bots = parse_bool("EXCLUDE_BOTS", &value)?;
    }
    if let Ok(value) = env::var("STRIP_QUOTES_AND_CODE") {
        config.strip_quotes_and_code = parse_bool("STRIP_QUOTES_AND_CODE", &value)?;
    }

    Ok(config)
}

fn parse_bool(name: &str, value: &str) -> Result<bool, Error> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::ConfigError(format!(
            "Invalid boolean for {}: '{}' (expected 'true' or 'false')",
            name, other
        ))),
    }
}

#[cfg(feature = "embed-bytes")]
fn default_coin_symbol_list() -> Result<CoinSymbolList, Error> {
    crypto_mention_counter::load_embedded_coin_symbol_list()
}

#[cfg(not(feature = "embed-bytes"))]
fn default_coin_symbol_list() -> Result<CoinSymbolList, Error> {
    Err(Error::ConfigError(
        "COIN_SYMBOL_LIST is not set and no coin list is embedded in this build".to_string(),
    ))
}
