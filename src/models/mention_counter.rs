use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::models::{
    BotFilter, Comment, CountAggregator, Error, MentionCounterConfig, MentionReport,
    ResultProjector, ResultRecord, TextNormalizer, TickerMatcher,
};
use crate::types::{CoinName, CoinSymbolList, TickerSymbol, TickerSymbolFrequencyMap};

/// Runs the full mention-counting pipeline over one thread's comments: bot
/// filter, text normalizer, ticker matcher, count aggregator, then projection
/// into the result object. Comments are processed in input order on a single
/// thread.
pub struct MentionCounter<'a> {
    config: &'a MentionCounterConfig,
    bot_filter: BotFilter,
    text_normalizer: TextNormalizer,
    ticker_matcher: TickerMatcher,
    count_aggregator: CountAggregator,
    result_projector: ResultProjector,
}

impl<'a> MentionCounter<'a> {
    /// Derives the bare-match whitelist and the symbol-to-name lookup from
    /// the coin list. Fails before any comment is processed if a whitelisted
    /// symbol could never be emitted by the matcher.
    pub fn new(
        config: &'a MentionCounterConfig,
        coin_symbol_list: &CoinSymbolList,
    ) -> Result<Self, Error> {
        let mut whitelist: HashSet<TickerSymbol> = HashSet::new();
        let mut name_by_symbol: HashMap<TickerSymbol, CoinName> = HashMap::new();
        let mut seen: HashSet<TickerSymbol> = HashSet::new();

        for (symbol, coin_name, bare_match) in coin_symbol_list {
            let canonical = symbol.to_uppercase();

            if !seen.insert(canonical.clone()) {
                warn!("Skipping duplicate coin list entry: {}", canonical);
                continue;
            }

            if *bare_match {
                let matchable =
                    !canonical.is_empty() && canonical.chars().all(char::is_alphanumeric);
                if !matchable {
                    return Err(Error::ConfigError(format!(
                        "Whitelisted symbol '{}' can never match a word token (expected \
                         alphanumeric characters only)",
                        symbol
                    )));
                }
                whitelist.insert(canonical.clone());
            }

            if let Some(name) = coin_name {
                name_by_symbol.insert(canonical, name.clone());
            }
        }

        Ok(Self {
            config,
            bot_filter: BotFilter::default(),
            text_normalizer: TextNormalizer::new(config.strip_quotes_and_code),
            ticker_matcher: TickerMatcher::new(whitelist),
            count_aggregator: CountAggregator::new(config.count_mode),
            result_projector: ResultProjector::new(name_by_symbol),
        })
    }

    /// Replaces the default curated bot filter, e.g. for another community
    /// with its own automated accounts.
    pub fn with_bot_filter(mut self, bot_filter: BotFilter) -> Self {
        self.bot_filter = bot_filter;
        self
    }

    /// Normalizes one comment body and extracts its mention occurrences in
    /// positional order.
    pub fn process_text(&self, text: &str) -> Vec<TickerSymbol> {
        let clean_text = self.text_normalizer.normalize(text);
        self.ticker_matcher.match_tickers(&clean_text)
    }

    /// Counts a single text body as if it were one comment.
    pub fn count_text(&self, text: &str) -> TickerSymbolFrequencyMap {
        let mut table = TickerSymbolFrequencyMap::new();
        let occurrences = self.process_text(text);
        self.count_aggregator.accumulate(&mut table, &occurrences);
        table
    }

    /// Folds every comment into a fresh count table, in input order.
    pub fn process_comments(&self, comments: &[Comment]) -> TickerSymbolFrequencyMap {
        info!("Processing {} comments...", comments.len());

        let mut table = TickerSymbolFrequencyMap::new();
        for comment in comments {
            if self.config.exclude_bots && self.bot_filter.is_bot(comment) {
                debug!("Skipping bot comment {} by '{}'", comment.id, comment.author);
                continue;
            }

            let occurrences = self.process_text(&comment.body);
            self.count_aggregator.accumulate(&mut table, &occurrences);
        }

        info!("Counted mentions for {} distinct symbols", table.len());

        table
    }

    /// Projects a count table into the ranked record list.
    pub fn project(&self, table: &TickerSymbolFrequencyMap) -> Vec<ResultRecord> {
        self.result_projector.project(table)
    }

    /// Produces the full result object for one run.
    pub fn generate_report(
        &self,
        comments: &[Comment],
        thread_title: &str,
        thread_url: &str,
        generated_at: DateTime<Utc>,
    ) -> MentionReport {
        let table = self.process_comments(comments);

        MentionReport::new(
            thread_title,
            thread_url,
            generated_at,
            ResultProjector::to_count_map(&table),
            self.result_projector.project(&table),
        )
    }
}
