use std::collections::HashSet;

use crate::constants::{MAX_MARKER_SYMBOL_LENGTH, MIN_MARKER_SYMBOL_LENGTH};
use crate::types::TickerSymbol;

/// The marker character that flags the following token as a ticker symbol.
pub const TICKER_MARKER: char = '$';

/// Scans cleaned comment text for ticker mentions.
///
/// Two forms are recognized: the marker form (`$BTC`), accepted without
/// consulting the whitelist, and the bare form (`BTC`), accepted only for
/// whitelisted symbols. Everything else, full coin names included, is
/// deliberately ignored.
#[derive(Debug, Clone)]
pub struct TickerMatcher {
    whitelist: HashSet<TickerSymbol>,
}

impl TickerMatcher {
    /// Whitelist entries are canonicalized to uppercase, so membership checks
    /// are case-insensitive.
    pub fn new(whitelist: HashSet<TickerSymbol>) -> Self {
        Self {
            whitelist: whitelist
                .into_iter()
                .map(|symbol| symbol.to_uppercase())
                .collect(),
        }
    }

    pub fn is_whitelisted(&self, symbol: &str) -> bool {
        self.whitelist.contains(&symbol.to_uppercase())
    }

    /// Extracts the canonical symbol of every mention in the text, one entry
    /// per occurrence, in positional order.
    pub fn match_tickers(&self, clean_text: &str) -> Vec<TickerSymbol> {
        let mut occurrences = Vec::new();
        let mut chars = clean_text.char_indices().peekable();

        // A marker is armed when `$` follows the start of text or a non-word
        // character. A `$` embedded after a word character is punctuation.
        let mut marker_armed = false;
        let mut previous_was_word = false;

        while let Some((start, first)) = chars.next() {
            if !is_word_char(first) {
                marker_armed = first == TICKER_MARKER && !previous_was_word;
                previous_was_word = false;
                continue;
            }

            // Consume the full word-character run beginning at `start`.
            let mut end = start + first.len_utf8();
            let mut char_count = 1;
            let mut all_alphanumeric = first.is_alphanumeric();
            while let Some(&(index, c)) = chars.peek() {
                if !is_word_char(c) {
                    break;
                }
                end = index + c.len_utf8();
                char_count += 1;
                all_alphanumeric &= c.is_alphanumeric();
                chars.next();
            }

            if let Some(symbol) =
                self.classify(&clean_text[start..end], char_count, all_alphanumeric, marker_armed)
            {
                occurrences.push(symbol);
            }

            marker_armed = false;
            previous_was_word = true;
        }

        occurrences
    }

    /// Applies the two-form mention policy to a single token.
    fn classify(
        &self,
        token: &str,
        char_count: usize,
        all_alphanumeric: bool,
        marker_prefixed: bool,
    ) -> Option<TickerSymbol> {
        if !all_alphanumeric {
            return None;
        }

        let canonical = token.to_uppercase();

        if marker_prefixed
            && (MIN_MARKER_SYMBOL_LENGTH..=MAX_MARKER_SYMBOL_LENGTH).contains(&char_count)
        {
            return Some(canonical);
        }

        // A marker token outside the length bounds still gets the bare check.
        if self.whitelist.contains(&canonical) {
            return Some(canonical);
        }

        None
    }
}

/// Word characters bound tokens: alphanumerics plus `_`, the conventional
/// word-boundary set. A run containing `_` is a single token that can never
/// be a symbol.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
