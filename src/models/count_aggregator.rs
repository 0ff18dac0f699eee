use std::collections::HashSet;

use crate::models::CountMode;
use crate::types::{TickerSymbol, TickerSymbolFrequencyMap};

/// Folds one comment's matched occurrences into the running totals.
#[derive(Debug, Clone, Copy)]
pub struct CountAggregator {
    mode: CountMode,
}

impl CountAggregator {
    pub fn new(mode: CountMode) -> Self {
        Self { mode }
    }

    /// Accumulates the occurrences extracted from a single comment. Each call
    /// is one comment: under per-comment mode, duplicate symbols within the
    /// call increment their total at most once.
    pub fn accumulate(&self, table: &mut TickerSymbolFrequencyMap, occurrences: &[TickerSymbol]) {
        match self.mode {
            CountMode::Occurrence => {
                for symbol in occurrences {
                    *table.entry(symbol.clone()).or_insert(0) += 1;
                }
            }
            CountMode::PerComment => {
                let mut seen: HashSet<&TickerSymbol> = HashSet::new();
                for symbol in occurrences {
                    if seen.insert(symbol) {
                        *table.entry(symbol.clone()).or_insert(0) += 1;
                    }
                }
            }
        }
    }
}
