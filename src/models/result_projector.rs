use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::types::{CoinName, TickerSymbol, TickerSymbolFrequency, TickerSymbolFrequencyMap};

/// A single display row: canonical symbol, human-readable name, mention count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub symbol: TickerSymbol,
    pub name: CoinName,
    pub count: TickerSymbolFrequency,
}

/// Projects accumulated totals into display records with a deterministic order.
#[derive(Debug, Clone)]
pub struct ResultProjector {
    name_by_symbol: HashMap<TickerSymbol, CoinName>,
}

impl ResultProjector {
    pub fn new(name_by_symbol: HashMap<TickerSymbol, CoinName>) -> Self {
        Self { name_by_symbol }
    }

    /// Produces one record per symbol with a non-zero count.
    ///
    /// ### Sorting Order:
    /// - **Primary:** Sorts by count in descending order (higher count first).
    /// - **Secondary:** If two symbols have the same count, sorts by ticker
    ///   symbol in ascending lexicographical order for deterministic ordering.
    ///
    /// A symbol without a display name reuses the symbol itself as its name.
    ///
    /// ### Example:
    /// ```rust
    /// use std::collections::HashMap;
    /// use crypto_mention_counter::ResultProjector;
    ///
    /// let mut totals = HashMap::new();
    /// totals.insert("ETH".to_string(), 5);
    /// totals.insert("BTC".to_string(), 5);
    /// totals.insert("DOGE".to_string(), 3);
    ///
    /// let projector = ResultProjector::new(HashMap::from([
    ///     ("BTC".to_string(), "Bitcoin".to_string()),
    ///     ("ETH".to_string(), "Ethereum".to_string()),
    /// ]));
    ///
    /// let records = projector.project(&totals);
    /// let order: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
    /// assert_eq!(order, vec!["BTC", "ETH", "DOGE"]);
    /// assert_eq!(records[2].name, "DOGE"); // No display name; symbol reused
    /// ```
    pub fn project(&self, table: &TickerSymbolFrequencyMap) -> Vec<ResultRecord> {
        let mut records: Vec<ResultRecord> = table
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| ResultRecord {
                symbol: symbol.clone(),
                name: self
                    .name_by_symbol
                    .get(symbol)
                    .cloned()
                    .unwrap_or_else(|| symbol.clone()),
                count,
            })
            .collect();

        records.sort_by(|a, b| {
            b.count
                .cmp(&a.count) // Sort by count (descending)
                .then_with(|| a.symbol.cmp(&b.symbol)) // Secondary sort by symbol (ascending)
        });

        records
    }

    /// The same totals as a plain symbol-to-count mapping, for consumers that
    /// want counts without ranking. Ordered keys keep serialization
    /// byte-stable across runs.
    pub fn to_count_map(
        table: &TickerSymbolFrequencyMap,
    ) -> BTreeMap<TickerSymbol, TickerSymbolFrequency> {
        table
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol.clone(), count))
            .collect()
    }
}
