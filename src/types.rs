use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., `BTC`) in its canonical uppercase form, as an owned `String`.
pub type TickerSymbol = String;

/// Represents the display name of a coin as an owned `String`.
pub type CoinName = String;

/// A curated list of coins, where each entry includes:
/// - `TickerSymbol`: The coin's ticker symbol.
/// - `Option<CoinName>`: The coin's display name (optional if not available).
/// - `bool`: Whether the bare (marker-less) form of the symbol is unambiguous enough to match.
pub type CoinSymbolList = Vec<(TickerSymbol, Option<CoinName>, bool)>;

/// Represents the total number of mentions of a ticker symbol across the processed comments.
pub type TickerSymbolFrequency = usize;

/// Represents a map of ticker symbols to their mention counts.
/// The key is the `TickerSymbol`, and the value is the `TickerSymbolFrequency`.
pub type TickerSymbolFrequencyMap = HashMap<TickerSymbol, TickerSymbolFrequency>;

/// Represents the unique identifier of a comment as an owned `String`.
pub type CommentId = String;
