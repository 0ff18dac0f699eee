/// Account names that always identify automated accounts, compared case-insensitively.
pub const BOT_AUTHOR_EXACT_NAMES: &[&str] = &["automoderator"];

/// Substrings that flag an author name as an automated account, compared case-insensitively.
pub const BOT_AUTHOR_NAME_PATTERNS: &[&str] = &[
    "automoderator",
    "bot",
    "tip",
    "price",
    "moon",
    "giveaway",
    "airdrop",
];

/// Boilerplate phrases that flag a comment body as bot-generated, compared case-insensitively.
pub const BOT_BODY_PHRASES: &[&str] = &["i am a bot, and this action was performed automatically"];

/// Length bounds on the symbol run of a marker-form mention (`$BTC`). Real tickers run
/// 2-6 characters; the upper bound is deliberately loose.
pub const MIN_MARKER_SYMBOL_LENGTH: usize = 1;
pub const MAX_MARKER_SYMBOL_LENGTH: usize = 10;
