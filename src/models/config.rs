use std::str::FromStr;

use crate::models::Error;

/// Selects how repeated mentions of the same symbol within a single comment
/// are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Every occurrence increments the symbol's total.
    Occurrence,
    /// Each distinct symbol increments its total at most once per comment.
    PerComment,
}

impl CountMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountMode::Occurrence => "occurrence",
            CountMode::PerComment => "per_comment",
        }
    }
}

impl FromStr for CountMode {
    type Err = Error;

    /// Accepts exactly `occurrence` or `per_comment`. Anything else is a
    /// configuration error; there is no fallback mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "occurrence" => Ok(CountMode::Occurrence),
            "per_comment" => Ok(CountMode::PerComment),
            other => Err(Error::ConfigError(format!(
                "Unrecognized count mode: '{}' (expected 'occurrence' or 'per_comment')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MentionCounterConfig {
    pub count_mode: CountMode,
    pub exclude_bots: bool,
    pub strip_quotes_and_code: bool,
}
