use crate::models::{CountMode, MentionCounterConfig};

pub const DEFAULT_MENTION_COUNTER_CONFIG: &MentionCounterConfig = &MentionCounterConfig {
    count_mode: CountMode::Occurrence,
    exclude_bots: true,
    strip_quotes_and_code: true,
};
