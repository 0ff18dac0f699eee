pub mod bot_filter;
pub use bot_filter::BotFilter;

pub mod comment;
pub use comment::Comment;

pub mod config;
pub use config::{CountMode, MentionCounterConfig};

pub mod count_aggregator;
pub use count_aggregator::CountAggregator;

pub mod error;
pub use error::Error;

pub mod mention_counter;
pub use mention_counter::MentionCounter;

pub mod mention_report;
pub use mention_report::MentionReport;

pub mod result_projector;
pub use result_projector::{ResultProjector, ResultRecord};

pub mod text_normalizer;
pub use text_normalizer::TextNormalizer;

pub mod ticker_matcher;
pub use ticker_matcher::{TickerMatcher, TICKER_MARKER};
