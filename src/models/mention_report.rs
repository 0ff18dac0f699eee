use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ResultRecord;
use crate::types::{TickerSymbol, TickerSymbolFrequency};

/// The result object for one run, shaped for the public dashboard: the
/// symbol-to-count mapping plus the ranked record list, with thread
/// provenance and the generation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionReport {
    pub thread_title: String,
    pub thread_url: String,
    pub generated_at_utc: String,
    pub results: BTreeMap<TickerSymbol, TickerSymbolFrequency>,
    pub results_list: Vec<ResultRecord>,
}

impl MentionReport {
    pub fn new(
        thread_title: &str,
        thread_url: &str,
        generated_at: DateTime<Utc>,
        results: BTreeMap<TickerSymbol, TickerSymbolFrequency>,
        results_list: Vec<ResultRecord>,
    ) -> Self {
        Self {
            thread_title: thread_title.to_string(),
            thread_url: thread_url.to_string(),
            generated_at_utc: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            results,
            results_list,
        }
    }
}
