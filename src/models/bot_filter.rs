use crate::constants::{BOT_AUTHOR_EXACT_NAMES, BOT_AUTHOR_NAME_PATTERNS, BOT_BODY_PHRASES};
use crate::models::Comment;

/// Decides whether a comment was written by a known automated account.
///
/// Identification is curated configuration data, not a detection algorithm:
/// exact account names, author-name substrings, and boilerplate body phrases,
/// all compared case-insensitively.
#[derive(Debug, Clone)]
pub struct BotFilter {
    exact_names: Vec<String>,
    name_patterns: Vec<String>,
    body_phrases: Vec<String>,
}

impl BotFilter {
    pub fn new(exact_names: &[&str], name_patterns: &[&str], body_phrases: &[&str]) -> Self {
        Self {
            exact_names: lowercased(exact_names),
            name_patterns: lowercased(name_patterns),
            body_phrases: lowercased(body_phrases),
        }
    }

    pub fn is_bot(&self, comment: &Comment) -> bool {
        // Deleted accounts have an empty author and are judged by body alone.
        let author = comment.author.to_lowercase();
        if !author.is_empty() {
            if self.exact_names.iter().any(|name| *name == author) {
                return true;
            }
            if self
                .name_patterns
                .iter()
                .any(|pattern| author.contains(pattern))
            {
                return true;
            }
        }

        let body = comment.body.to_lowercase();
        self.body_phrases.iter().any(|phrase| body.contains(phrase))
    }
}

impl Default for BotFilter {
    /// The curated list for the supported community.
    fn default() -> Self {
        BotFilter::new(
            BOT_AUTHOR_EXACT_NAMES,
            BOT_AUTHOR_NAME_PATTERNS,
            BOT_BODY_PHRASES,
        )
    }
}

fn lowercased(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}
