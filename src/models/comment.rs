use serde::{Deserialize, Deserializer, Serialize};

use crate::types::CommentId;

/// A single comment from the source thread. Comments are the immutable input
/// unit of the pipeline; nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Author account name. Deleted accounts appear as `null` in corpus dumps
    /// and deserialize to an empty string.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub body: String,
}

impl Comment {
    pub fn new(id: &str, author: &str, body: &str) -> Self {
        Comment {
            id: id.to_string(),
            author: author.to_string(),
            body: body.to_string(),
        }
    }
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
