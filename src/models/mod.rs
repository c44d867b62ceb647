pub mod classroom;
pub mod comment;
pub mod vote;

pub use classroom::{Classroom, RoomStatus};
pub use comment::{Comment, LikeResponse, NewCommentRequest};
pub use vote::{NewVoteRequest, VoteBucket, VoteDocument, VoteType};

use serde::Deserialize;

/// The client sends ids and day/period keys as either JSON numbers or
/// strings; both normalize to the string form used for document keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Number(i64),
    Text(String),
}

impl KeyValue {
    /// String key for this value, or `None` for an empty string
    /// (treated the same as a missing field).
    pub fn into_key(self) -> Option<String> {
        match self {
            KeyValue::Number(n) => Some(n.to_string()),
            KeyValue::Text(s) if s.is_empty() => None,
            KeyValue::Text(s) => Some(s),
        }
    }
}
