use serde::{Deserialize, Serialize};

use super::KeyValue;

/// One posted comment. Immutable once written except for the like counter.
/// Older documents may lack the likes field, hence the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub text: String,
    #[serde(rename = "periodId")]
    pub period_id: String,
    pub day: String,
    pub timestamp: String,
    #[serde(default)]
    pub likes: u64,
}

#[derive(Debug, Deserialize)]
pub struct NewCommentRequest {
    #[serde(rename = "roomId")]
    pub room_id: Option<KeyValue>,
    pub text: Option<String>,
    #[serde(rename = "periodId")]
    pub period_id: Option<KeyValue>,
    pub day: Option<KeyValue>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub id: i64,
    pub likes: u64,
}
