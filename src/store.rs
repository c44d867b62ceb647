use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::warn;

use crate::error::AppError;
use crate::models::{Classroom, Comment, LikeResponse, VoteBucket, VoteDocument, VoteType};

const CLASSROOMS_FILE: &str = "classrooms.json";
const VOTES_FILE: &str = "votes.json";
const COMMENTS_FILE: &str = "comments.json";

/// Flat-file JSON store. Every mutation is a whole-document
/// read-modify-write with no locking, so concurrent writers against the
/// same document can race and lose an update. That is an accepted
/// property of this design, not something the store guards against.
#[derive(Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Missing or corrupt documents degrade to the empty collection.
    async fn read_or_default<T>(&self, filename: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_dir.join(filename);
        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not read {}: {}", filename, e);
                return T::default();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("invalid JSON in {}: {}", filename, e);
                T::default()
            }
        }
    }

    async fn write_json<T: Serialize>(&self, filename: &str, value: &T) -> Result<(), AppError> {
        let path = self.data_dir.join(filename);
        let raw = serde_json::to_vec_pretty(value)?;
        fs::write(&path, raw).await?;
        Ok(())
    }

    pub async fn fetch_classrooms(&self) -> Vec<Classroom> {
        self.read_or_default(CLASSROOMS_FILE).await
    }

    pub async fn find_classroom(&self, id: i64) -> Option<Classroom> {
        self.fetch_classrooms().await.into_iter().find(|r| r.id == id)
    }

    pub async fn fetch_votes(&self) -> VoteDocument {
        self.read_or_default(VOTES_FILE).await
    }

    /// Lazily creates the room→day→period bucket at all zeros, then bumps
    /// the one counter for `vote_type`. Returns the post-increment bucket
    /// for that exact key.
    pub async fn record_vote(
        &self,
        room: &str,
        day: &str,
        period: &str,
        vote_type: VoteType,
    ) -> Result<VoteBucket, AppError> {
        let mut votes = self.fetch_votes().await;

        let bucket = votes
            .entry(room.to_string())
            .or_default()
            .entry(day.to_string())
            .or_default()
            .entry(period.to_string())
            .or_default();
        bucket.increment(vote_type);
        let updated = bucket.clone();

        self.write_json(VOTES_FILE, &votes).await?;
        Ok(updated)
    }

    pub async fn fetch_comments(&self) -> Vec<Comment> {
        self.read_or_default(COMMENTS_FILE).await
    }

    /// Appends a comment under a time-based id. Ids stay unique under
    /// rapid submission by bumping past the current maximum. `timestamp`
    /// defaults to now; a caller-supplied value is stored as-is without
    /// checking it against the period window.
    pub async fn append_comment(
        &self,
        room: String,
        text: String,
        period: String,
        day: String,
        timestamp: Option<String>,
    ) -> Result<Comment, AppError> {
        let mut comments = self.fetch_comments().await;

        let mut id = Utc::now().timestamp_millis();
        if let Some(max) = comments.iter().map(|c| c.id).max() {
            if id <= max {
                id = max + 1;
            }
        }

        let comment = Comment {
            id,
            room_id: room,
            text,
            period_id: period,
            day,
            timestamp: timestamp
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            likes: 0,
        };

        comments.push(comment.clone());
        self.write_json(COMMENTS_FILE, &comments).await?;
        Ok(comment)
    }

    /// Unconditional increment: repeat likes from the same caller keep
    /// counting.
    pub async fn like_comment(&self, id: i64) -> Result<LikeResponse, AppError> {
        let mut comments = self.fetch_comments().await;

        let comment = comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)?;
        comment.likes += 1;
        let likes = comment.likes;

        self.write_json(COMMENTS_FILE, &comments).await?;
        Ok(LikeResponse { id, likes })
    }
}
