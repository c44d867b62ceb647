use axum::Json;
use axum::extract::Path;
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::Local;
use tracing::info;

use crate::error::AppError;
use crate::models::*;
use crate::schedule;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/classrooms", get(list_classrooms))
        .route("/api/classrooms/{id}", get(get_classroom))
        .route("/api/votes", get(list_votes).post(record_vote))
        .route("/api/comments", get(list_comments).post(post_comment))
        .route("/api/comments/{id}/like", post(like_comment))
        .route("/api/period", get(current_period))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    tokio::fs::read_dir(state.store.data_dir()).await?;
    Ok(StatusCode::OK)
}

async fn list_classrooms(
    State(state): State<AppState>,
) -> Result<Json<Vec<Classroom>>, AppError> {
    Ok(Json(state.store.fetch_classrooms().await))
}

async fn get_classroom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Classroom>, AppError> {
    // A non-numeric id matches no room, so it falls out as 404.
    let id: i64 = id.parse().map_err(|_| AppError::NotFound)?;
    let room = state
        .store
        .find_classroom(id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(room))
}

async fn list_votes(State(state): State<AppState>) -> Result<Json<VoteDocument>, AppError> {
    Ok(Json(state.store.fetch_votes().await))
}

async fn record_vote(
    State(state): State<AppState>,
    Json(req): Json<NewVoteRequest>,
) -> Result<Json<VoteBucket>, AppError> {
    let (room, day, period, raw_type) = match (
        req.room_id.and_then(KeyValue::into_key),
        req.day.and_then(KeyValue::into_key),
        req.period_id.and_then(KeyValue::into_key),
        req.vote_type.filter(|t| !t.is_empty()),
    ) {
        (Some(room), Some(day), Some(period), Some(t)) => (room, day, period, t),
        _ => {
            return Err(AppError::BadRequest(
                "roomId, type, day, and periodId are required.".to_string(),
            ));
        }
    };

    let vote_type = VoteType::parse(&raw_type)
        .ok_or_else(|| AppError::BadRequest("Invalid vote type.".to_string()))?;

    let bucket = state
        .store
        .record_vote(&room, &day, &period, vote_type)
        .await?;
    Ok(Json(bucket))
}

async fn list_comments(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, AppError> {
    Ok(Json(state.store.fetch_comments().await))
}

async fn post_comment(
    State(state): State<AppState>,
    Json(req): Json<NewCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let (room, text, period, day) = match (
        req.room_id.and_then(KeyValue::into_key),
        req.text.filter(|t| !t.is_empty()),
        req.period_id.and_then(KeyValue::into_key),
        req.day.and_then(KeyValue::into_key),
    ) {
        (Some(room), Some(text), Some(period), Some(day)) => (room, text, period, day),
        _ => {
            return Err(AppError::BadRequest(
                "roomId, text, periodId, and day are required.".to_string(),
            ));
        }
    };

    let comment = state
        .store
        .append_comment(room, text, period, day, req.timestamp)
        .await?;
    info!(
        "comment {} recorded for room {} ({} {})",
        comment.id, comment.room_id, comment.day, comment.period_id
    );
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn like_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikeResponse>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid comment ID.".to_string()))?;
    let liked = state.store.like_comment(id).await?;
    Ok(Json(liked))
}

async fn current_period() -> Json<schedule::CurrentPeriod> {
    Json(schedule::current_period(Local::now()))
}
