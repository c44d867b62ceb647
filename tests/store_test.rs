use kyoshitsu_backend::error::AppError;
use kyoshitsu_backend::models::{VoteBucket, VoteType};
use kyoshitsu_backend::store::Store;
use tempfile::TempDir;

fn temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::new(dir.path());
    (dir, store)
}

#[tokio::test]
async fn test_record_vote_initializes_bucket_lazily() {
    let (_dir, store) = temp_store();

    let bucket = store
        .record_vote("7", "水", "3", VoteType::Garagara)
        .await
        .expect("Failed to record vote");

    // Fresh key: all six counters start at zero, then exactly one bumps.
    assert_eq!(
        bucket,
        VoteBucket {
            garagara: 1,
            ..VoteBucket::default()
        }
    );
}

#[tokio::test]
async fn test_repeated_votes_increment_only_target() {
    let (_dir, store) = temp_store();

    store
        .record_vote("7", "水", "3", VoteType::Garagara)
        .await
        .expect("Failed to record vote");
    let bucket = store
        .record_vote("7", "水", "3", VoteType::Garagara)
        .await
        .expect("Failed to record vote");

    assert_eq!(
        bucket,
        VoteBucket {
            garagara: 2,
            ..VoteBucket::default()
        }
    );

    let bucket = store
        .record_vote("7", "水", "3", VoteType::Konzatsu)
        .await
        .expect("Failed to record vote");
    assert_eq!(bucket.garagara, 2);
    assert_eq!(bucket.konzatsu, 1);
    assert_eq!(bucket.class, 0);
}

#[tokio::test]
async fn test_votes_keyed_by_room_day_period() {
    let (_dir, store) = temp_store();

    store
        .record_vote("7", "水", "3", VoteType::Free)
        .await
        .expect("Failed to record vote");
    store
        .record_vote("7", "月", "3", VoteType::Free)
        .await
        .expect("Failed to record vote");
    store
        .record_vote("8", "水", "昼休み", VoteType::Hutsu)
        .await
        .expect("Failed to record vote");

    let votes = store.fetch_votes().await;
    assert_eq!(votes["7"]["水"]["3"].free, 1);
    assert_eq!(votes["7"]["月"]["3"].free, 1);
    assert_eq!(votes["8"]["水"]["昼休み"].hutsu, 1);
    assert!(!votes["7"].contains_key("昼休み"));
}

#[tokio::test]
async fn test_comment_ids_unique_under_rapid_submission() {
    let (_dir, store) = temp_store();

    let mut ids = Vec::new();
    for i in 0..5 {
        let comment = store
            .append_comment(
                "7".to_string(),
                format!("comment {i}"),
                "3".to_string(),
                "水".to_string(),
                None,
            )
            .await
            .expect("Failed to append comment");
        ids.push(comment.id);
    }

    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "ids must stay strictly increasing");
    }
    assert_eq!(store.fetch_comments().await.len(), 5);
}

#[tokio::test]
async fn test_comment_timestamp_defaults_and_passthrough() {
    let (_dir, store) = temp_store();

    let defaulted = store
        .append_comment(
            "7".to_string(),
            "now".to_string(),
            "3".to_string(),
            "水".to_string(),
            None,
        )
        .await
        .expect("Failed to append comment");
    assert!(!defaulted.timestamp.is_empty());
    assert_eq!(defaulted.likes, 0);

    // A supplied timestamp is stored as-is, without any period check.
    let explicit = store
        .append_comment(
            "7".to_string(),
            "then".to_string(),
            "1".to_string(),
            "月".to_string(),
            Some("2026-04-01T09:15:00.000Z".to_string()),
        )
        .await
        .expect("Failed to append comment");
    assert_eq!(explicit.timestamp, "2026-04-01T09:15:00.000Z");
}

#[tokio::test]
async fn test_like_comment_increments_without_dedup() {
    let (_dir, store) = temp_store();

    let comment = store
        .append_comment(
            "7".to_string(),
            "empty".to_string(),
            "3".to_string(),
            "水".to_string(),
            None,
        )
        .await
        .expect("Failed to append comment");

    let first = store
        .like_comment(comment.id)
        .await
        .expect("Failed to like comment");
    assert_eq!(first.likes, 1);

    let second = store
        .like_comment(comment.id)
        .await
        .expect("Failed to like comment");
    assert_eq!(second.id, comment.id);
    assert_eq!(second.likes, 2);
}

#[tokio::test]
async fn test_like_unknown_comment_leaves_list_unmodified() {
    let (_dir, store) = temp_store();

    store
        .append_comment(
            "7".to_string(),
            "hello".to_string(),
            "3".to_string(),
            "水".to_string(),
            None,
        )
        .await
        .expect("Failed to append comment");

    let err = store
        .like_comment(999_999_999)
        .await
        .expect_err("liking a fabricated id must fail");
    assert!(matches!(err, AppError::NotFound));

    let comments = store.fetch_comments().await;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].likes, 0);
}

#[tokio::test]
async fn test_corrupt_documents_degrade_to_empty() {
    let (dir, store) = temp_store();

    std::fs::write(dir.path().join("comments.json"), "not json {{{")
        .expect("Failed to write file");
    std::fs::write(dir.path().join("votes.json"), "[1, 2, 3]").expect("Failed to write file");

    assert!(store.fetch_comments().await.is_empty());
    assert!(store.fetch_votes().await.is_empty());

    // Writes over a corrupt document start from the empty collection.
    let comment = store
        .append_comment(
            "7".to_string(),
            "fresh".to_string(),
            "3".to_string(),
            "水".to_string(),
            None,
        )
        .await
        .expect("Failed to append comment");

    let comments = store.fetch_comments().await;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, comment.id);
}

#[tokio::test]
async fn test_find_classroom() {
    let (dir, store) = temp_store();

    std::fs::write(
        dir.path().join("classrooms.json"),
        r#"[
            { "id": 1, "name": "101教室", "building": "1号館", "capacity": 60, "status": "空き", "tags": ["電源あり"] },
            { "id": 2, "name": "102教室", "building": "1号館", "status": "授業中", "tags": [] }
        ]"#,
    )
    .expect("Failed to write file");

    let room = store.find_classroom(2).await.expect("room 2 should exist");
    assert_eq!(room.name, "102教室");
    assert_eq!(room.capacity, None);

    assert!(store.find_classroom(42).await.is_none());
    assert_eq!(store.fetch_classrooms().await.len(), 2);
}
