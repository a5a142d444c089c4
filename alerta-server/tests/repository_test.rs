//! Repository integration tests against an in-memory SurrealDB.
//!
//! Run: cargo test -p alerta-server --test repository_test

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

use alerta_server::db::repository::{
    AlertRepository, CommentRepository, LikeRepository, RepoError, UserProfileRepository,
};
use shared::models::{AlertCategory, AlertCreate};
use shared::util::now_millis;

async fn mem_db() -> Surreal<Db> {
    let db: Surreal<Db> = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    db
}

fn sample_alert(description: Option<&str>) -> AlertCreate {
    AlertCreate {
        category: AlertCategory::Infrastructure,
        description: description.map(str::to_string),
        image_url: None,
        latitude: -18.0147,
        longitude: -70.2536,
    }
}

#[tokio::test]
async fn active_filter_respects_expiry_boundary() {
    let db = mem_db().await;
    let repo = AlertRepository::new(db.clone());

    let expired = repo
        .create(sample_alert(Some("expired")), "user_profile:u1", None)
        .await
        .unwrap();
    let boundary = repo
        .create(sample_alert(Some("boundary")), "user_profile:u1", None)
        .await
        .unwrap();
    let future = repo
        .create(sample_alert(Some("future")), "user_profile:u1", None)
        .await
        .unwrap();

    let now = now_millis();
    for (record, expires_at) in [(&expired, now - 1), (&boundary, now), (&future, now + 1)] {
        db.query("UPDATE $id SET expires_at = $v")
            .bind(("id", record.id.clone().unwrap()))
            .bind(("v", expires_at))
            .await
            .unwrap();
    }

    let active = repo.find_active_at(now).await.unwrap();
    let descriptions: Vec<_> = active
        .iter()
        .filter_map(|a| a.description.as_deref())
        .collect();

    // expires_at must be strictly greater than now: the boundary record
    // counts as expired
    assert_eq!(descriptions, vec!["future"]);
}

#[tokio::test]
async fn resolved_alerts_are_not_active() {
    let db = mem_db().await;
    let repo = AlertRepository::new(db);

    let alert = repo
        .create(sample_alert(Some("pothole")), "user_profile:u1", None)
        .await
        .unwrap();
    assert_eq!(repo.find_active().await.unwrap().len(), 1);

    let id = alert.id.unwrap().to_string();
    let resolved = repo.mark_resolved(&id).await.unwrap();
    assert!(resolved.is_resolved);

    assert!(repo.find_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn like_is_unique_per_user_and_keeps_counter_in_sync() {
    let db = mem_db().await;
    let alerts = AlertRepository::new(db.clone());
    let likes = LikeRepository::new(db);

    let alert = alerts
        .create(sample_alert(Some("broken light")), "user_profile:u1", None)
        .await
        .unwrap();
    let id = alert.id.unwrap().to_string();

    likes.like(&id, "user_profile:u2").await.unwrap();
    assert!(likes.has_liked(&id, "user_profile:u2").await.unwrap());

    let err = likes.like(&id, "user_profile:u2").await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");

    // Counter bumped exactly once despite the second attempt
    let reloaded = alerts.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(reloaded.likes_count, 1);

    // A different user is an independent like
    likes.like(&id, "user_profile:u3").await.unwrap();
    let reloaded = alerts.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(reloaded.likes_count, 2);
}

#[tokio::test]
async fn unlike_removes_like_and_never_goes_negative() {
    let db = mem_db().await;
    let alerts = AlertRepository::new(db.clone());
    let likes = LikeRepository::new(db);

    let alert = alerts
        .create(sample_alert(None), "user_profile:u1", None)
        .await
        .unwrap();
    let id = alert.id.unwrap().to_string();

    likes.like(&id, "user_profile:u2").await.unwrap();
    assert!(likes.unlike(&id, "user_profile:u2").await.unwrap());
    assert!(!likes.has_liked(&id, "user_profile:u2").await.unwrap());

    // Unliking without a like is a no-op and must not drive the
    // counter below zero
    assert!(!likes.unlike(&id, "user_profile:u2").await.unwrap());
    assert!(!likes.unlike(&id, "user_profile:u9").await.unwrap());

    let reloaded = alerts.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(reloaded.likes_count, 0);
}

#[tokio::test]
async fn racing_unlikes_decrement_at_most_once() {
    let db = mem_db().await;
    let alerts = AlertRepository::new(db.clone());
    let likes = LikeRepository::new(db);

    let alert = alerts
        .create(sample_alert(None), "user_profile:u1", None)
        .await
        .unwrap();
    let id = alert.id.unwrap().to_string();

    likes.like(&id, "user_profile:u2").await.unwrap();
    likes.like(&id, "user_profile:u3").await.unwrap();

    // Both remove the same like concurrently. The decrement is tied to
    // the record the DELETE actually removed, so a single like can
    // only be subtracted once no matter how the two interleave.
    let (a, b) = tokio::join!(
        likes.unlike(&id, "user_profile:u2"),
        likes.unlike(&id, "user_profile:u2"),
    );
    let removed = usize::from(matches!(a, Ok(true))) + usize::from(matches!(b, Ok(true)));
    assert!(removed <= 1, "one like removed twice: {a:?} {b:?}");

    // The counter must equal the like records that actually remain
    let u2_liked = likes.has_liked(&id, "user_profile:u2").await.unwrap();
    assert!(likes.has_liked(&id, "user_profile:u3").await.unwrap());
    let reloaded = alerts.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(reloaded.likes_count, 1 + i64::from(u2_liked));
}

#[tokio::test]
async fn comments_bump_counter_and_list_oldest_first() {
    let db = mem_db().await;
    let alerts = AlertRepository::new(db.clone());
    let comments = CommentRepository::new(db);

    let alert = alerts
        .create(sample_alert(Some("noise at night")), "user_profile:u1", None)
        .await
        .unwrap();
    let id = alert.id.unwrap().to_string();

    comments
        .create(&id, "user_profile:u2", "Ana", None, "first".to_string())
        .await
        .unwrap();
    comments
        .create(&id, "user_profile:u3", "Luis", None, "second".to_string())
        .await
        .unwrap();

    let listed = comments.find_by_alert(&id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].created_at <= listed[1].created_at);
    assert_eq!(listed[0].text, "first");
    assert_eq!(listed[1].text, "second");

    let reloaded = alerts.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(reloaded.comments_count, 2);
}

#[tokio::test]
async fn active_descriptions_skip_empty_text() {
    let db = mem_db().await;
    let repo = AlertRepository::new(db);

    repo.create(sample_alert(Some("flooded street")), "user_profile:u1", None)
        .await
        .unwrap();
    repo.create(sample_alert(Some("   ")), "user_profile:u1", None)
        .await
        .unwrap();
    repo.create(sample_alert(None), "user_profile:u1", None)
        .await
        .unwrap();

    let descriptions = repo.active_descriptions().await.unwrap();
    assert_eq!(descriptions, vec!["flooded street".to_string()]);
}

#[tokio::test]
async fn profile_get_or_create_is_idempotent() {
    let db = mem_db().await;
    let repo = UserProfileRepository::new(db);

    let first = repo
        .get_or_create("ana@example.com", Some("Ana".to_string()), None)
        .await
        .unwrap();
    let second = repo
        .get_or_create("ana@example.com", Some("Other Name".to_string()), None)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    // The existing profile wins over the new attributes
    assert_eq!(second.display_name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn signup_profile_rejects_duplicate_email() {
    let db = mem_db().await;
    let repo = UserProfileRepository::new(db);

    repo.create("ana@example.com".to_string(), None, "hash".to_string())
        .await
        .unwrap();
    let err = repo
        .create("ana@example.com".to_string(), None, "hash2".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");
}
