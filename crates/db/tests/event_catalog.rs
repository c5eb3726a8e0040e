//! Integration tests for the event catalog repository.
//!
//! Exercises CRUD, name uniqueness, and the upcoming/past time-window
//! queries against a real database.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use labportal_db::models::event::{CreateEvent, UpdateEvent};
use labportal_db::repositories::EventRepo;

fn new_event(name: &str, start_offset_mins: i64) -> CreateEvent {
    let start_time = Utc::now() + Duration::minutes(start_offset_mins);
    CreateEvent {
        name: name.to_string(),
        description: None,
        start_time,
        end_time: start_time + Duration::minutes(120),
        capacity: None,
        status: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_by_id(pool: PgPool) {
    let created = EventRepo::create(&pool, &new_event("Kickoff", 60))
        .await
        .unwrap();
    assert_eq!(created.name, "Kickoff");
    assert_eq!(created.status, "active");
    assert_eq!(created.capacity, None);

    let found = EventRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_name(pool: PgPool) {
    EventRepo::create(&pool, &new_event("Reading Group", 60))
        .await
        .unwrap();

    let found = EventRepo::find_by_name(&pool, "Reading Group")
        .await
        .unwrap();
    assert!(found.is_some());

    let missing = EventRepo::find_by_name(&pool, "No Such Event")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_name_violates_constraint(pool: PgPool) {
    EventRepo::create(&pool, &new_event("Colloquium", 60))
        .await
        .unwrap();

    let result = EventRepo::create(&pool, &new_event("Colloquium", 120)).await;
    let err = result.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_events_name"));
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_time_range_rejected_by_schema(pool: PgPool) {
    let start_time = Utc::now() + Duration::minutes(60);
    let input = CreateEvent {
        name: "Backwards".to_string(),
        description: None,
        start_time,
        end_time: start_time - Duration::minutes(30),
        capacity: None,
        status: None,
    };
    assert!(EventRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_upcoming_orders_by_start_ascending(pool: PgPool) {
    EventRepo::create(&pool, &new_event("Later", 240)).await.unwrap();
    EventRepo::create(&pool, &new_event("Sooner", 30)).await.unwrap();
    // Ended an hour ago; must not appear.
    EventRepo::create(&pool, &new_event("Finished", -180))
        .await
        .unwrap();

    let upcoming = EventRepo::list_upcoming(&pool).await.unwrap();
    let names: Vec<_> = upcoming.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Sooner", "Later"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_past_orders_by_end_descending(pool: PgPool) {
    EventRepo::create(&pool, &new_event("Old", -600)).await.unwrap();
    EventRepo::create(&pool, &new_event("Recent", -180))
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event("Future", 60)).await.unwrap();

    let past = EventRepo::list_past(&pool).await.unwrap();
    let names: Vec<_> = past.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Recent", "Old"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_only_provided_fields(pool: PgPool) {
    let created = EventRepo::create(&pool, &new_event("Workshop", 60))
        .await
        .unwrap();

    let patch = UpdateEvent {
        name: None,
        description: Some("Hands-on session".to_string()),
        start_time: None,
        end_time: None,
        capacity: Some(25),
        status: None,
    };
    let updated = EventRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Workshop");
    assert_eq!(updated.description.as_deref(), Some("Hands-on session"));
    assert_eq!(updated.capacity, Some(25));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_event_returns_none(pool: PgPool) {
    let patch = UpdateEvent {
        name: Some("Ghost".to_string()),
        description: None,
        start_time: None,
        end_time: None,
        capacity: None,
        status: None,
    };
    let updated = EventRepo::update(&pool, 999_999, &patch).await.unwrap();
    assert!(updated.is_none());
}
