//! Repository tests against a real Postgres database.

use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::dto::workout::{AdjustWorkoutRequest, CreateWorkoutRequest, UpdateWorkoutRequest};
use storage::error::StorageError;
use storage::repository::workout::WorkoutRepository;

fn new_workout(name: &str, sets: i32, reps: i32, weight: i64) -> CreateWorkoutRequest {
    CreateWorkoutRequest {
        name: Some(name.to_string()),
        sets,
        reps,
        weight: Decimal::from(weight),
    }
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn create_returns_server_assigned_fields(pool: PgPool) {
    let repo = WorkoutRepository::new(&pool);

    let created = repo.create(&new_workout("Bench", 3, 10, 135)).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Bench");
    assert_eq!(created.sets, 3);
    assert_eq!(created.reps, 10);
    assert_eq!(created.weight, Decimal::from(135));

    let fetched = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn list_is_in_creation_order(pool: PgPool) {
    let repo = WorkoutRepository::new(&pool);

    let names = ["Squat", "Bench", "Deadlift", "Press"];
    for name in names {
        repo.create(&new_workout(name, 1, 1, 1)).await.unwrap();
    }

    let listed: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();

    assert_eq!(listed, names);
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn update_only_touches_supplied_fields(pool: PgPool) {
    let repo = WorkoutRepository::new(&pool);
    let created = repo.create(&new_workout("Row", 3, 8, 95)).await.unwrap();

    let updated = repo
        .update(
            created.id,
            &UpdateWorkoutRequest {
                sets: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.sets, 5);
    assert_eq!(updated.name, "Row");
    assert_eq!(updated.reps, 8);
    assert_eq!(updated.weight, Decimal::from(95));
    assert_eq!(updated.created_at, created.created_at);

    let updated = repo
        .update(
            created.id,
            &UpdateWorkoutRequest {
                name: Some("Pendlay Row".to_string()),
                reps: Some(6),
                weight: Some(Decimal::from(115)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Pendlay Row");
    assert_eq!(updated.sets, 5);
    assert_eq!(updated.reps, 6);
    assert_eq!(updated.weight, Decimal::from(115));
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn missing_rows_report_not_found(pool: PgPool) {
    let repo = WorkoutRepository::new(&pool);
    let kept = repo.create(&new_workout("Curl", 3, 12, 25)).await.unwrap();

    let update = repo
        .update(kept.id + 1000, &UpdateWorkoutRequest::default())
        .await;
    assert!(matches!(update, Err(StorageError::NotFound)));

    let delete = repo.delete(kept.id + 1000).await;
    assert!(matches!(delete, Err(StorageError::NotFound)));

    assert_eq!(repo.list().await.unwrap(), vec![kept]);
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn delete_twice_is_not_found(pool: PgPool) {
    let repo = WorkoutRepository::new(&pool);
    let created = repo.create(&new_workout("Dip", 3, 10, 0)).await.unwrap();

    repo.delete(created.id).await.unwrap();

    assert!(matches!(
        repo.delete(created.id).await,
        Err(StorageError::NotFound)
    ));
    assert!(repo.list().await.unwrap().is_empty());
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn adjust_clamps_decrements_at_zero(pool: PgPool) {
    let repo = WorkoutRepository::new(&pool);
    let created = repo.create(&new_workout("Lunge", 1, 10, 20)).await.unwrap();

    let adjusted = repo
        .adjust(
            created.id,
            &AdjustWorkoutRequest {
                sets: -3,
                reps: 2,
                weight: Decimal::from(-5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(adjusted.sets, 0);
    assert_eq!(adjusted.reps, 12);
    assert_eq!(adjusted.weight, Decimal::from(15));
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn concurrent_adjustments_are_not_lost(pool: PgPool) {
    let created = WorkoutRepository::new(&pool)
        .create(&new_workout("Pull-up", 0, 0, 0))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            WorkoutRepository::new(&pool)
                .adjust(
                    created.id,
                    &AdjustWorkoutRequest {
                        reps: 1,
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let after = WorkoutRepository::new(&pool)
        .find_by_id(created.id)
        .await
        .unwrap();
    assert_eq!(after.reps, 20);
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
async fn create_without_name_is_a_database_error(pool: PgPool) {
    let repo = WorkoutRepository::new(&pool);

    let err = repo
        .create(&CreateWorkoutRequest {
            sets: 3,
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Database(_)));
    assert!(repo.list().await.unwrap().is_empty());
}
