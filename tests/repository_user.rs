mod common;

use sqlx::PgPool;
use std::sync::Arc;

use renthub::domain::entities::{NewUser, UserPatch};
use renthub::domain::repositories::UserRepository;
use renthub::error::AppError;
use renthub::infrastructure::persistence::PgUserRepository;

fn make_repo(pool: PgPool) -> PgUserRepository {
    PgUserRepository::new(Arc::new(pool))
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Obi".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        phone_number: "0801234567".to_string(),
    }
}

#[sqlx::test]
async fn test_create_and_find_by_email(pool: PgPool) {
    let repo = make_repo(pool);

    let created = repo.create(new_user("ada@example.com")).await.unwrap();
    assert!(created.id > 0);

    let found = repo
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.first_name, "Ada");
}

#[sqlx::test]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let repo = make_repo(pool);

    repo.create(new_user("ada@example.com")).await.unwrap();
    let err = repo.create(new_user("ada@example.com")).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_email_missing(pool: PgPool) {
    let repo = make_repo(pool);

    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_keeps_absent_fields(pool: PgPool) {
    let repo = make_repo(pool);

    let created = repo.create(new_user("ada@example.com")).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UserPatch {
                phone_number: Some("0709999999".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.phone_number, "0709999999");
    assert_eq!(updated.email, "ada@example.com");
    assert_eq!(updated.first_name, "Ada");
}
