#![allow(dead_code)]

use renthub::state::AppState;
use sqlx::PgPool;

/// Builds application state over a test pool with a fixed signing secret.
pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(pool, "test-signing-secret".to_string(), 24)
}

/// Inserts a user directly. The stored hash is a stub; use the `/register`
/// endpoint when a test needs a real login.
pub async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (email, first_name, last_name, password_hash, phone_number)
        VALUES ($1, 'Test', 'Landlord', 'stub-hash', '0700000000')
        RETURNING id
        "#,
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a house owned by `user_id` with the given room availability.
pub async fn seed_house(pool: &PgPool, user_id: i64, available_rooms: i32) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO houses
            (house_type, state, description, location, rooms,
             available_rooms, bathrooms, price, long_lat, user_id)
        VALUES ('flat', 'Lagos', 'Seeded house', '1 Test St', 5, $2, 1, 100000, '', $1)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(available_rooms)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Mints a valid bearer token for the given user id.
pub fn token_for(state: &AppState, user_id: i64) -> String {
    state.auth_service.issue_token(user_id).unwrap()
}

pub async fn available_rooms(pool: &PgPool, house_id: i64) -> i32 {
    sqlx::query_scalar("SELECT available_rooms FROM houses WHERE id = $1")
        .bind(house_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn tenant_count(pool: &PgPool, house_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tenants WHERE house_id = $1")
        .bind(house_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
