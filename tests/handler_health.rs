mod common;

use axum_test::TestServer;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_reports_healthy(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(renthub::routes::app_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}
