//! End-to-end smoke tests for the full garaged stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repos, real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use garage_adapter_http_axum::router;
use garage_adapter_http_axum::state::AppState;
use garage_adapter_storage_sqlite_sqlx::{Config, SqliteCarRepository, SqlitePersonRepository};
use garage_app::services::car_service::CarService;
use garage_app::services::person_service::PersonService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let person_repo = SqlitePersonRepository::new(pool.clone());
    let car_repo = SqliteCarRepository::new(pool);

    let state = AppState::new(PersonService::new(person_repo), CarService::new(car_repo));

    router::build(state)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const ANA: &str =
    r#"{"name":"Ana","surname1":"García","surname2":"López","identityNumber":"11111111A"}"#;
const BRUNO: &str =
    r#"{"name":"Bruno","surname1":"Santos","surname2":"Mata","identityNumber":"22222222B"}"#;

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_person_and_find_it_in_list_and_get() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/personas", ANA))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["identityNumber"], "11111111A");
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(get_request("/api/personas"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["identityNumber"], "11111111A");

    let resp = app
        .oneshot(get_request(&format!("/api/personas/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["surname2"], "López");
}

#[tokio::test]
async fn should_reject_person_with_missing_field_and_persist_nothing() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/personas",
            r#"{"name":"Ana","surname1":"García","identityNumber":"11111111A"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "missing required field: surname2");

    let resp = app.oneshot(get_request("/api/personas")).await.unwrap();
    let list = body_json(resp).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_duplicate_identity_number_with_conflict() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/personas", ANA))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Same identity number, different name.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/personas",
            r#"{"name":"Bruno","surname1":"Santos","surname2":"Mata","identityNumber":"11111111A"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app.oneshot(get_request("/api/personas")).await.unwrap();
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Ana");
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_person() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/personas/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Person 99 not found");
}

#[tokio::test]
async fn should_update_person_and_return_updated_record() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/personas", ANA))
        .await
        .unwrap();
    let id = body_json(resp).await["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/personas/{id}"),
            r#"{"name":"Ana María","surname1":"García","surname2":"López","identityNumber":"11111111A"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["name"], "Ana María");
    assert_eq!(updated["id"], id);
}

#[tokio::test]
async fn should_reject_update_that_collides_with_another_identity_number() {
    let app = app().await;

    app.clone()
        .oneshot(json_request("POST", "/api/personas", ANA))
        .await
        .unwrap();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/personas", BRUNO))
        .await
        .unwrap();
    let bruno_id = body_json(resp).await["id"].as_i64().unwrap();

    // Try to steal Ana's identity number.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/personas/{bruno_id}"),
            r#"{"name":"Bruno","surname1":"Santos","surname2":"Mata","identityNumber":"11111111A"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app
        .oneshot(get_request(&format!("/api/personas/{bruno_id}")))
        .await
        .unwrap();
    let unchanged = body_json(resp).await;
    assert_eq!(unchanged["identityNumber"], "22222222B");
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_person() {
    let resp = app()
        .await
        .oneshot(json_request("PUT", "/api/personas/99", ANA))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_delete_person_then_report_not_found() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/personas", ANA))
        .await
        .unwrap();
    let id = body_json(resp).await["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/personas/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(get_request(&format!("/api/personas/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Cars
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_car_with_owner_and_list_it() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/personas", ANA))
        .await
        .unwrap();
    let owner_id = body_json(resp).await["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/coches",
            &format!(
                r#"{{"plate":"1234ABC","brand":"Toyota","model":"Corolla","horsepower":120,"ownerId":{owner_id}}}"#
            ),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(get_request("/api/coches")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["plate"], "1234ABC");
    assert_eq!(list[0]["brand"], "Toyota");
    assert_eq!(list[0]["model"], "Corolla");
    assert_eq!(list[0]["horsepower"], 120);
    assert_eq!(list[0]["ownerId"], owner_id);
}

#[tokio::test]
async fn should_reject_car_with_missing_field() {
    let resp = app()
        .await
        .oneshot(json_request(
            "POST",
            "/api/coches",
            r#"{"plate":"1234ABC","brand":"Toyota","horsepower":120}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "missing required field: model");
}

#[tokio::test]
async fn should_reject_duplicate_plate_with_conflict() {
    let app = app().await;
    let car = r#"{"plate":"1234ABC","brand":"Toyota","model":"Corolla","horsepower":120}"#;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/coches", car))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(json_request("POST", "/api/coches", car))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_update_car_fields_by_plate() {
    let app = app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/coches",
            r#"{"plate":"1234ABC","brand":"Toyota","model":"Corolla","horsepower":120}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/coches/1234ABC",
            r#"{"brand":"Toyota","model":"Yaris","horsepower":100}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_request("/api/coches")).await.unwrap();
    let list = body_json(resp).await;
    assert_eq!(list[0]["model"], "Yaris");
    assert_eq!(list[0]["horsepower"], 100);
}

#[tokio::test]
async fn should_return_ok_when_updating_unknown_plate() {
    // Zero affected rows still reports success for cars.
    let resp = app()
        .await
        .oneshot(json_request(
            "PUT",
            "/api/coches/0000ZZZ",
            r#"{"brand":"Seat","model":"Ibiza","horsepower":95}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_ok_and_leave_store_unchanged_when_deleting_unknown_plate() {
    let app = app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/coches",
            r#"{"plate":"1234ABC","brand":"Toyota","model":"Corolla","horsepower":120}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/coches/0000ZZZ")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_request("/api/coches")).await.unwrap();
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["plate"], "1234ABC");
}

#[tokio::test]
async fn should_delete_car_by_plate() {
    let app = app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/coches",
            r#"{"plate":"1234ABC","brand":"Toyota","model":"Corolla","horsepower":120}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/coches/1234ABC")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get_request("/api/coches")).await.unwrap();
    let list = body_json(resp).await;
    assert!(list.as_array().unwrap().is_empty());
}
