mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, build_test_app, count, delete, get, patch_json, post_json, put_json};

/// Create, read, update, patch and delete one tag.
#[sqlx::test(migrations = "../../db/migrations")]
async fn tag_lifecycle(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/tags", json!({ "name": "AAAAAAAAAA" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/tags/{id}"));
    assert_eq!(created["name"], "AAAAAAAAAA");

    let response = get(&app, &format!("/api/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let response = put_json(
        &app,
        &format!("/api/tags/{id}"),
        json!({ "id": id, "name": "BBBBBBBBBB" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "BBBBBBBBBB");

    let response = patch_json(&app, &format!("/api/tags/{id}"), json!({ "id": id })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "BBBBBBBBBB");

    let response = delete(&app, &format!("/api/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(count(&app, "/api/tags").await, 0);
}

/// A create request carrying an id is rejected and nothing is stored.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_existing_id_returns_400(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/tags", json!({ "id": 1, "name": "AAAAAAAAAA" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "idexists");
    assert_eq!(body["entityName"], "tag");
    assert_eq!(count(&app, "/api/tags").await, 0);
}

/// Missing or too-short names fail validation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_invalid_name_returns_400(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/tags", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "name: required");

    let response = post_json(&app, "/api/tags", json!({ "name": "A" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&app, "/api/tags").await, 0);
}

/// Tag names are unique.
#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_returns_409(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(&app, "/api/tags", json!({ "name": "summer" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&app, "/api/tags", json!({ "name": "summer" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

/// Full update id rules: idnull, idinvalid, idnotfound.
#[sqlx::test(migrations = "../../db/migrations")]
async fn put_id_mismatches_return_400(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let id = body_json(post_json(&app, "/api/tags", json!({ "name": "winter" })).await).await["id"]
        .as_i64()
        .unwrap();

    let response = put_json(&app, &format!("/api/tags/{id}"), json!({ "name": "autumn" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "idnull");

    let response = put_json(
        &app,
        &format!("/api/tags/{id}"),
        json!({ "id": id + 1, "name": "autumn" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "idinvalid");

    let missing = id + 1000;
    let response = put_json(
        &app,
        &format!("/api/tags/{missing}"),
        json!({ "id": missing, "name": "autumn" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "idnotfound");

    let response = get(&app, &format!("/api/tags/{id}")).await;
    assert_eq!(body_json(response).await["name"], "winter");
}

/// PUT and PATCH without a path id are not routed.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_path_id_returns_405(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = put_json(&app, "/api/tags", json!({ "id": 1, "name": "autumn" })).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = patch_json(&app, "/api/tags", json!({ "id": 1 })).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// PATCH validates only the values it carries.
#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_rejects_invalid_supplied_value(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let id = body_json(post_json(&app, "/api/tags", json!({ "name": "spring" })).await).await["id"]
        .as_i64()
        .unwrap();

    let response = patch_json(&app, &format!("/api/tags/{id}"), json!({ "id": id, "name": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "name: length");

    let response = patch_json(&app, &format!("/api/tags/{id}"), json!({ "name": "summer" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "idnull");
}

/// Deleting a missing tag still answers 204.
#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_returns_204(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let response = delete(&app, "/api/tags/424242").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Non-numeric path ids are rejected before reaching the handler.
#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_path_id_returns_400(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/api/tags/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
