mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{body_json, build_test_app, count, delete, get, patch_json, post_json, put_json};

async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn uuid_of(value: &Value) -> Uuid {
    value["id"].as_str().unwrap().parse().unwrap()
}

/// Users, conversations and messages get server-generated UUIDs.
#[sqlx::test(migrations = "../../db/migrations")]
async fn conversation_with_messages(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let alice = create(
        &app,
        "/api/users",
        json!({ "login": "alice", "email": "alice@example.com", "activated": true }),
    )
    .await;
    let alice_id = uuid_of(&alice);

    let conversation = create(
        &app,
        "/api/conversations",
        json!({ "title": "Delivery", "createdAt": "2026-03-01T09:00:00Z" }),
    )
    .await;
    let conversation_id = uuid_of(&conversation);

    let participant = create(
        &app,
        "/api/participants",
        json!({
            "joinedAt": "2026-03-01T09:00:00Z",
            "admin": true,
            "conversationId": conversation_id,
            "userId": alice_id,
        }),
    )
    .await;
    assert!(participant["id"].is_i64());

    let message = create(
        &app,
        "/api/messages",
        json!({
            "content": "When will it ship?",
            "sentAt": "2026-03-01T09:05:00Z",
            "read": false,
            "conversationId": conversation_id,
            "senderId": alice_id,
        }),
    )
    .await;
    let message_id = uuid_of(&message);

    let response = patch_json(
        &app,
        &format!("/api/messages/{message_id}"),
        json!({ "id": message_id, "read": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["read"], true);
    assert_eq!(patched["content"], "When will it ship?");

    let response = get(&app, &format!("/api/messages?conversationId.equals={conversation_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    // Messages and participants go with their conversation.
    let response = delete(&app, &format!("/api/conversations/{conversation_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(count(&app, "/api/messages").await, 0);
    assert_eq!(count(&app, "/api/participants").await, 0);
    assert_eq!(count(&app, "/api/users").await, 1);
}

/// A message must point at an existing conversation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn message_with_unknown_conversation_returns_400(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let bob = create(&app, "/api/users", json!({ "login": "bob", "activated": true })).await;

    let response = post_json(
        &app,
        "/api/messages",
        json!({
            "content": "Hello?",
            "sentAt": "2026-03-01T09:05:00Z",
            "read": false,
            "conversationId": Uuid::new_v4(),
            "senderId": uuid_of(&bob),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&app, "/api/messages").await, 0);
}

/// UUID path ids follow the same update rules as numeric ones.
#[sqlx::test(migrations = "../../db/migrations")]
async fn user_update_id_rules(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let carol = create(&app, "/api/users", json!({ "login": "carol", "activated": false })).await;
    let id = uuid_of(&carol);

    let response = put_json(
        &app,
        &format!("/api/users/{id}"),
        json!({ "id": Uuid::new_v4(), "login": "carol", "activated": true }),
    )
    .await;
    assert_eq!(body_json(response).await["code"], "idinvalid");

    let missing = Uuid::new_v4();
    let response = put_json(
        &app,
        &format!("/api/users/{missing}"),
        json!({ "id": missing, "login": "carol", "activated": true }),
    )
    .await;
    assert_eq!(body_json(response).await["code"], "idnotfound");

    let response = put_json(
        &app,
        &format!("/api/users/{id}"),
        json!({ "id": id, "login": "carol", "firstName": "Carol", "activated": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["firstName"], "Carol");
    assert_eq!(updated["activated"], true);

    let response = post_json(
        &app,
        "/api/users",
        json!({ "id": Uuid::new_v4(), "login": "dave", "activated": true }),
    )
    .await;
    assert_eq!(body_json(response).await["code"], "idexists");
}

/// Login and email formats are checked.
#[sqlx::test(migrations = "../../db/migrations")]
async fn user_validation(pool: sqlx::PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        &app,
        "/api/users",
        json!({ "login": "eve", "email": "not-an-email", "activated": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "email: email");

    let response = post_json(&app, "/api/users", json!({ "login": "bad login!", "activated": true })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&app, "/api/users").await, 0);
}

/// A user has at most one details record.
#[sqlx::test(migrations = "../../db/migrations")]
async fn user_details_are_unique_per_user(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let frank = create(&app, "/api/users", json!({ "login": "frank", "activated": true })).await;
    let user_id = uuid_of(&frank);

    let details = create(
        &app,
        "/api/user-details",
        json!({ "city": "Lyon", "birthDate": "1990-05-17", "userId": user_id }),
    )
    .await;
    assert_eq!(details["birthDate"], "1990-05-17");

    let response = post_json(&app, "/api/user-details", json!({ "city": "Nice", "userId": user_id })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete(&app, &format!("/api/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(count(&app, "/api/user-details").await, 0);
}

/// Malformed UUID path segments are rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_uuid_path_returns_400(pool: sqlx::PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/api/conversations/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
