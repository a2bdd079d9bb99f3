//! Integration tests for the repository layer.
//!
//! - Create / read / update / partial update / delete round trips
//! - Product tag associations
//! - Cascade and set-null behaviour
//! - Unique and foreign key violations

use assert_matches::assert_matches;
use chrono::Utc;
use souk_core::criteria::Criteria;
use souk_core::paging::PageRequest;
use souk_db::models::colour::ColourDto;
use souk_db::models::comment::CommentDto;
use souk_db::models::conversation::ConversationDto;
use souk_db::models::message::MessageDto;
use souk_db::models::product::ProductDto;
use souk_db::models::product_category::ProductCategoryDto;
use souk_db::models::status::{StatusDto, StatusTable};
use souk_db::models::tag::TagDto;
use souk_db::models::user::UserDto;
use souk_db::models::user_details::UserDetailsDto;
use souk_db::repositories::{
    ColourRepo, CommentRepo, ConversationRepo, MessageRepo, ProductCategoryRepo, ProductRepo,
    SearchIndexRepo, StatusRepo, TagRepo, UserDetailsRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_tag(name: &str) -> TagDto {
    TagDto {
        id: None,
        name: Some(name.to_string()),
    }
}

fn new_product(name: &str, tag_ids: Option<Vec<i64>>) -> ProductDto {
    ProductDto {
        name: Some(name.to_string()),
        price: Some(10.0),
        available: Some(true),
        tag_ids,
        ..Default::default()
    }
}

fn new_user(login: &str) -> UserDto {
    UserDto {
        login: Some(login.to_string()),
        activated: Some(true),
        ..Default::default()
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}

// ---------------------------------------------------------------------------
// Simple entities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_colour_crud_round_trip(pool: PgPool) {
    let colour = ColourRepo::create(
        &pool,
        &ColourDto {
            id: None,
            name: Some("Teal".into()),
            hex_code: Some("#008080".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(colour.name, "Teal");

    let found = ColourRepo::find_by_id(&pool, colour.id).await.unwrap().unwrap();
    assert_eq!(found.hex_code.as_deref(), Some("#008080"));

    // Full replace clears the omitted hex code.
    let replaced = ColourRepo::update(
        &pool,
        colour.id,
        &ColourDto {
            id: Some(colour.id),
            name: Some("Navy".into()),
            hex_code: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(replaced.name, "Navy");
    assert_eq!(replaced.hex_code, None);

    // Partial update leaves unspecified fields alone.
    let patched = ColourRepo::partial_update(
        &pool,
        colour.id,
        &ColourDto {
            id: Some(colour.id),
            name: None,
            hex_code: Some("#000080".into()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(patched.name, "Navy");
    assert_eq!(patched.hex_code.as_deref(), Some("#000080"));

    assert!(ColourRepo::delete(&pool, colour.id).await.unwrap());
    assert!(!ColourRepo::delete(&pool, colour.id).await.unwrap());
    assert!(ColourRepo::find_by_id(&pool, colour.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = TagRepo::update(&pool, 999_999, &new_tag("ghost")).await.unwrap();
    assert!(result.is_none());
    let result = TagRepo::partial_update(&pool, 999_999, &new_tag("ghost")).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_tag_name_is_unique_violation(pool: PgPool) {
    TagRepo::create(&pool, &new_tag("summer")).await.unwrap();
    let err = TagRepo::create(&pool, &new_tag("summer")).await.unwrap_err();
    assert!(is_unique_violation(&err), "expected 23505, got {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_tables_are_independent(pool: PgPool) {
    let dto = StatusDto {
        id: None,
        code: Some("PENDING".into()),
        description: None,
    };
    StatusRepo::create(&pool, StatusTable::Order, &dto).await.unwrap();
    // Same code in a different table is fine.
    StatusRepo::create(&pool, StatusTable::Invoice, &dto).await.unwrap();

    let err = StatusRepo::create(&pool, StatusTable::Order, &dto).await.unwrap_err();
    assert!(is_unique_violation(&err));

    let none = Criteria::default();
    assert_eq!(StatusRepo::count(&pool, StatusTable::Order, &none).await.unwrap(), 1);
    assert_eq!(StatusRepo::count(&pool, StatusTable::Shipment, &none).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Products and tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_tags_replace_and_preserve(pool: PgPool) {
    let a = TagRepo::create(&pool, &new_tag("aa")).await.unwrap();
    let b = TagRepo::create(&pool, &new_tag("bb")).await.unwrap();

    let product = ProductRepo::create(&pool, &new_product("Desk", Some(vec![b.id, a.id, a.id])))
        .await
        .unwrap();
    assert_eq!(
        ProductRepo::tag_ids(&pool, product.id).await.unwrap(),
        vec![a.id, b.id]
    );

    // PATCH without tagIds keeps the association.
    let patch = ProductDto {
        price: Some(12.5),
        ..Default::default()
    };
    let patched = ProductRepo::partial_update(&pool, product.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(patched.price, 12.5);
    assert_eq!(patched.name, "Desk");
    assert_eq!(ProductRepo::tag_ids(&pool, product.id).await.unwrap().len(), 2);

    // PUT without tagIds clears it.
    ProductRepo::update(&pool, product.id, &new_product("Desk", None))
        .await
        .unwrap()
        .unwrap();
    assert!(ProductRepo::tag_ids(&pool, product.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_with_unknown_tag_rolls_back(pool: PgPool) {
    let err = ProductRepo::create(&pool, &new_product("Lamp", Some(vec![424_242])))
        .await
        .unwrap_err();
    assert!(is_fk_violation(&err));

    let count = ProductRepo::count(&pool, &Criteria::default()).await.unwrap();
    assert_eq!(count, 0, "product insert must roll back with its tags");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tag_ids_for_batch(pool: PgPool) {
    let tag = TagRepo::create(&pool, &new_tag("oak")).await.unwrap();
    let tagged = ProductRepo::create(&pool, &new_product("Chair", Some(vec![tag.id])))
        .await
        .unwrap();
    let plain = ProductRepo::create(&pool, &new_product("Stool", None))
        .await
        .unwrap();

    let map = ProductRepo::tag_ids_for(&pool, &[tagged.id, plain.id])
        .await
        .unwrap();
    assert_eq!(map.get(&tagged.id), Some(&vec![tag.id]));
    assert!(!map.contains_key(&plain.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_category_nulls_product_reference(pool: PgPool) {
    let category = ProductCategoryRepo::create(
        &pool,
        &ProductCategoryDto {
            name: Some("Furniture".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let mut input = new_product("Sofa", None);
    input.product_category_id = Some(category.id);
    let product = ProductRepo::create(&pool, &input).await.unwrap();

    ProductCategoryRepo::delete(&pool, category.id).await.unwrap();

    let product = ProductRepo::find_by_id(&pool, product.id).await.unwrap().unwrap();
    assert_eq!(product.product_category_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_product_cascades_to_comments(pool: PgPool) {
    let product = ProductRepo::create(&pool, &new_product("Rug", None)).await.unwrap();
    let comment = CommentRepo::create(
        &pool,
        &CommentDto {
            body: Some("Soft".into()),
            created_at: Some(Utc::now()),
            product_id: Some(product.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let removed = ProductRepo::delete(&pool, product.id).await.unwrap();
    assert_eq!(removed, Some(vec![comment.id]));
    assert!(CommentRepo::find_by_id(&pool, comment.id).await.unwrap().is_none());
    assert!(ProductRepo::find_by_id(&pool, product.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_missing_product_returns_none(pool: PgPool) {
    assert_eq!(ProductRepo::delete(&pool, 4242).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_ids_are_ascending(pool: PgPool) {
    let a = ProductRepo::create(&pool, &new_product("Lamp", None)).await.unwrap();
    let b = ProductRepo::create(&pool, &new_product("Shade", None)).await.unwrap();
    assert_eq!(ProductRepo::all_ids(&pool).await.unwrap(), vec![a.id, b.id]);
    assert!(CommentRepo::all_ids(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Users and messaging
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_ids_are_generated(pool: PgPool) {
    let first = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    let second = UserRepo::create(&pool, &new_user("bob")).await.unwrap();
    assert_ne!(first.id, second.id);

    let err = UserRepo::create(&pool, &new_user("alice")).await.unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_details_one_per_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("carol")).await.unwrap();
    let details = UserDetailsDto {
        city: Some("Lisbon".into()),
        user_id: Some(user.id),
        ..Default::default()
    };
    UserDetailsRepo::create(&pool, &details).await.unwrap();
    let err = UserDetailsRepo::create(&pool, &details).await.unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_message_requires_existing_conversation(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dave")).await.unwrap();
    let conversation = ConversationRepo::create(
        &pool,
        &ConversationDto {
            title: Some("Team".into()),
            created_at: Some(Utc::now()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let mut message = MessageDto {
        content: Some("hello".into()),
        sent_at: Some(Utc::now()),
        read: Some(false),
        conversation_id: Some(conversation.id),
        sender_id: Some(user.id),
        ..Default::default()
    };
    let saved = MessageRepo::create(&pool, &message).await.unwrap();
    assert_eq!(saved.conversation_id, conversation.id);

    message.conversation_id = Some(uuid::Uuid::new_v4());
    let err = MessageRepo::create(&pool, &message).await.unwrap_err();
    assert!(is_fk_violation(&err));

    // Deleting the conversation takes its messages with it.
    ConversationRepo::delete(&pool, conversation.id).await.unwrap();
    assert!(MessageRepo::find_by_id(&pool, saved.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Search index
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_index_upsert_query_delete(pool: PgPool) {
    let doc = serde_json::json!({"id": 1, "name": "Walnut desk"});
    SearchIndexRepo::upsert(&pool, "product", "1", &doc, "Walnut desk")
        .await
        .unwrap();
    // Second upsert replaces rather than duplicates.
    SearchIndexRepo::upsert(&pool, "product", "1", &doc, "Walnut writing desk")
        .await
        .unwrap();
    assert_eq!(SearchIndexRepo::count(&pool, "product").await.unwrap(), 1);

    let page = PageRequest::default();
    let hits = SearchIndexRepo::search(&pool, "product", "writ:*", &page)
        .await
        .unwrap();
    assert_eq!(hits.total, 1);
    assert_eq!(hits.items, vec![doc]);

    let misses = SearchIndexRepo::search(&pool, "comment", "writ:*", &page)
        .await
        .unwrap();
    assert_eq!(misses.total, 0);

    assert!(SearchIndexRepo::delete(&pool, "product", "1").await.unwrap());
    assert_matches!(SearchIndexRepo::find(&pool, "product", "1").await, Ok(None));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_index_retain_drops_unlisted_documents(pool: PgPool) {
    let doc = serde_json::json!({});
    for id in ["1", "2", "3"] {
        SearchIndexRepo::upsert(&pool, "product", id, &doc, "chair")
            .await
            .unwrap();
    }
    SearchIndexRepo::upsert(&pool, "comment", "2", &doc, "comfy")
        .await
        .unwrap();

    let keep = vec!["2".to_string()];
    assert_eq!(SearchIndexRepo::retain(&pool, "product", &keep).await.unwrap(), 2);
    assert_eq!(SearchIndexRepo::count(&pool, "product").await.unwrap(), 1);
    assert!(SearchIndexRepo::find(&pool, "product", "2").await.unwrap().is_some());
    // Other entity types are untouched.
    assert_eq!(SearchIndexRepo::count(&pool, "comment").await.unwrap(), 1);

    assert_eq!(SearchIndexRepo::retain(&pool, "comment", &[]).await.unwrap(), 1);
}
