//! Criteria filters and paging rendered against a real database.

use souk_core::criteria::Criteria;
use souk_core::paging::PageRequest;
use souk_db::models::product::{ProductDto, PRODUCT_FIELDS};
use souk_db::models::tag::{TagDto, TAG_FIELDS};
use souk_db::repositories::{ProductRepo, TagRepo};
use sqlx::PgPool;

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn seed_products(pool: &PgPool) -> Vec<i64> {
    let mut ids = Vec::new();
    for (name, price, available) in [
        ("Oak table", 120.0, true),
        ("Oak chair", 45.0, true),
        ("Pine shelf", 30.0, false),
        ("100% wool rug", 80.0, true),
    ] {
        let product = ProductRepo::create(
            pool,
            &ProductDto {
                name: Some(name.into()),
                price: Some(price),
                available: Some(available),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        ids.push(product.id);
    }
    ids
}

async fn names(pool: &PgPool, query: &[(&str, &str)]) -> Vec<String> {
    let query = params(query);
    let criteria = Criteria::from_params(PRODUCT_FIELDS, &query).unwrap();
    let page = PageRequest::from_params(PRODUCT_FIELDS, &query).unwrap();
    ProductRepo::list(pool, &criteria, &page)
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|p| p.name)
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contains_is_case_insensitive(pool: PgPool) {
    seed_products(&pool).await;
    assert_eq!(
        names(&pool, &[("name.contains", "OAK"), ("sort", "id")]).await,
        vec!["Oak table", "Oak chair"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contains_escapes_wildcards(pool: PgPool) {
    seed_products(&pool).await;
    assert_eq!(
        names(&pool, &[("name.contains", "100%")]).await,
        vec!["100% wool rug"]
    );
    assert!(names(&pool, &[("name.contains", "_")]).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_range_and_boolean_filters(pool: PgPool) {
    seed_products(&pool).await;
    assert_eq!(
        names(
            &pool,
            &[
                ("price.greaterThanOrEqual", "45"),
                ("available.equals", "true"),
                ("sort", "price,desc"),
            ]
        )
        .await,
        vec!["Oak table", "100% wool rug", "Oak chair"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_in_and_specified_filters(pool: PgPool) {
    let ids = seed_products(&pool).await;
    let list = format!("{},{}", ids[0], ids[2]);
    assert_eq!(
        names(&pool, &[("id.in", list.as_str()), ("sort", "id")]).await,
        vec!["Oak table", "Pine shelf"]
    );
    assert_eq!(names(&pool, &[("productCategoryId.specified", "true")]).await.len(), 0);
    assert_eq!(names(&pool, &[("productCategoryId.specified", "false")]).await.len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_paging_with_tie_breaker(pool: PgPool) {
    seed_products(&pool).await;
    let query = params(&[("available.equals", "true"), ("page", "1"), ("size", "2")]);
    let criteria = Criteria::from_params(PRODUCT_FIELDS, &query).unwrap();
    let page = PageRequest::from_params(PRODUCT_FIELDS, &query).unwrap();
    let result = ProductRepo::list(&pool, &criteria, &page).await.unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.total_pages(), 2);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].name, "100% wool rug");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_many_to_many_filters(pool: PgPool) {
    let ids = seed_products(&pool).await;
    let tag = TagRepo::create(
        &pool,
        &TagDto {
            id: None,
            name: Some("wood".into()),
        },
    )
    .await
    .unwrap();
    for &id in &ids[..2] {
        ProductRepo::partial_update(
            &pool,
            id,
            &ProductDto {
                tag_ids: Some(vec![tag.id]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    let tag_id = tag.id.to_string();
    assert_eq!(
        names(&pool, &[("tagId.equals", tag_id.as_str()), ("sort", "id")]).await,
        vec!["Oak table", "Oak chair"]
    );
    assert_eq!(
        names(&pool, &[("tagId.specified", "false"), ("sort", "id")]).await,
        vec!["Pine shelf", "100% wool rug"]
    );

    // Reverse direction: tags carried by a product.
    let query = params(&[("productId.equals", &ids[0].to_string())]);
    let criteria = Criteria::from_params(TAG_FIELDS, &query).unwrap();
    let count = TagRepo::count(&pool, &criteria).await.unwrap();
    assert_eq!(count, 1);
}
