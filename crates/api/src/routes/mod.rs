pub mod colours;
pub mod comments;
pub mod conversations;
pub mod health;
pub mod messages;
pub mod participants;
pub mod product_categories;
pub mod product_images;
pub mod products;
pub mod statuses;
pub mod tags;
pub mod user_details;
pub mod users;

use axum::Router;

use crate::handlers::status::{InvoiceStatuses, OrderStatuses, ShipmentStatuses, StatusResource};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /colours                 /product-categories       /tags
/// /products                /product-images           /comments
/// /users                   /user-details             /conversations
/// /participants            /messages                 /order-statuses
/// /invoice-statuses        /shipment-statuses
/// ```
///
/// `/products/_search` and `/comments/_search` query the search index.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/colours", colours::router())
        .nest("/product-categories", product_categories::router())
        .nest("/tags", tags::router())
        .nest("/products", products::router())
        .nest("/product-images", product_images::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
        .nest("/user-details", user_details::router())
        .nest("/conversations", conversations::router())
        .nest("/participants", participants::router())
        .nest("/messages", messages::router())
        .nest(&format!("/{}", OrderStatuses::PATH), statuses::router::<OrderStatuses>())
        .nest(&format!("/{}", InvoiceStatuses::PATH), statuses::router::<InvoiceStatuses>())
        .nest(&format!("/{}", ShipmentStatuses::PATH), statuses::router::<ShipmentStatuses>())
}
