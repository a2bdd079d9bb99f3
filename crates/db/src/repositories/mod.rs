//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. `update` replaces every
//! column; `partial_update` only applies the non-`None` fields.

pub mod colour_repo;
pub mod comment_repo;
pub mod conversation_repo;
pub mod message_repo;
pub mod participant_repo;
pub mod product_category_repo;
pub mod product_image_repo;
pub mod product_repo;
pub mod search_index_repo;
pub mod status_repo;
pub mod tag_repo;
pub mod user_details_repo;
pub mod user_repo;

pub use colour_repo::ColourRepo;
pub use comment_repo::CommentRepo;
pub use conversation_repo::ConversationRepo;
pub use message_repo::MessageRepo;
pub use participant_repo::ParticipantRepo;
pub use product_category_repo::ProductCategoryRepo;
pub use product_image_repo::ProductImageRepo;
pub use product_repo::ProductRepo;
pub use search_index_repo::SearchIndexRepo;
pub use status_repo::StatusRepo;
pub use tag_repo::TagRepo;
pub use user_details_repo::UserDetailsRepo;
pub use user_repo::UserRepo;
