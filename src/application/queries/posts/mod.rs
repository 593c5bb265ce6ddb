// src/application/queries/posts/mod.rs
mod details;
mod home;
mod search;
mod service;

pub use details::{GetPostDetailsQuery, RELATED_POSTS_LIMIT};
pub use home::{FEATURED_LIMIT, LATEST_LIMIT, POPULAR_LIMIT};
pub use search::SearchPostsQuery;
pub use service::PostQueryService;
