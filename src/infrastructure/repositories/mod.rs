// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_blog;
mod postgres_category;
mod postgres_comment;
mod postgres_post;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_blog::PostgresBlogRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_user::PostgresUserRepository;
