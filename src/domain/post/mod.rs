// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod search;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostContent, PostUpdate, PublishStateUpdate};
pub use repository::{AuthorPostStats, PostReadRepository, PostWriteRepository, PublishedListing};
pub use search::{PageRequest, SearchFilter};
pub use value_objects::{PostBody, PostId, PostSlug, PostTitle, Tags};
