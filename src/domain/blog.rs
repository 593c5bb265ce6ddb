// src/domain/blog.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub i64);

impl BlogId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("blog id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<BlogId> for i64 {
    fn from(value: BlogId) -> Self {
        value.0
    }
}

/// A named collection of posts owned by one user.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub owner_id: UserId,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct BlogSummary {
    pub blog: Blog,
    pub post_count: u64,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>>;
    /// Active blogs of `owner`, newest first.
    async fn list_active_by_owner(&self, owner: UserId) -> DomainResult<Vec<BlogSummary>>;
    async fn count_active_by_owner(&self, owner: UserId) -> DomainResult<u64>;
}
