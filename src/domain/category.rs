// src/domain/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub icon_class: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Category together with the number of its published posts.
#[derive(Debug, Clone)]
pub struct CategoryWithPostCount {
    pub category: Category,
    pub published_posts: u64,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn list_all(&self) -> DomainResult<Vec<Category>>;
    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithPostCount>>;
}
