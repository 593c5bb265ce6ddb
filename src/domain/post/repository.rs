// src/domain/post/repository.rs
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::search::{PageRequest, SearchFilter};
use crate::domain::post::value_objects::{PostId, PostSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Ordering of the published listings shown on the home feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedListing {
    /// Featured posts, most recently published first.
    Featured,
    /// Most recently published first.
    Latest,
    /// Highest view count first, ties broken by recency.
    Popular,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorPostStats {
    pub total_posts: u64,
    pub total_views: u64,
    pub published_posts: u64,
    pub draft_posts: u64,
    pub featured_posts: u64,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the slug is already taken.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Atomically bumps the view counter and returns the new value.
    async fn increment_view_count(&self, id: PostId) -> DomainResult<i64>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// Filters first, then slices the requested page. Returns the page and the total match count.
    async fn search(
        &self,
        filter: &SearchFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)>;
    async fn list_published(&self, listing: PublishedListing, limit: u32)
    -> DomainResult<Vec<Post>>;
    /// Published posts in `category_id` other than `post_id`, by view count descending.
    async fn list_related(
        &self,
        post_id: PostId,
        category_id: CategoryId,
        limit: u32,
    ) -> DomainResult<Vec<Post>>;
    async fn list_recent_by_author(&self, author_id: UserId, limit: u32)
    -> DomainResult<Vec<Post>>;
    async fn author_stats(&self, author_id: UserId) -> DomainResult<AuthorPostStats>;
}
