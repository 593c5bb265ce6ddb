// src/domain/comment/repository.rs
use crate::domain::comment::entity::{Comment, CommentId, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// Every comment on the post, oldest first, approved or not.
    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>>;
    /// Comments received on all posts written by `author_id`.
    async fn count_on_posts_by(&self, author_id: UserId) -> DomainResult<u64>;
}
