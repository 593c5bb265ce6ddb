// src/application/queries/posts/details.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{CommentThreadDto, PostDetailsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::build_thread,
        post::PostSlug,
    },
};

pub const RELATED_POSTS_LIMIT: u32 = 3;

pub struct GetPostDetailsQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Loads a post page by slug, published or not. Every successful call
    /// counts as one view.
    pub async fn get_post_details(
        &self,
        query: GetPostDetailsQuery,
    ) -> ApplicationResult<PostDetailsDto> {
        // A malformed slug cannot exist, so it is reported as absent.
        let slug = PostSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let mut post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        post.view_count = self.write_repo.increment_view_count(post.id).await?;
        tracing::debug!(post_id = %post.id, view_count = post.view_count, "post viewed");

        let comments = build_thread(self.comment_repo.list_by_post(post.id).await?)
            .into_iter()
            .map(CommentThreadDto::from)
            .collect();

        let related_posts = match post.category_id {
            Some(category_id) => self
                .read_repo
                .list_related(post.id, category_id, RELATED_POSTS_LIMIT)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
            None => Vec::new(),
        };

        Ok(PostDetailsDto {
            post: post.into(),
            comments,
            related_posts,
        })
    }
}
