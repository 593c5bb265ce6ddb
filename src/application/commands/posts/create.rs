// src/application/commands/posts/create.rs
use super::{PostCommandService, PostInput};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::{errors::DomainError, post::NewPost},
};

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        input: PostInput,
    ) -> ApplicationResult<PostDto> {
        let publish = input.is_published;
        let content = self.build_content(actor.id, input).await?;
        let slug = self.slug_service.generate_unique_slug(&content.title).await?;
        let now = self.clock.now();

        let new_post = NewPost::new(content, slug, actor.id, publish, now);

        // The existence check is not atomic, so a concurrent insert can still
        // take the slug. Retry once with a fresh disambiguator.
        let created = match self.write_repo.insert(new_post.clone()).await {
            Ok(post) => post,
            Err(DomainError::Conflict(reason)) => {
                let retry_slug = self
                    .slug_service
                    .disambiguate_title(&new_post.content.title)?;
                tracing::warn!(
                    slug = %new_post.slug,
                    retry_slug = %retry_slug,
                    %reason,
                    "slug taken at insert, retrying once"
                );
                self.write_repo.insert(new_post.with_slug(retry_slug)).await?
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(post_id = %created.id, slug = %created.slug, author_id = %actor.id, "post created");
        Ok(created.into())
    }
}
