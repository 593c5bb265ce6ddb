// src/application/commands/posts/update.rs
use super::{PostCommandService, PostInput};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        PostId, PostUpdate,
        specifications::{CanUpdatePostSpec, PostSpecification},
    },
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub input: PostInput,
}

impl PostCommandService {
    /// Replaces the editable fields of a post. The slug is kept as is so
    /// published URLs stay stable.
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        // Non-positive ids cannot exist.
        let id =
            PostId::new(command.id).map_err(|_| ApplicationError::not_found("post not found"))?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanUpdatePostSpec::new(&post, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may edit this post",
            ));
        }

        let publish = command.input.is_published;
        let content = self.build_content(actor.id, command.input).await?;
        let original_updated_at = post.updated_at;
        let now = self.clock.now();

        post.set_content(content.clone(), now);
        let mut update = PostUpdate::new(id, original_updated_at).with_content(content);
        if post.apply_publish_flag(publish, now) {
            tracing::debug!(post_id = %id, published = post.is_published, "publish state changed");
            update = update.with_publish_state(post.is_published, post.published_at);
        }
        update.set_updated_at(post.updated_at);

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
