// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentBody, CommentId, NewComment},
        post::PostId,
    },
};

pub struct CreateCommentCommand {
    pub post_id: i64,
    pub parent_id: Option<i64>,
    /// Raw HTML; sanitized with the display profile before storage.
    pub content: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let parent_id = match command.parent_id {
            Some(raw) => {
                let id = CommentId::new(raw)
                    .map_err(|_| ApplicationError::not_found("parent comment not found"))?;
                let parent = self
                    .comment_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;
                if !parent.belongs_to(post.id) {
                    tracing::warn!(
                        post_id = %post.id,
                        parent_id = %id,
                        parent_post_id = %parent.post_id,
                        "rejected reply to a comment on another post"
                    );
                    return Err(ApplicationError::validation(
                        "parent comment belongs to a different post",
                    ));
                }
                Some(id)
            }
            None => None,
        };

        let body = CommentBody::new(self.sanitizer.sanitize_for_display(&command.content))?;
        let now = self.clock.now();
        let comment = self
            .comment_repo
            .insert(NewComment::new(post.id, actor.id, parent_id, body, now))
            .await?;

        tracing::info!(comment_id = %comment.id, post_id = %post.id, "comment created");
        Ok(comment.into())
    }
}
