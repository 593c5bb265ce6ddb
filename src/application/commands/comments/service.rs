// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{sanitizer::HtmlSanitizer, time::Clock},
    domain::{comment::CommentRepository, post::PostReadRepository},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) sanitizer: Arc<dyn HtmlSanitizer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        sanitizer: Arc<dyn HtmlSanitizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            sanitizer,
            clock,
        }
    }
}
