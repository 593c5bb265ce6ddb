// src/application/queries/dashboard/service.rs
use std::sync::Arc;

use crate::domain::{
    blog::BlogRepository, comment::CommentRepository, post::PostReadRepository,
    user::UserRepository,
};

pub struct DashboardQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) blog_repo: Arc<dyn BlogRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl DashboardQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        blog_repo: Arc<dyn BlogRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            blog_repo,
            comment_repo,
        }
    }
}
