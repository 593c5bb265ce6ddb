// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::domain::{
    category::CategoryRepository,
    comment::CommentRepository,
    post::{PostReadRepository, PostWriteRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        write_repo: Arc<dyn PostWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            comment_repo,
            category_repo,
        }
    }
}
