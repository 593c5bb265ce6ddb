// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{sanitizer::HtmlSanitizer, time::Clock},
    domain::{
        blog::BlogRepository,
        category::CategoryRepository,
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) blog_repo: Arc<dyn BlogRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) sanitizer: Arc<dyn HtmlSanitizer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        blog_repo: Arc<dyn BlogRepository>,
        slug_service: Arc<PostSlugService>,
        sanitizer: Arc<dyn HtmlSanitizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            blog_repo,
            slug_service,
            sanitizer,
            clock,
        }
    }
}
