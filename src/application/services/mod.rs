// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentCommandService, posts::PostCommandService},
        ports::{sanitizer::HtmlSanitizer, time::Clock, util::SlugGenerator},
        queries::{
            categories::CategoryQueryService, dashboard::DashboardQueryService,
            posts::PostQueryService,
        },
    },
    domain::{
        blog::BlogRepository,
        category::CategoryRepository,
        comment::CommentRepository,
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
        user::UserRepository,
    },
};

/// Repository handles the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub post_writes: Arc<dyn PostWriteRepository>,
    pub post_reads: Arc<dyn PostReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub blogs: Arc<dyn BlogRepository>,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        sanitizer: Arc<dyn HtmlSanitizer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&repos.post_reads),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.post_writes),
            Arc::clone(&repos.post_reads),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.blogs),
            slug_service,
            Arc::clone(&sanitizer),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.post_reads),
            Arc::clone(&sanitizer),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&repos.post_reads),
            Arc::clone(&repos.post_writes),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.categories),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&repos.post_reads),
        ));
        let dashboard_queries = Arc::new(DashboardQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.post_reads),
            Arc::clone(&repos.blogs),
            Arc::clone(&repos.comments),
        ));

        Self {
            post_commands,
            comment_commands,
            post_queries,
            category_queries,
            dashboard_queries,
        }
    }
}
