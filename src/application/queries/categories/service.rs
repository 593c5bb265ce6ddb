// src/application/queries/categories/service.rs
use std::sync::Arc;

use crate::domain::{category::CategoryRepository, post::PostReadRepository};

pub struct CategoryQueryService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
}

impl CategoryQueryService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        post_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            category_repo,
            post_repo,
        }
    }
}
