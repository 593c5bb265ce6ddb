// src/application/queries/categories/list.rs
use super::CategoryQueryService;
use crate::application::{dto::CategoryWithCountDto, error::ApplicationResult};

impl CategoryQueryService {
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryWithCountDto>> {
        Ok(self
            .category_repo
            .list_with_post_counts()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
