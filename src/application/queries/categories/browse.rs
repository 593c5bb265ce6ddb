// src/application/queries/categories/browse.rs
use super::CategoryQueryService;
use crate::{
    application::{
        dto::SearchResultsDto,
        error::{ApplicationError, ApplicationResult},
        queries::{
            SEARCH_PAGE_SIZE,
            search::{SearchEcho, run_search},
        },
    },
    domain::{
        category::CategoryId,
        post::{PageRequest, SearchFilter},
    },
};

pub struct BrowseCategoryQuery {
    pub category_id: i64,
    pub page: Option<u32>,
}

pub struct BrowseTagQuery {
    pub tag: String,
    pub page: Option<u32>,
}

impl CategoryQueryService {
    pub async fn browse_category(
        &self,
        query: BrowseCategoryQuery,
    ) -> ApplicationResult<SearchResultsDto> {
        let id = CategoryId::new(query.category_id)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        run_search(
            self.post_repo.as_ref(),
            self.category_repo.as_ref(),
            Some(SearchFilter::Category(id)),
            PageRequest::new(query.page.unwrap_or(1), SEARCH_PAGE_SIZE),
            SearchEcho {
                category_id: Some(query.category_id),
                ..SearchEcho::default()
            },
        )
        .await
    }

    pub async fn browse_tag(&self, query: BrowseTagQuery) -> ApplicationResult<SearchResultsDto> {
        let filter = SearchFilter::select(None, None, Some(query.tag.as_str()));
        run_search(
            self.post_repo.as_ref(),
            self.category_repo.as_ref(),
            filter,
            PageRequest::new(query.page.unwrap_or(1), SEARCH_PAGE_SIZE),
            SearchEcho {
                tag: Some(query.tag),
                ..SearchEcho::default()
            },
        )
        .await
    }
}
