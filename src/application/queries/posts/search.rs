// src/application/queries/posts/search.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::SearchResultsDto,
        error::ApplicationResult,
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

#[derive(Debug, Clone, Default)]
pub struct SearchPostsQuery {
    pub query: Option<String>,
    pub category_id: Option<i64>,
    pub tag: Option<String>,
    pub page: Option<u32>,
}

impl PostQueryService {
    /// Free text wins over category, category over tag.
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<SearchResultsDto> {
        let category_id = query.category_id.map(CategoryId::new).transpose()?;
        let filter = SearchFilter::select(query.query.as_deref(), category_id, query.tag.as_deref());
        let page = PageRequest::new(query.page.unwrap_or(1), SEARCH_PAGE_SIZE);

        run_search(
            self.read_repo.as_ref(),
            self.category_repo.as_ref(),
            filter,
            page,
            SearchEcho {
                query: query.query,
                category_id: query.category_id,
                tag: query.tag,
            },
        )
        .await
    }
}
