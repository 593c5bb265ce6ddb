// src/application/queries/search.rs
use crate::{
    application::{
        dto::{CategoryDto, PageMeta, SearchResultsDto},
        error::ApplicationResult,
    },
    domain::{
        category::CategoryRepository,
        post::{PageRequest, PostReadRepository, SearchFilter},
    },
};

/// Filters applied to one search request, echoed back in the results.
#[derive(Debug, Clone, Default)]
pub(crate) struct SearchEcho {
    pub query: Option<String>,
    pub category_id: Option<i64>,
    pub tag: Option<String>,
}

/// Runs the selected search mode and packs one result page. No filter means
/// an empty page with zero totals.
pub(crate) async fn run_search(
    posts: &dyn PostReadRepository,
    categories: &dyn CategoryRepository,
    filter: Option<SearchFilter>,
    page: PageRequest,
    echo: SearchEcho,
) -> ApplicationResult<SearchResultsDto> {
    let (found, pagination) = match &filter {
        Some(filter) => {
            let (found, total) = posts.search(filter, page).await?;
            (found, PageMeta::new(page, total))
        }
        None => (Vec::new(), PageMeta::empty(page)),
    };

    tracing::debug!(
        ?filter,
        page = page.page(),
        total = pagination.total_results,
        "search executed"
    );

    let categories = categories
        .list_all()
        .await?
        .into_iter()
        .map(CategoryDto::from)
        .collect();

    Ok(SearchResultsDto {
        query: echo.query,
        category_id: echo.category_id,
        tag: echo.tag,
        posts: found.into_iter().map(Into::into).collect(),
        categories,
        pagination,
    })
}
