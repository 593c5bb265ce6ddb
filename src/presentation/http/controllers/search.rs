// src/presentation/http/controllers/search.rs
use crate::application::{
    dto::SearchResultsDto,
    queries::{categories::BrowseTagQuery, posts::SearchPostsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-sensitive text matched against title, content, excerpt and tags.
    #[serde(default)]
    pub query: Option<String>,
    /// Used when `query` is blank.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Used when `query` and `category_id` are absent.
    #[serde(default)]
    pub tag: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchParams),
    responses(
        (status = 200, description = "One page of published posts, 10 per page.", body = SearchResultsDto),
        (status = 400, description = "Invalid filter.", body = ErrorResponse)
    ),
    tag = "Browse"
)]
pub async fn search_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    let results = state
        .services
        .post_queries
        .search_posts(SearchPostsQuery {
            query: params.query,
            category_id: params.category_id,
            tag: params.tag,
            page: params.page,
        })
        .await
        .into_http()?;
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{tag}/posts",
    params(("tag" = String, Path, description = "Tag text"), PageParams),
    responses(
        (status = 200, description = "Published posts carrying the tag.", body = SearchResultsDto)
    ),
    tag = "Browse"
)]
pub async fn browse_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    let results = state
        .services
        .category_queries
        .browse_tag(BrowseTagQuery {
            tag,
            page: params.page,
        })
        .await
        .into_http()?;
    Ok(Json(results))
}
