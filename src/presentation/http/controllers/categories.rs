// src/presentation/http/controllers/categories.rs
use super::search::PageParams;
use crate::application::{
    dto::{CategoryWithCountDto, SearchResultsDto},
    queries::categories::BrowseCategoryQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories with their published post counts.", body = [CategoryWithCountDto])
    ),
    tag = "Browse"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryWithCountDto>>> {
    let categories = state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/posts",
    params(("id" = i64, Path, description = "Category id"), PageParams),
    responses(
        (status = 200, description = "Published posts in the category.", body = SearchResultsDto),
        (status = 404, description = "Category not found.", body = ErrorResponse)
    ),
    tag = "Browse"
)]
pub async fn browse_category(
    Extension(state): Extension<HttpState>,
    Path(category_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    let results = state
        .services
        .category_queries
        .browse_category(BrowseCategoryQuery {
            category_id,
            page: params.page,
        })
        .await
        .into_http()?;
    Ok(Json(results))
}
