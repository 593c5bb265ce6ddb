// src/presentation/http/controllers/home.rs
use crate::application::dto::HomePageDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses(
        (status = 200, description = "Featured, latest and popular posts plus categories.", body = HomePageDto)
    ),
    tag = "Browse"
)]
pub async fn home_page(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomePageDto>> {
    let home = state.services.post_queries.home_page().await.into_http()?;
    Ok(Json(home))
}
