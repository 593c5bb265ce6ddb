// src/application/dto/search.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryDto, PageMeta, PostDto};

/// One page of matches plus the filters that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tag: Option<String>,
    pub posts: Vec<PostDto>,
    pub categories: Vec<CategoryDto>,
    pub pagination: PageMeta,
}
