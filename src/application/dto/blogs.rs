// src/application/dto/blogs.rs
use crate::domain::blog::BlogSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogSummaryDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub is_active: bool,
    pub post_count: u64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<BlogSummary> for BlogSummaryDto {
    fn from(summary: BlogSummary) -> Self {
        let BlogSummary { blog, post_count } = summary;
        Self {
            id: blog.id.into(),
            title: blog.title,
            description: blog.description,
            cover_image_url: blog.cover_image_url,
            is_active: blog.is_active,
            post_count,
            created_at: blog.created_at,
        }
    }
}
