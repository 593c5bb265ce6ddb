// src/application/dto/dashboard.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{BlogSummaryDto, PostDto, UserProfileDto};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatisticsDto {
    pub total_posts: u64,
    pub total_views: u64,
    pub total_blogs: u64,
    /// Featured and published.
    pub featured_posts: u64,
    pub published_posts: u64,
    pub draft_posts: u64,
    /// Comments received on the user's posts.
    pub total_comments: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub user: UserProfileDto,
    pub statistics: DashboardStatisticsDto,
    pub recent_posts: Vec<PostDto>,
    pub blogs: Vec<BlogSummaryDto>,
}
