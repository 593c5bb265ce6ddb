// src/application/dto/home.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryDto, PostDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomePageDto {
    pub featured_posts: Vec<PostDto>,
    pub latest_posts: Vec<PostDto>,
    pub popular_posts: Vec<PostDto>,
    pub categories: Vec<CategoryDto>,
}
