// src/application/dto/categories.rs
use crate::domain::category::{Category, CategoryWithPostCount};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_class: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
            description: category.description,
            icon_class: category.icon_class,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryWithCountDto {
    pub category: CategoryDto,
    pub published_posts: u64,
}

impl From<CategoryWithPostCount> for CategoryWithCountDto {
    fn from(value: CategoryWithPostCount) -> Self {
        Self {
            category: value.category.into(),
            published_posts: value.published_posts,
        }
    }
}
