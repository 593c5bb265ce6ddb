// src/application/dto/posts.rs
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CommentThreadDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Sanitized HTML.
    pub content: String,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    pub author_id: i64,
    #[serde(default)]
    pub blog_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Comma separated, as entered.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub view_count: i64,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let tag_list = post.tags.as_ref().map(|t| t.list()).unwrap_or_default();
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt,
            content: post.body.into_inner(),
            featured_image_url: post.featured_image_url,
            author_id: post.author_id.into(),
            blog_id: post.blog_id.map(Into::into),
            category_id: post.category_id.map(Into::into),
            meta_description: post.meta_description,
            tags: post.tags.map(|t| t.into_inner()),
            tag_list,
            is_published: post.is_published,
            is_featured: post.is_featured,
            view_count: post.view_count,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Post page: the post, its approved comment thread and related reading.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailsDto {
    pub post: PostDto,
    pub comments: Vec<CommentThreadDto>,
    pub related_posts: Vec<PostDto>,
}
