// src/application/commands/posts/content.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        blog::BlogId,
        category::CategoryId,
        post::{PostBody, PostContent, PostTitle, Tags},
        user::UserId,
    },
};

/// Author-supplied post fields, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: String,
    pub excerpt: Option<String>,
    /// Raw HTML; sanitized with the authoring profile before storage.
    pub content: String,
    pub featured_image_url: Option<String>,
    pub blog_id: Option<i64>,
    pub category_id: Option<i64>,
    pub meta_description: Option<String>,
    pub tags: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
}

impl PostInput {
    pub fn builder() -> PostInputBuilder {
        PostInputBuilder::default()
    }
}

#[derive(Default)]
pub struct PostInputBuilder {
    title: Option<String>,
    content: Option<String>,
    input: PostInput,
}

impl PostInputBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.input.excerpt = Some(excerpt.into());
        self
    }

    pub fn featured_image_url(mut self, url: impl Into<String>) -> Self {
        self.input.featured_image_url = Some(url.into());
        self
    }

    pub const fn blog_id(mut self, blog_id: i64) -> Self {
        self.input.blog_id = Some(blog_id);
        self
    }

    pub const fn category_id(mut self, category_id: i64) -> Self {
        self.input.category_id = Some(category_id);
        self
    }

    pub fn meta_description(mut self, meta: impl Into<String>) -> Self {
        self.input.meta_description = Some(meta.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.input.tags = Some(tags.into());
        self
    }

    pub const fn published(mut self, is_published: bool) -> Self {
        self.input.is_published = is_published;
        self
    }

    pub const fn featured(mut self, is_featured: bool) -> Self {
        self.input.is_featured = is_featured;
        self
    }

    pub fn build(self) -> Result<PostInput, &'static str> {
        Ok(PostInput {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            ..self.input
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl PostCommandService {
    /// Normalizes the input, sanitizes the body and resolves the category and
    /// blog references on behalf of `author`.
    pub(super) async fn build_content(
        &self,
        author: UserId,
        input: PostInput,
    ) -> ApplicationResult<PostContent> {
        let title = PostTitle::new(input.title)?;
        let body = PostBody::new(self.sanitizer.sanitize_for_authoring(&input.content))?;

        let category_id = match input.category_id {
            Some(raw) => {
                let id = CategoryId::new(raw)?;
                self.category_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("category not found"))?;
                Some(id)
            }
            None => None,
        };

        // Someone else's blog is reported exactly like a missing one.
        let blog_id = match input.blog_id {
            Some(raw) => {
                let id = BlogId::new(raw)?;
                self.blog_repo
                    .find_by_id(id)
                    .await?
                    .filter(|blog| blog.is_owned_by(author))
                    .ok_or_else(|| ApplicationError::not_found("blog not found"))?;
                Some(id)
            }
            None => None,
        };

        Ok(PostContent {
            title,
            excerpt: non_blank(input.excerpt),
            body,
            featured_image_url: non_blank(input.featured_image_url),
            blog_id,
            category_id,
            meta_description: non_blank(input.meta_description),
            tags: input.tags.as_deref().and_then(Tags::parse),
            is_featured: input.is_featured,
        })
    }
}
