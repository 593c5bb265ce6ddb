// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use quillpress_core::domain::{
    blog::{Blog, BlogId},
    category::{Category, CategoryId},
    comment::{Comment, CommentBody, CommentId},
    post::{Post, PostBody, PostId, PostSlug, PostTitle, Tags},
    user::{EmailAddress, User, UserId},
};

use super::mocks::fixed_now;

pub fn user(id: i64) -> User {
    User {
        id: UserId::new(id).unwrap(),
        email: EmailAddress::new(format!("writer{id}@example.com")).unwrap(),
        first_name: "Writer".into(),
        last_name: format!("No{id}"),
        bio: None,
        profile_image_url: None,
        date_joined: fixed_now(),
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: name.into(),
        description: None,
        icon_class: None,
        created_at: fixed_now(),
    }
}

pub fn blog(id: i64, owner: i64) -> Blog {
    Blog {
        id: BlogId::new(id).unwrap(),
        title: format!("Blog {id}"),
        description: None,
        cover_image_url: None,
        owner_id: UserId::new(owner).unwrap(),
        is_active: true,
        created_at: fixed_now() + Duration::minutes(id),
        updated_at: fixed_now(),
    }
}

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    excerpt: Option<String>,
    author_id: i64,
    blog_id: Option<i64>,
    category_id: Option<i64>,
    tags: Option<String>,
    published: bool,
    featured: bool,
    view_count: i64,
    created_at: DateTime<Utc>,
}

impl PostBuilder {
    /// Draft by user 1, slug `post-<id>`, created `id` minutes after the fixture epoch.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Post {id}"),
            slug: format!("post-{id}"),
            body: "<p>Body</p>".into(),
            excerpt: None,
            author_id: 1,
            blog_id: None,
            category_id: None,
            tags: None,
            published: false,
            featured: false,
            view_count: 0,
            created_at: fixed_now() + Duration::minutes(id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn blog(mut self, blog_id: i64) -> Self {
        self.blog_id = Some(blog_id);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn views(mut self, view_count: i64) -> Self {
        self.view_count = view_count;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            excerpt: self.excerpt,
            body: PostBody::new(self.body).unwrap(),
            featured_image_url: None,
            author_id: UserId::new(self.author_id).unwrap(),
            blog_id: self.blog_id.map(|id| BlogId::new(id).unwrap()),
            category_id: self.category_id.map(|id| CategoryId::new(id).unwrap()),
            meta_description: None,
            tags: self.tags.as_deref().and_then(Tags::parse),
            is_published: self.published,
            is_featured: self.featured,
            view_count: self.view_count,
            published_at: self.published.then_some(self.created_at),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub struct CommentBuilder {
    id: i64,
    post_id: i64,
    author_id: i64,
    parent_id: Option<i64>,
    body: String,
    approved: bool,
}

impl CommentBuilder {
    pub fn new(id: i64, post_id: i64) -> Self {
        Self {
            id,
            post_id,
            author_id: 2,
            parent_id: None,
            body: format!("comment {id}"),
            approved: true,
        }
    }

    pub fn reply_to(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.approved = false;
        self
    }

    pub fn build(self) -> Comment {
        let at = fixed_now() + Duration::minutes(self.id);
        Comment {
            id: CommentId::new(self.id).unwrap(),
            post_id: PostId::new(self.post_id).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            parent_id: self.parent_id.map(|id| CommentId::new(id).unwrap()),
            body: CommentBody::new(self.body).unwrap(),
            is_approved: self.approved,
            created_at: at,
            updated_at: at,
        }
    }
}
