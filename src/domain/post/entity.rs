// src/domain/post/entity.rs
use crate::domain::blog::BlogId;
use crate::domain::category::CategoryId;
use crate::domain::post::value_objects::{PostBody, PostId, PostSlug, PostTitle, Tags};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub excerpt: Option<String>,
    pub body: PostBody,
    pub featured_image_url: Option<String>,
    pub author_id: UserId,
    pub blog_id: Option<BlogId>,
    pub category_id: Option<CategoryId>,
    pub meta_description: Option<String>,
    pub tags: Option<Tags>,
    pub is_published: bool,
    pub is_featured: bool,
    pub view_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author-editable fields shared by creation and update.
#[derive(Debug, Clone)]
pub struct PostContent {
    pub title: PostTitle,
    pub excerpt: Option<String>,
    pub body: PostBody,
    pub featured_image_url: Option<String>,
    pub blog_id: Option<BlogId>,
    pub category_id: Option<CategoryId>,
    pub meta_description: Option<String>,
    pub tags: Option<Tags>,
    pub is_featured: bool,
}

impl Post {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.is_published = true;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.is_published = false;
        self.published_at = None;
        self.updated_at = now;
    }

    /// Applies the requested publish flag. Returns `true` when the state changed;
    /// an unchanged flag leaves `published_at` untouched.
    pub fn apply_publish_flag(&mut self, publish: bool, now: DateTime<Utc>) -> bool {
        match (self.is_published, publish) {
            (false, true) => {
                self.publish(now);
                true
            }
            (true, false) => {
                self.unpublish(now);
                true
            }
            _ => false,
        }
    }

    pub fn set_content(&mut self, content: PostContent, now: DateTime<Utc>) {
        let PostContent {
            title,
            excerpt,
            body,
            featured_image_url,
            blog_id,
            category_id,
            meta_description,
            tags,
            is_featured,
        } = content;
        self.title = title;
        self.excerpt = excerpt;
        self.body = body;
        self.featured_image_url = featured_image_url;
        self.blog_id = blog_id;
        self.category_id = category_id;
        self.meta_description = meta_description;
        self.tags = tags;
        self.is_featured = is_featured;
        self.updated_at = now;
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: PostContent,
    pub slug: PostSlug,
    pub author_id: UserId,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// `published_at` is stamped with `now` exactly when `publish` is set.
    pub fn new(
        content: PostContent,
        slug: PostSlug,
        author_id: UserId,
        publish: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            content,
            slug,
            author_id,
            is_published: publish,
            published_at: publish.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = slug;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub content: Option<PostContent>,
    pub publish_state: Option<PublishStateUpdate>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: None,
            publish_state: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_publish_state(
        mut self,
        is_published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            is_published,
            published_at,
        });
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("title").unwrap(),
            slug: PostSlug::new("title").unwrap(),
            excerpt: None,
            body: PostBody::new("<p>body</p>").unwrap(),
            featured_image_url: None,
            author_id: UserId::new(1).unwrap(),
            blog_id: None,
            category_id: None,
            meta_description: None,
            tags: None,
            is_published: false,
            is_featured: false,
            view_count: 0,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn publish_sets_state() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        assert!(post.is_published);
        assert_eq!(post.published_at, Some(now));
        assert_eq!(post.updated_at, now);
    }

    #[test]
    fn unpublish_clears_timestamp() {
        let mut post = sample_post();
        let now = Utc::now();
        post.publish(now);
        let later = now + Duration::seconds(10);
        post.unpublish(later);
        assert!(!post.is_published);
        assert!(post.published_at.is_none());
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn unchanged_flag_keeps_published_at() {
        let mut post = sample_post();
        let first = Utc::now();
        assert!(post.apply_publish_flag(true, first));
        let later = first + Duration::minutes(5);
        assert!(!post.apply_publish_flag(true, later));
        assert_eq!(post.published_at, Some(first));
        assert!(!post.apply_publish_flag(true, later + Duration::minutes(5)));
        assert_eq!(post.published_at, Some(first));
    }

    #[test]
    fn new_post_stamps_published_at_only_when_published() {
        let now = Utc::now();
        let content = PostContent {
            title: PostTitle::new("title").unwrap(),
            excerpt: None,
            body: PostBody::new("<p>body</p>").unwrap(),
            featured_image_url: None,
            blog_id: None,
            category_id: None,
            meta_description: None,
            tags: None,
            is_featured: false,
        };
        let slug = PostSlug::new("title").unwrap();
        let author = UserId::new(1).unwrap();

        let draft = NewPost::new(content.clone(), slug.clone(), author, false, now);
        assert!(!draft.is_published);
        assert!(draft.published_at.is_none());

        let live = NewPost::new(content, slug, author, true, now);
        assert!(live.is_published);
        assert_eq!(live.published_at, Some(now));
    }
}
