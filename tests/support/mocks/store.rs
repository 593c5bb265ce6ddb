// tests/support/mocks/store.rs
use std::cmp::Reverse;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quillpress_core::{
    application::services::Repositories,
    domain::{
        blog::{Blog, BlogId, BlogRepository, BlogSummary},
        category::{Category, CategoryId, CategoryRepository, CategoryWithPostCount},
        comment::{Comment, CommentId, CommentRepository, NewComment},
        errors::{DomainError, DomainResult},
        post::{
            AuthorPostStats, NewPost, PageRequest, Post, PostId, PostReadRepository, PostSlug,
            PostUpdate, PostWriteRepository, PublishedListing, SearchFilter,
        },
        user::{User, UserId, UserRepository},
    },
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    categories: Vec<Category>,
    blogs: Vec<Blog>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl State {
    fn post_author(&self, post_id: PostId) -> Option<UserId> {
        self.posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| p.author_id)
    }
}

/// In-memory stand-in for the Postgres schema. Every repository handed out
/// by [`MemoryStore::repositories`] shares the same state, mirroring the
/// ordering and filtering of the SQL queries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

fn recency(post: &Post) -> Reverse<(chrono::DateTime<chrono::Utc>, PostId)> {
    Reverse((post.published_at.unwrap_or(post.created_at), post.id))
}

fn to_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            users: Arc::new(MemoryUsers(self.clone())),
            post_writes: Arc::new(MemoryPosts(self.clone())),
            post_reads: Arc::new(MemoryPosts(self.clone())),
            comments: Arc::new(MemoryComments(self.clone())),
            categories: Arc::new(MemoryCategories(self.clone())),
            blogs: Arc::new(MemoryBlogs(self.clone())),
        }
    }

    pub fn post_writes(&self) -> Arc<dyn PostWriteRepository> {
        Arc::new(MemoryPosts(self.clone()))
    }

    pub fn add_user(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    pub fn add_category(&self, category: Category) {
        self.state.lock().unwrap().categories.push(category);
    }

    pub fn add_blog(&self, blog: Blog) {
        self.state.lock().unwrap().blogs.push(blog);
    }

    pub fn add_post(&self, post: Post) {
        self.state.lock().unwrap().posts.push(post);
    }

    pub fn add_comment(&self, comment: Comment) {
        self.state.lock().unwrap().comments.push(comment);
    }

    pub fn post(&self, id: i64) -> Option<Post> {
        self.state
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| i64::from(p.id) == id)
            .cloned()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.lock().unwrap().posts.clone()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.state.lock().unwrap().comments.clone()
    }
}

pub struct MemoryUsers(MemoryStore);
pub struct MemoryPosts(MemoryStore);
pub struct MemoryComments(MemoryStore);
pub struct MemoryCategories(MemoryStore);
pub struct MemoryBlogs(MemoryStore);

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.0.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl PostWriteRepository for MemoryPosts {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.0.state.lock().unwrap();
        if state.posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let next_id = state.posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let content = post.content;
        let created = Post {
            id: PostId::new(next_id)?,
            title: content.title,
            slug: post.slug,
            excerpt: content.excerpt,
            body: content.body,
            featured_image_url: content.featured_image_url,
            author_id: post.author_id,
            blog_id: content.blog_id,
            category_id: content.category_id,
            meta_description: content.meta_description,
            tags: content.tags,
            is_published: post.is_published,
            is_featured: content.is_featured,
            view_count: 0,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.0.state.lock().unwrap();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == update.id && p.updated_at == update.original_updated_at)
            .ok_or_else(|| DomainError::Conflict("post update conflict, please retry".into()))?;

        if let Some(content) = update.content {
            let updated_at = post.updated_at;
            post.set_content(content, updated_at);
        }
        if let Some(publish) = update.publish_state {
            post.is_published = publish.is_published;
            post.published_at = publish.published_at;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn increment_view_count(&self, id: PostId) -> DomainResult<i64> {
        let mut state = self.0.state.lock().unwrap();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.view_count += 1;
        Ok(post.view_count)
    }
}

#[async_trait]
impl PostReadRepository for MemoryPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let state = self.0.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let state = self.0.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn search(
        &self,
        filter: &SearchFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let state = self.0.state.lock().unwrap();
        let mut matching: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by_key(recency);
        let total = to_u64(matching.len());
        let offset = usize::try_from(page.offset()).unwrap();
        let limit = usize::try_from(page.limit()).unwrap();
        let slice = matching.into_iter().skip(offset).take(limit).collect();
        Ok((slice, total))
    }

    async fn list_published(
        &self,
        listing: PublishedListing,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        let state = self.0.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.is_published)
            .filter(|p| listing != PublishedListing::Featured || p.is_featured)
            .cloned()
            .collect();
        match listing {
            PublishedListing::Popular => {
                posts.sort_by_key(|p| (Reverse(p.view_count), recency(p)));
            }
            PublishedListing::Featured | PublishedListing::Latest => posts.sort_by_key(recency),
        }
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn list_related(
        &self,
        post_id: PostId,
        category_id: CategoryId,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        let state = self.0.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.is_published && p.id != post_id && p.category_id == Some(category_id))
            .cloned()
            .collect();
        posts.sort_by_key(|p| (Reverse(p.view_count), Reverse(p.id)));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn list_recent_by_author(
        &self,
        author_id: UserId,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        let state = self.0.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by_key(|p| Reverse((p.created_at, p.id)));
        posts.truncate(limit as usize);
        Ok(posts)
    }

    async fn author_stats(&self, author_id: UserId) -> DomainResult<AuthorPostStats> {
        let state = self.0.state.lock().unwrap();
        let own: Vec<&Post> = state
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .collect();
        let published = own.iter().filter(|p| p.is_published).count();
        Ok(AuthorPostStats {
            total_posts: to_u64(own.len()),
            total_views: own
                .iter()
                .map(|p| u64::try_from(p.view_count).unwrap_or(0))
                .sum(),
            published_posts: to_u64(published),
            draft_posts: to_u64(own.len() - published),
            featured_posts: to_u64(
                own.iter()
                    .filter(|p| p.is_featured && p.is_published)
                    .count(),
            ),
        })
    }
}

#[async_trait]
impl CommentRepository for MemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.0.state.lock().unwrap();
        if !state.posts.iter().any(|p| p.id == comment.post_id) {
            return Err(DomainError::NotFound("referenced post does not exist".into()));
        }
        let next_id = state.comments.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        let created = Comment {
            id: CommentId::new(next_id)?,
            post_id: comment.post_id,
            author_id: comment.author_id,
            parent_id: comment.parent_id,
            body: comment.body,
            is_approved: comment.is_approved,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        };
        state.comments.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.0.state.lock().unwrap();
        Ok(state.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let state = self.0.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn count_on_posts_by(&self, author_id: UserId) -> DomainResult<u64> {
        let state = self.0.state.lock().unwrap();
        Ok(to_u64(
            state
                .comments
                .iter()
                .filter(|c| state.post_author(c.post_id) == Some(author_id))
                .count(),
        ))
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategories {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.0.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let state = self.0.state.lock().unwrap();
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithPostCount>> {
        let categories = self.list_all().await?;
        let state = self.0.state.lock().unwrap();
        Ok(categories
            .into_iter()
            .map(|category| {
                let published_posts = to_u64(
                    state
                        .posts
                        .iter()
                        .filter(|p| p.is_published && p.category_id == Some(category.id))
                        .count(),
                );
                CategoryWithPostCount {
                    category,
                    published_posts,
                }
            })
            .collect())
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogs {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        let state = self.0.state.lock().unwrap();
        Ok(state.blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn list_active_by_owner(&self, owner: UserId) -> DomainResult<Vec<BlogSummary>> {
        let state = self.0.state.lock().unwrap();
        let mut blogs: Vec<BlogSummary> = state
            .blogs
            .iter()
            .filter(|b| b.owner_id == owner && b.is_active)
            .map(|blog| BlogSummary {
                blog: blog.clone(),
                post_count: to_u64(
                    state
                        .posts
                        .iter()
                        .filter(|p| p.blog_id == Some(blog.id))
                        .count(),
                ),
            })
            .collect();
        blogs.sort_by_key(|s| Reverse((s.blog.created_at, s.blog.id.0)));
        Ok(blogs)
    }

    async fn count_active_by_owner(&self, owner: UserId) -> DomainResult<u64> {
        let state = self.0.state.lock().unwrap();
        Ok(to_u64(
            state
                .blogs
                .iter()
                .filter(|b| b.owner_id == owner && b.is_active)
                .count(),
        ))
    }
}
