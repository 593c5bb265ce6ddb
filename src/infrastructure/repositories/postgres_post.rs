// src/infrastructure/repositories/postgres_post.rs
use super::{error::to_count, map_sqlx};
use crate::domain::blog::BlogId;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AuthorPostStats, NewPost, PageRequest, Post, PostBody, PostContent, PostId,
    PostReadRepository, PostSlug, PostTitle, PostUpdate, PostWriteRepository, PublishedListing,
    SearchFilter, Tags,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, excerpt, content, featured_image_url, author_id, \
     blog_id, category_id, meta_description, tags, is_published, is_featured, view_count, \
     published_at, created_at, updated_at";

const RECENCY: &str = "COALESCE(published_at, created_at) DESC, id DESC";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    featured_image_url: Option<String>,
    author_id: i64,
    blog_id: Option<i64>,
    category_id: Option<i64>,
    meta_description: Option<String>,
    tags: Option<String>,
    is_published: bool,
    is_featured: bool,
    view_count: i64,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            excerpt: row.excerpt,
            body: PostBody::new(row.content)?,
            featured_image_url: row.featured_image_url,
            author_id: UserId::new(row.author_id)?,
            blog_id: row.blog_id.map(BlogId::new).transpose()?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            meta_description: row.meta_description,
            tags: row.tags.as_deref().and_then(Tags::parse),
            is_published: row.is_published,
            is_featured: row.is_featured,
            view_count: row.view_count,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AuthorStatsRow {
    total_posts: i64,
    total_views: i64,
    published_posts: i64,
    draft_posts: i64,
    featured_posts: i64,
}

fn rows_to_posts(rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    rows.into_iter().map(Post::try_from).collect()
}

fn push_content(builder: &mut QueryBuilder<'_, Postgres>, content: PostContent) {
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

    builder.push(", title = ");
    builder.push_bind(title.into_inner());
    builder.push(", excerpt = ");
    builder.push_bind(excerpt);
    builder.push(", content = ");
    builder.push_bind(body.into_inner());
    builder.push(", featured_image_url = ");
    builder.push_bind(featured_image_url);
    builder.push(", blog_id = ");
    builder.push_bind(blog_id.map(i64::from));
    builder.push(", category_id = ");
    builder.push_bind(category_id.map(i64::from));
    builder.push(", meta_description = ");
    builder.push_bind(meta_description);
    builder.push(", tags = ");
    builder.push_bind(tags.map(Tags::into_inner));
    builder.push(", is_featured = ");
    builder.push_bind(is_featured);
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            content,
            slug,
            author_id,
            is_published,
            published_at,
            created_at,
            updated_at,
        } = post;

        let sql = format!(
            "INSERT INTO posts (title, slug, excerpt, content, featured_image_url, author_id, blog_id,
                                category_id, meta_description, tags, is_published, is_featured,
                                published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(content.title.as_str())
            .bind(slug.as_str())
            .bind(content.excerpt.as_deref())
            .bind(content.body.as_str())
            .bind(content.featured_image_url.as_deref())
            .bind(i64::from(author_id))
            .bind(content.blog_id.map(i64::from))
            .bind(content.category_id.map(i64::from))
            .bind(content.meta_description.as_deref())
            .bind(content.tags.as_ref().map(Tags::as_str))
            .bind(is_published)
            .bind(content.is_featured)
            .bind(published_at)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            content,
            publish_state,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(content) = content {
            push_content(&mut builder, content);
        }

        if let Some(state) = publish_state {
            builder.push(", is_published = ");
            builder.push_bind(state.is_published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("post update conflict, please retry".into()))?;

        Post::try_from(row)
    }

    async fn increment_view_count(&self, id: PostId) -> DomainResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE posts SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

impl PostgresPostReadRepository {
    fn push_search_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &SearchFilter) {
        builder.push(" WHERE is_published = TRUE");
        match filter {
            SearchFilter::Text(term) => {
                builder.push(" AND (strpos(title, ");
                builder.push_bind(term.clone());
                builder.push(") > 0 OR strpos(content, ");
                builder.push_bind(term.clone());
                builder.push(") > 0 OR strpos(COALESCE(excerpt, ''), ");
                builder.push_bind(term.clone());
                builder.push(") > 0 OR strpos(COALESCE(tags, ''), ");
                builder.push_bind(term.clone());
                builder.push(") > 0)");
            }
            SearchFilter::Category(category_id) => {
                builder.push(" AND category_id = ");
                builder.push_bind(i64::from(*category_id));
            }
            SearchFilter::Tag(tag) => {
                builder.push(" AND strpos(COALESCE(tags, ''), ");
                builder.push_bind(tag.clone());
                builder.push(") > 0");
            }
        }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn search(
        &self,
        filter: &SearchFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(1) FROM posts");
        Self::push_search_filter(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        select.push(POST_COLUMNS);
        select.push(" FROM posts");
        Self::push_search_filter(&mut select, filter);
        select.push(" ORDER BY ");
        select.push(RECENCY);
        select.push(" LIMIT ");
        select.push_bind(i64::from(page.per_page()));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((rows_to_posts(rows)?, to_count(total)))
    }

    async fn list_published(
        &self,
        listing: PublishedListing,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        let (condition, order) = match listing {
            PublishedListing::Featured => (" AND is_featured", RECENCY.to_string()),
            PublishedListing::Latest => ("", RECENCY.to_string()),
            PublishedListing::Popular => ("", format!("view_count DESC, {RECENCY}")),
        };
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE is_published{condition} ORDER BY {order} LIMIT $1"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows_to_posts(rows)
    }

    async fn list_related(
        &self,
        post_id: PostId,
        category_id: CategoryId,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE is_published AND category_id = $1 AND id <> $2
             ORDER BY view_count DESC, id DESC LIMIT $3"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(category_id))
            .bind(i64::from(post_id))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows_to_posts(rows)
    }

    async fn list_recent_by_author(
        &self,
        author_id: UserId,
        limit: u32,
    ) -> DomainResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE author_id = $1
             ORDER BY created_at DESC, id DESC LIMIT $2"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(author_id))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows_to_posts(rows)
    }

    async fn author_stats(&self, author_id: UserId) -> DomainResult<AuthorPostStats> {
        let row = sqlx::query_as::<_, AuthorStatsRow>(
            "SELECT COUNT(1) AS total_posts,
                    COALESCE(SUM(view_count), 0)::BIGINT AS total_views,
                    COUNT(1) FILTER (WHERE is_published) AS published_posts,
                    COUNT(1) FILTER (WHERE NOT is_published) AS draft_posts,
                    COUNT(1) FILTER (WHERE is_featured AND is_published) AS featured_posts
             FROM posts WHERE author_id = $1",
        )
        .bind(i64::from(author_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(AuthorPostStats {
            total_posts: to_count(row.total_posts),
            total_views: to_count(row.total_views),
            published_posts: to_count(row.published_posts),
            draft_posts: to_count(row.draft_posts),
            featured_posts: to_count(row.featured_posts),
        })
    }
}
