// src/infrastructure/repositories/postgres_blog.rs
use super::{error::to_count, map_sqlx};
use crate::domain::blog::{Blog, BlogId, BlogRepository, BlogSummary};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    description: Option<String>,
    cover_image_url: Option<String>,
    owner_id: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct BlogSummaryRow {
    #[sqlx(flatten)]
    blog: BlogRow,
    post_count: i64,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId::new(row.id)?,
            title: row.title,
            description: row.description,
            cover_image_url: row.cover_image_url,
            owner_id: UserId::new(row.owner_id)?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_by_id(&self, id: BlogId) -> DomainResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            "SELECT id, title, description, cover_image_url, owner_id, is_active, created_at, updated_at
             FROM blogs WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Blog::try_from).transpose()
    }

    async fn list_active_by_owner(&self, owner: UserId) -> DomainResult<Vec<BlogSummary>> {
        let rows = sqlx::query_as::<_, BlogSummaryRow>(
            "SELECT b.id, b.title, b.description, b.cover_image_url, b.owner_id, b.is_active,
                    b.created_at, b.updated_at, COUNT(p.id) AS post_count
             FROM blogs b
             LEFT JOIN posts p ON p.blog_id = b.id
             WHERE b.owner_id = $1 AND b.is_active
             GROUP BY b.id
             ORDER BY b.created_at DESC, b.id DESC",
        )
        .bind(i64::from(owner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(BlogSummary {
                    blog: Blog::try_from(row.blog)?,
                    post_count: to_count(row.post_count),
                })
            })
            .collect()
    }

    async fn count_active_by_owner(&self, owner: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM blogs WHERE owner_id = $1 AND is_active",
        )
        .bind(i64::from(owner))
        .fetch_one(&self.pool)
        .await
        .map(to_count)
        .map_err(map_sqlx)
    }
}
