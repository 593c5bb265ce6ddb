// src/infrastructure/repositories/postgres_comment.rs
use super::{error::to_count, map_sqlx};
use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str =
    "id, post_id, author_id, parent_id, content, is_approved, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: i64,
    parent_id: Option<i64>,
    content: String,
    is_approved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            author_id: UserId::new(row.author_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            body: CommentBody::new(row.content)?,
            is_approved: row.is_approved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            post_id,
            author_id,
            parent_id,
            body,
            is_approved,
            created_at,
            updated_at,
        } = comment;

        let sql = format!(
            "INSERT INTO comments (post_id, author_id, parent_id, content, is_approved, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(post_id))
            .bind(i64::from(author_id))
            .bind(parent_id.map(i64::from))
            .bind(body.as_str())
            .bind(is_approved)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = $1 ORDER BY created_at, id"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(post_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn count_on_posts_by(&self, author_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM comments c JOIN posts p ON p.id = c.post_id WHERE p.author_id = $1",
        )
        .bind(i64::from(author_id))
        .fetch_one(&self.pool)
        .await
        .map(to_count)
        .map_err(map_sqlx)
    }
}
