// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_POST_BLOG: &str = "posts_blog_id_fkey";
const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";
const CNT_POST_PUBLISHED_CHECK: &str = "posts_published_requires_timestamp_chk";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_COMMENT_PARENT: &str = "comments_parent_id_fkey";
const CNT_CATEGORY_NAME: &str = "categories_name_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_CATEGORY_NAME => DomainError::Conflict("category name already exists".into()),
                    CNT_POST_AUTHOR | CNT_COMMENT_AUTHOR => {
                        DomainError::NotFound("author not found".into())
                    }
                    CNT_POST_BLOG => DomainError::NotFound("blog not found".into()),
                    CNT_POST_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_COMMENT_POST => DomainError::NotFound("post not found".into()),
                    CNT_COMMENT_PARENT => DomainError::NotFound("parent comment not found".into()),
                    CNT_POST_PUBLISHED_CHECK => {
                        DomainError::Validation("published posts require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Non-negative SQL aggregate as an unsigned count.
pub(super) fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}
