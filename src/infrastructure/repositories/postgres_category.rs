// src/infrastructure/repositories/postgres_category.rs
use super::{error::to_count, map_sqlx};
use crate::domain::category::{Category, CategoryId, CategoryRepository, CategoryWithPostCount};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: Option<String>,
    icon_class: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct CategoryCountRow {
    #[sqlx(flatten)]
    category: CategoryRow,
    published_posts: i64,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: row.name,
            description: row.description,
            icon_class: row.icon_class,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description, icon_class, created_at FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, description, icon_class, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithPostCount>> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(
            "SELECT c.id, c.name, c.description, c.icon_class, c.created_at,
                    COUNT(p.id) AS published_posts
             FROM categories c
             LEFT JOIN posts p ON p.category_id = c.id AND p.is_published
             GROUP BY c.id
             ORDER BY c.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(CategoryWithPostCount {
                    category: Category::try_from(row.category)?,
                    published_posts: to_count(row.published_posts),
                })
            })
            .collect()
    }
}
