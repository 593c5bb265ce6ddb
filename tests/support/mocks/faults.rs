// tests/support/mocks/faults.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quillpress_core::domain::{
    category::{Category, CategoryId, CategoryRepository, CategoryWithPostCount},
    errors::{DomainError, DomainResult},
    post::{NewPost, Post, PostId, PostUpdate, PostWriteRepository},
};

/// What a faulty insert reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertFault {
    /// A concurrent writer took the slug.
    SlugTaken,
    /// The backend is unreachable.
    StorageDown,
}

/// Fails the first `failures` inserts with `fault`, then delegates.
pub struct ConflictingPostWrites {
    inner: Arc<dyn PostWriteRepository>,
    fault: InsertFault,
    remaining: AtomicUsize,
    pub attempted_slugs: std::sync::Mutex<Vec<String>>,
}

impl ConflictingPostWrites {
    pub fn new(inner: Arc<dyn PostWriteRepository>, conflicts: usize) -> Self {
        Self::with_fault(inner, InsertFault::SlugTaken, conflicts)
    }

    pub fn with_fault(
        inner: Arc<dyn PostWriteRepository>,
        fault: InsertFault,
        failures: usize,
    ) -> Self {
        Self {
            inner,
            fault,
            remaining: AtomicUsize::new(failures),
            attempted_slugs: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempted_slugs.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostWriteRepository for ConflictingPostWrites {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.attempted_slugs
            .lock()
            .unwrap()
            .push(post.slug.as_str().to_string());
        let fail = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(match self.fault {
                InsertFault::SlugTaken => DomainError::Conflict("slug already exists".into()),
                InsertFault::StorageDown => {
                    DomainError::Persistence("connection reset by peer".into())
                }
            });
        }
        self.inner.insert(post).await
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        self.inner.update(update).await
    }

    async fn increment_view_count(&self, id: PostId) -> DomainResult<i64> {
        self.inner.increment_view_count(id).await
    }
}

/// Category store whose backend is down.
pub struct FailingCategories;

#[async_trait]
impl CategoryRepository for FailingCategories {
    async fn find_by_id(&self, _id: CategoryId) -> DomainResult<Option<Category>> {
        Err(DomainError::Persistence("connection refused (db.internal:5432)".into()))
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        Err(DomainError::Persistence("connection refused (db.internal:5432)".into()))
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithPostCount>> {
        Err(DomainError::Persistence("connection refused (db.internal:5432)".into()))
    }
}
