// src/domain/post/services/mod.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostSlug, PostTitle};

const FALLBACK_SLUG_BASE: &str = "post";

/// Domain service responsible for producing unique slugs for posts.
///
/// The existence check is best effort. Two concurrent creations can both pass
/// it, so the store's unique constraint stays the final arbiter and callers
/// retry with [`PostSlugService::disambiguate`] on conflict.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    last_tick: AtomicI64,
}

impl PostSlugService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
            last_tick: AtomicI64::new(0),
        }
    }

    /// Slug derived from the title alone, or `None` when the title has no
    /// slug-able characters.
    pub fn base_slug(&self, title: &PostTitle) -> Option<String> {
        let base = self.generator.slugify(title.as_str());
        (!base.is_empty()).then_some(base)
    }

    pub async fn generate_unique_slug(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let Some(base) = self.base_slug(title) else {
            return self.disambiguate(FALLBACK_SLUG_BASE);
        };

        let candidate = PostSlug::new(base.clone())?;
        if self.read_repo.find_by_slug(&candidate).await?.is_none() {
            return Ok(candidate);
        }

        tracing::debug!(slug = %candidate, "slug already taken, appending disambiguator");
        self.disambiguate(&base)
    }

    /// Appends a fresh, strictly increasing tick to `base`.
    pub fn disambiguate(&self, base: &str) -> DomainResult<PostSlug> {
        PostSlug::new(format!("{base}-{}", self.next_tick()))
    }

    pub fn disambiguate_title(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = self
            .base_slug(title)
            .unwrap_or_else(|| FALLBACK_SLUG_BASE.to_string());
        self.disambiguate(&base)
    }

    fn next_tick(&self) -> i64 {
        let candidate = self.clock.now().timestamp_micros();
        let mut last = self.last_tick.load(Ordering::Acquire);
        loop {
            let next = candidate.max(last + 1);
            match self.last_tick.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}
