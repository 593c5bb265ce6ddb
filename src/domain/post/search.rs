// src/domain/post/search.rs
use crate::domain::category::CategoryId;
use crate::domain::post::entity::Post;

/// One of the three mutually exclusive search modes. Every mode only
/// matches published posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Case-sensitive substring of title, body, excerpt or tags.
    Text(String),
    Category(CategoryId),
    /// Case-sensitive substring of the tag string.
    Tag(String),
}

impl SearchFilter {
    /// Picks the mode from the supplied inputs: text query, then category,
    /// then tag. Blank strings count as absent; any other term is matched
    /// exactly as given, surrounding whitespace included.
    pub fn select(
        query: Option<&str>,
        category_id: Option<CategoryId>,
        tag: Option<&str>,
    ) -> Option<Self> {
        if let Some(query) = query.filter(|q| !is_blank(q)) {
            return Some(Self::Text(query.to_string()));
        }
        if let Some(category_id) = category_id {
            return Some(Self::Category(category_id));
        }
        tag.filter(|t| !is_blank(t)).map(|t| Self::Tag(t.to_string()))
    }

    pub fn matches(&self, post: &Post) -> bool {
        if !post.is_published {
            return false;
        }

        match self {
            Self::Text(term) => {
                let term = term.as_str();
                post.title.as_str().contains(term)
                    || post.body.as_str().contains(term)
                    || post.excerpt.as_deref().is_some_and(|e| e.contains(term))
                    || post.tags.as_ref().is_some_and(|t| t.as_str().contains(term))
            }
            Self::Category(category_id) => post.category_id == Some(*category_id),
            Self::Tag(tag) => post
                .tags
                .as_ref()
                .is_some_and(|t| t.as_str().contains(tag.as_str())),
        }
    }
}

fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

/// 1-indexed offset pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Page numbers below 1 are treated as 1.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    pub fn total_pages(&self, total_items: u64) -> u64 {
        total_items.div_ceil(u64::from(self.per_page))
    }
}
