// src/application/dto/pagination.rs
use crate::domain::post::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total_results: u64,
    pub total_pages: u64,
}

impl PageMeta {
    pub fn new(page: PageRequest, total_results: u64) -> Self {
        Self {
            current_page: page.page(),
            per_page: page.per_page(),
            total_results,
            total_pages: page.total_pages(total_results),
        }
    }

    /// Zero totals for a request that selected nothing.
    pub const fn empty(page: PageRequest) -> Self {
        Self {
            current_page: page.page(),
            per_page: page.per_page(),
            total_results: 0,
            total_pages: 0,
        }
    }
}
