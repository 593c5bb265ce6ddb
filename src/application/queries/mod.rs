pub mod categories;
pub mod dashboard;
pub mod posts;
mod search;

/// Fixed page size of search and browse results.
pub const SEARCH_PAGE_SIZE: u32 = 10;
