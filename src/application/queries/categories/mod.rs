// src/application/queries/categories/mod.rs
mod browse;
mod list;
mod service;

pub use browse::{BrowseCategoryQuery, BrowseTagQuery};
pub use service::CategoryQueryService;
