// src/application/queries/dashboard/mod.rs
mod service;
mod statistics;

pub use service::DashboardQueryService;
pub use statistics::RECENT_POSTS_LIMIT;
