// src/application/dto/mod.rs
pub mod auth;
pub mod blogs;
pub mod categories;
pub mod comments;
pub mod dashboard;
pub mod home;
pub mod pagination;
pub mod posts;
pub mod search;
pub mod serde_time;
pub mod users;

pub use auth::AuthenticatedUser;
pub use blogs::BlogSummaryDto;
pub use categories::{CategoryDto, CategoryWithCountDto};
pub use comments::{CommentDto, CommentThreadDto};
pub use dashboard::{DashboardDto, DashboardStatisticsDto};
pub use home::HomePageDto;
pub use pagination::PageMeta;
pub use posts::{PostDetailsDto, PostDto};
pub use search::SearchResultsDto;
pub use users::UserProfileDto;
