// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod comments;
pub mod dashboard;
pub mod home;
pub mod posts;
pub mod search;
