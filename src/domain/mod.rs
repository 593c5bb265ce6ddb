// src/domain/mod.rs
pub mod blog;
pub mod category;
pub mod comment;
pub mod errors;
pub mod post;
pub mod sanitation;
pub mod user;
