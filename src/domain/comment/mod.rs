// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;
pub mod thread;

pub use entity::{Comment, CommentBody, CommentId, NewComment};
pub use repository::CommentRepository;
pub use thread::{CommentNode, build_thread};
