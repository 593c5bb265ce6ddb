// src/application/commands/posts/mod.rs
mod content;
mod create;
mod service;
mod update;

pub use content::{PostInput, PostInputBuilder};
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
