// src/application/ports/mod.rs
pub mod sanitizer;
pub mod time;
pub mod util;
