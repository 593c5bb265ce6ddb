// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Deterministic URL-safe form of `input`; empty when nothing usable remains.
    fn slugify(&self, input: &str) -> String;
}
