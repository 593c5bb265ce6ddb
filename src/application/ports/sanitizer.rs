// src/application/ports/sanitizer.rs

/// Allowlist HTML filters. Both operations are pure and idempotent.
pub trait HtmlSanitizer: Send + Sync {
    /// Rich markup for post bodies.
    fn sanitize_for_authoring(&self, html: &str) -> String;
    /// Comment-grade markup.
    fn sanitize_for_display(&self, html: &str) -> String;
}
