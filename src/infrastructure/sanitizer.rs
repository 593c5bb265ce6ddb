// src/infrastructure/sanitizer.rs
use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::application::ports::sanitizer::HtmlSanitizer;
use crate::domain::sanitation::{SanitationProfiles, SanitizationProfile};

// Dropped together with their content; ammonia refuses to both allow and purge a tag.
const PURGED_TAGS: [&str; 2] = ["script", "style"];

/// [`HtmlSanitizer`] backed by two immutable ammonia builders, one per profile.
pub struct AmmoniaHtmlSanitizer {
    authoring: Builder<'static>,
    display: Builder<'static>,
}

impl AmmoniaHtmlSanitizer {
    pub fn new(profiles: &SanitationProfiles) -> Self {
        Self {
            authoring: builder_for(profiles.authoring()),
            display: builder_for(profiles.display()),
        }
    }

    fn clean(builder: &Builder<'static>, html: &str) -> String {
        if html.trim().is_empty() {
            return String::new();
        }
        let cleaned = builder.clean(html).to_string();
        if cleaned.trim().is_empty() {
            String::new()
        } else {
            cleaned
        }
    }
}

fn builder_for(profile: &SanitizationProfile) -> Builder<'static> {
    let tags: HashSet<&'static str> = profile
        .tags()
        .iter()
        .copied()
        .filter(|tag| !PURGED_TAGS.contains(tag))
        .collect();

    let mut builder = Builder::default();
    builder
        .tags(tags)
        .clean_content_tags(PURGED_TAGS.into_iter().collect())
        .generic_attributes(profile.attributes().iter().copied().collect())
        .tag_attributes(HashMap::new())
        .url_schemes(profile.url_schemes().iter().copied().collect())
        .link_rel(None);

    if profile.allows_style() {
        builder.filter_style_properties(profile.css_properties().iter().copied().collect());
    }

    builder
}

impl HtmlSanitizer for AmmoniaHtmlSanitizer {
    fn sanitize_for_authoring(&self, html: &str) -> String {
        Self::clean(&self.authoring, html)
    }

    fn sanitize_for_display(&self, html: &str) -> String {
        Self::clean(&self.display, html)
    }
}
