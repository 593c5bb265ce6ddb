// src/domain/sanitation.rs
use std::collections::BTreeSet;

use crate::domain::errors::{DomainError, DomainResult};

/// Allowlist applied to untrusted HTML. Anything outside it is stripped.
///
/// Profiles are plain values: build them once at start-up and hand them to the
/// sanitizer adapter, which never mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationProfile {
    name: &'static str,
    tags: BTreeSet<&'static str>,
    attributes: BTreeSet<&'static str>,
    css_properties: BTreeSet<&'static str>,
    url_schemes: BTreeSet<&'static str>,
}

const URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

const AUTHORING_TAGS: &[&str] = &[
    "p", "br", "strong", "em", "u", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "a",
    "img", "blockquote", "div", "span", "table", "thead", "tbody", "tr", "td", "th", "pre", "code",
];

const AUTHORING_ATTRIBUTES: &[&str] = &["href", "src", "alt", "title", "class", "style"];

const AUTHORING_CSS: &[&str] = &[
    "color",
    "background-color",
    "font-size",
    "font-weight",
    "text-align",
    "margin",
    "padding",
    "border",
    "width",
    "height",
];

const DISPLAY_TAGS: &[&str] = &["p", "br", "strong", "em", "u", "a"];

const DISPLAY_ATTRIBUTES: &[&str] = &["href"];

impl SanitizationProfile {
    pub fn new(
        name: &'static str,
        tags: &[&'static str],
        attributes: &[&'static str],
        css_properties: &[&'static str],
        url_schemes: &[&'static str],
    ) -> Self {
        Self {
            name,
            tags: tags.iter().copied().collect(),
            attributes: attributes.iter().copied().collect(),
            css_properties: css_properties.iter().copied().collect(),
            url_schemes: url_schemes.iter().copied().collect(),
        }
    }

    /// Rich markup for long-form post bodies.
    pub fn authoring() -> Self {
        Self::new(
            "authoring",
            AUTHORING_TAGS,
            AUTHORING_ATTRIBUTES,
            AUTHORING_CSS,
            URL_SCHEMES,
        )
    }

    /// Minimal markup for comments.
    pub fn display() -> Self {
        Self::new("display", DISPLAY_TAGS, DISPLAY_ATTRIBUTES, &[], URL_SCHEMES)
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn tags(&self) -> &BTreeSet<&'static str> {
        &self.tags
    }

    pub const fn attributes(&self) -> &BTreeSet<&'static str> {
        &self.attributes
    }

    pub const fn css_properties(&self) -> &BTreeSet<&'static str> {
        &self.css_properties
    }

    pub const fn url_schemes(&self) -> &BTreeSet<&'static str> {
        &self.url_schemes
    }

    pub fn allows_style(&self) -> bool {
        self.attributes.contains("style")
    }

    /// True when every allowlist of `self` is contained in the matching list of `other`.
    pub fn is_within(&self, other: &Self) -> bool {
        self.tags.is_subset(&other.tags)
            && self.attributes.is_subset(&other.attributes)
            && self.css_properties.is_subset(&other.css_properties)
            && self.url_schemes.is_subset(&other.url_schemes)
    }
}

/// The pair of profiles used by the content pipeline.
#[derive(Debug, Clone)]
pub struct SanitationProfiles {
    authoring: SanitizationProfile,
    display: SanitizationProfile,
}

impl SanitationProfiles {
    /// Rejects a display profile that is more permissive than the authoring one.
    pub fn new(authoring: SanitizationProfile, display: SanitizationProfile) -> DomainResult<Self> {
        if !display.is_within(&authoring) {
            return Err(DomainError::Validation(format!(
                "sanitation profile '{}' must not exceed '{}'",
                display.name(),
                authoring.name()
            )));
        }
        Ok(Self { authoring, display })
    }

    pub const fn authoring(&self) -> &SanitizationProfile {
        &self.authoring
    }

    pub const fn display(&self) -> &SanitizationProfile {
        &self.display
    }
}
