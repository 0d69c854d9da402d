use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tags permitted by every policy. Covers the structural, text-level,
/// list, and table markup that rendered markdown produces.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "p", "br", "hr", "div", "span", "blockquote", "pre", "code", "kbd", "samp", "var", "a", "em",
    "strong", "b", "i", "u", "s", "del", "ins", "mark", "small", "sub", "sup", "abbr", "cite",
    "q", "time", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "dl", "dt", "dd", "table",
    "thead", "tbody", "tfoot", "tr", "th", "td", "caption", "col", "colgroup", "img", "figure",
    "figcaption", "details", "summary", "section", "article", "aside", "header", "footer",
];

/// Attributes permitted by every policy: links, media, ARIA, and tabular
/// layout. `data-*` attributes are never allowed, regardless of policy.
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &[
    "href", "title", "target", "rel", "src", "alt", "width", "height", "class", "id", "lang",
    "dir", "colspan", "rowspan", "scope", "headers", "role", "aria-label", "aria-describedby",
    "aria-hidden", "start", "datetime",
];

/// URL schemes accepted in `href`/`src` values. `data` is appended only
/// when the policy opts in via `allow_data_urls`.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "callto", "cid", "xmpp"];

/// Allowlist configuration for HTML sanitization.
///
/// The sets here are *extensions*: the effective allowlists are always the
/// union of the built-in defaults and whatever the caller adds. There is no
/// way to drop a default-permitted tag or attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizePolicy {
    /// Extra tags permitted on top of [`DEFAULT_ALLOWED_TAGS`]
    pub allowed_tags: HashSet<String>,

    /// Extra attributes permitted on top of [`DEFAULT_ALLOWED_ATTRIBUTES`]
    pub allowed_attributes: HashSet<String>,

    /// Permit `data:` URLs in href/src values
    pub allow_data_urls: bool,

    /// Strip HTML comments from the output
    pub strip_comments: bool,
}

impl SanitizePolicy {
    pub fn new() -> Self {
        Self {
            allowed_tags: HashSet::new(),
            allowed_attributes: HashSet::new(),
            allow_data_urls: false,
            strip_comments: true,
        }
    }

    /// Permit additional tags beyond the defaults
    pub fn allow_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Permit additional attributes beyond the defaults
    pub fn allow_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_attributes
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Permit `data:` URLs in href/src values
    pub fn with_data_urls(mut self, allow: bool) -> Self {
        self.allow_data_urls = allow;
        self
    }

    /// Set whether to strip HTML comments
    pub fn with_strip_comments(mut self, strip: bool) -> Self {
        self.strip_comments = strip;
        self
    }

    /// Effective tag allowlist: defaults plus caller extensions
    pub fn effective_tags(&self) -> HashSet<&str> {
        DEFAULT_ALLOWED_TAGS
            .iter()
            .copied()
            .chain(self.allowed_tags.iter().map(String::as_str))
            .collect()
    }

    /// Effective attribute allowlist: defaults plus caller extensions
    pub fn effective_attributes(&self) -> HashSet<&str> {
        DEFAULT_ALLOWED_ATTRIBUTES
            .iter()
            .copied()
            .chain(self.allowed_attributes.iter().map(String::as_str))
            .collect()
    }

    /// Effective URL scheme allowlist
    pub fn effective_url_schemes(&self) -> HashSet<&str> {
        let mut schemes: HashSet<&str> = ALLOWED_URL_SCHEMES.iter().copied().collect();
        if self.allow_data_urls {
            schemes.insert("data");
        }
        schemes
    }
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self::new()
    }
}
