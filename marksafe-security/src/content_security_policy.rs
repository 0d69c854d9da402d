//! Content Security Policy (CSP) derivation
//!
//! Builds a policy string consistent with sanitized markdown output:
//! scripts and objects locked down, styles/images/fonts opened exactly as
//! far as the caller's flags require.

use serde::{Deserialize, Serialize};

/// Flags from which a CSP directive string is derived.
///
/// Constructed per invocation, immutable, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CspConfig {
    /// Permit inline styles (via nonce when one is set, else 'unsafe-inline')
    pub allow_inline_styles: bool,

    /// Permit data: URLs in img-src
    pub allow_data_urls: bool,

    /// Extra trusted image hosts, appended verbatim in order
    pub image_domains: Vec<String>,

    /// Extra trusted font hosts, appended verbatim in order
    pub font_domains: Vec<String>,

    /// Nonce for marked inline content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

impl CspConfig {
    pub fn new() -> Self {
        Self {
            allow_inline_styles: false,
            allow_data_urls: false,
            image_domains: Vec::new(),
            font_domains: Vec::new(),
            nonce: None,
        }
    }

    pub fn with_inline_styles(mut self, allow: bool) -> Self {
        self.allow_inline_styles = allow;
        self
    }

    pub fn with_data_urls(mut self, allow: bool) -> Self {
        self.allow_data_urls = allow;
        self
    }

    pub fn with_image_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_domains.extend(domains.into_iter().map(Into::into));
        self
    }

    pub fn with_font_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_domains.extend(domains.into_iter().map(Into::into));
        self
    }

    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Convert to header value.
    ///
    /// Directive order is fixed for reproducibility: `default-src,
    /// script-src, object-src, base-uri, form-action, style-src, img-src,
    /// font-src, connect-src`. The same config always yields the same
    /// bytes. The string is usable both as an HTTP
    /// `Content-Security-Policy` header value and as the content of a
    /// `<meta http-equiv>` tag.
    pub fn to_header_value(&self) -> String {
        let mut directives = vec![
            "default-src 'self'".to_string(),
            "script-src 'self'".to_string(),
            "object-src 'none'".to_string(),
            "base-uri 'self'".to_string(),
            "form-action 'self'".to_string(),
        ];

        let mut style_src = vec!["'self'".to_string()];
        if self.allow_inline_styles {
            match &self.nonce {
                Some(nonce) => style_src.push(format!("'nonce-{nonce}'")),
                None => style_src.push("'unsafe-inline'".to_string()),
            }
        }
        directives.push(format!("style-src {}", style_src.join(" ")));

        let mut img_src = vec!["'self'".to_string()];
        if self.allow_data_urls {
            img_src.push("data:".to_string());
        }
        img_src.push("https:".to_string());
        img_src.extend(self.image_domains.iter().cloned());
        directives.push(format!("img-src {}", img_src.join(" ")));

        let mut font_src = vec!["'self'".to_string()];
        font_src.extend(self.font_domains.iter().cloned());
        directives.push(format!("font-src {}", font_src.join(" ")));

        directives.push("connect-src 'self'".to_string());

        directives.join("; ")
    }

    /// Render as a full `<meta http-equiv>` tag
    pub fn to_meta_tag(&self) -> String {
        format!(
            r#"<meta http-equiv="Content-Security-Policy" content="{}">"#,
            self.to_header_value()
        )
    }
}

impl Default for CspConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Named policy presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CspLevel {
    /// No inline styles, no data URLs, no extra domains
    Strict,
    /// Inline styles allowed, nothing else
    Moderate,
    /// Inline styles, data URLs, and wildcard image/font domains
    Permissive,
}

/// Map a named preset onto the builder
pub fn recommended_csp(level: CspLevel) -> String {
    let config = match level {
        CspLevel::Strict => CspConfig::new(),
        CspLevel::Moderate => CspConfig::new().with_inline_styles(true),
        CspLevel::Permissive => CspConfig::new()
            .with_inline_styles(true)
            .with_data_urls(true)
            .with_image_domains(["*"])
            .with_font_domains(["*"]),
    };
    config.to_header_value()
}
