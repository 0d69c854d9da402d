use crate::error::{Result, SanitizeError};
use crate::policy::SanitizePolicy;
use crate::validator::ContentValidator;
use ammonia::Builder;
use serde::Serialize;

/// Result of a sanitization pass
#[derive(Debug, Clone, Serialize)]
pub struct SanitizeOutcome {
    /// The sanitized HTML
    pub sanitized: String,

    /// True if the output differs from the input in length or content.
    /// An approximate signal: any textual difference counts, including
    /// changes that do not alter semantics.
    pub was_sanitized: bool,

    /// Pre-validation findings for the input, in pattern order
    pub issues: Vec<String>,
}

/// Pluggable sanitization engine. The policy merge, pre-validation, and
/// change detection above it do not depend on which engine walks the DOM.
pub trait HtmlSanitizerEngine: Send + Sync {
    fn clean(&self, html: &str, policy: &SanitizePolicy) -> String;
}

/// Default engine backed by ammonia
#[derive(Debug, Clone, Default)]
pub struct AmmoniaEngine;

impl HtmlSanitizerEngine for AmmoniaEngine {
    fn clean(&self, html: &str, policy: &SanitizePolicy) -> String {
        let mut builder = Builder::default();

        builder.tags(policy.effective_tags());
        builder.generic_attributes(policy.effective_attributes());
        builder.url_schemes(policy.effective_url_schemes());
        builder.strip_comments(policy.strip_comments);

        // `rel` is part of the attribute allowlist, so the caller controls
        // it; ammonia must not also manage it
        builder.link_rel(None);

        builder.clean(html).to_string()
    }
}

/// Allowlist-based HTML sanitizer.
///
/// Removes every tag and attribute not in the effective policy. Text
/// content of removed nodes is preserved, so malicious markup degrades to
/// plain text rather than disappearing silently. Script and style element
/// bodies are the exception: they are dropped with the element.
pub struct HtmlSanitizer {
    policy: SanitizePolicy,
    engine: Box<dyn HtmlSanitizerEngine>,
}

impl HtmlSanitizer {
    /// Create a sanitizer with the default policy and engine
    pub fn new() -> Self {
        Self {
            policy: SanitizePolicy::new(),
            engine: Box::new(AmmoniaEngine),
        }
    }

    /// Use a custom policy
    pub fn with_policy(mut self, policy: SanitizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a custom sanitization engine
    pub fn with_engine(mut self, engine: Box<dyn HtmlSanitizerEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn policy(&self) -> &SanitizePolicy {
        &self.policy
    }

    /// Sanitize an HTML string.
    ///
    /// Pre-validation findings are logged and returned in the outcome but
    /// never alter sanitizer behavior. Never panics; any input yields a
    /// string result.
    pub fn sanitize(&self, html: &str) -> SanitizeOutcome {
        let report = ContentValidator::validate(html);
        for issue in &report.issues {
            tracing::warn!("pre-validation: {issue}");
        }

        let sanitized = self.engine.clean(html, &self.policy);
        let was_sanitized = sanitized != html;

        SanitizeOutcome {
            sanitized,
            was_sanitized,
            issues: report.issues,
        }
    }

    /// Sanitize and reject input that lost a large share of its content,
    /// which usually means it was mostly markup we refuse to keep
    pub fn sanitize_strict(&self, html: &str) -> Result<String> {
        let outcome = self.sanitize(html);

        if outcome.sanitized.len() < html.len() * 2 / 3 {
            return Err(SanitizeError::MaliciousContent(
                "Input contains suspicious HTML".to_string(),
            ));
        }

        Ok(outcome.sanitized)
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_script_tag() {
        let sanitizer = HtmlSanitizer::new();
        let outcome = sanitizer.sanitize(r#"<p>Hello</p><script>alert('XSS')</script>"#);

        assert!(!outcome.sanitized.to_lowercase().contains("<script"));
        assert!(!outcome.sanitized.contains("alert"));
        assert!(outcome.sanitized.contains("Hello"));
        assert!(outcome.was_sanitized);
    }

    #[test]
    fn test_keeps_text_of_removed_nodes() {
        let sanitizer = HtmlSanitizer::new();
        let outcome = sanitizer.sanitize("<form><p>keep me</p></form>");

        assert!(!outcome.sanitized.contains("<form"));
        assert!(outcome.sanitized.contains("keep me"));
    }

    #[test]
    fn test_removes_event_handlers() {
        let sanitizer = HtmlSanitizer::new();
        let outcome = sanitizer.sanitize(r##"<a href="#" onclick="alert(1)">Click</a>"##);

        assert!(!outcome.sanitized.contains("onclick"));
        assert!(outcome.sanitized.contains("Click"));
    }

    #[test]
    fn test_strips_javascript_scheme() {
        let sanitizer = HtmlSanitizer::new();
        let outcome = sanitizer.sanitize(r#"<a href="javascript:alert(1)">x</a>"#);

        assert!(!outcome.sanitized.contains("javascript:"));
    }

    #[test]
    fn test_data_urls_off_by_default() {
        let sanitizer = HtmlSanitizer::new();
        let outcome = sanitizer.sanitize(r#"<img src="data:image/png;base64,AAAA">"#);
        assert!(!outcome.sanitized.contains("data:"));

        let permissive =
            HtmlSanitizer::new().with_policy(SanitizePolicy::new().with_data_urls(true));
        let outcome = permissive.sanitize(r#"<img src="data:image/png;base64,AAAA">"#);
        assert!(outcome.sanitized.contains("data:image/png"));
    }

    #[test]
    fn test_unchanged_safe_html() {
        let sanitizer = HtmlSanitizer::new();
        let safe = "<p>Hello <strong>world</strong></p>";
        let outcome = sanitizer.sanitize(safe);

        assert_eq!(outcome.sanitized, safe);
        assert!(!outcome.was_sanitized);
    }

    #[test]
    fn test_idempotent() {
        let sanitizer = HtmlSanitizer::new();
        let dirty = r#"<div onclick="x()"><script>y</script><p>text</p></div>"#;

        let once = sanitizer.sanitize(dirty).sanitized;
        let twice = sanitizer.sanitize(&once);

        assert_eq!(once, twice.sanitized);
        assert!(!twice.was_sanitized);
    }

    #[test]
    fn test_policy_extension() {
        let sanitizer = HtmlSanitizer::new()
            .with_policy(SanitizePolicy::new().allow_tags(["video"]).allow_attributes(["controls"]));
        let outcome = sanitizer.sanitize(r#"<video controls src="https://example.com/v.mp4"></video>"#);

        assert!(outcome.sanitized.contains("<video"));
        assert!(outcome.sanitized.contains("controls"));
    }

    #[test]
    fn test_empty_input() {
        let sanitizer = HtmlSanitizer::new();
        let outcome = sanitizer.sanitize("");

        assert_eq!(outcome.sanitized, "");
        assert!(!outcome.was_sanitized);
    }

    #[test]
    fn test_issues_do_not_block() {
        let sanitizer = HtmlSanitizer::new();
        let outcome = sanitizer.sanitize("<script>alert(1)</script><p>ok</p>");

        assert!(!outcome.issues.is_empty());
        assert!(outcome.sanitized.contains("ok"));
    }

    #[test]
    fn test_sanitize_strict_rejects_suspicious() {
        let sanitizer = HtmlSanitizer::new();
        let suspicious = r#"<p>x</p><script>lots of malicious code here</script>"#;

        assert!(sanitizer.sanitize_strict(suspicious).is_err());
    }

    #[test]
    fn test_sanitize_strict_accepts_clean() {
        let sanitizer = HtmlSanitizer::new();
        let clean = "<p>Perfectly ordinary paragraph</p>";

        assert!(sanitizer.sanitize_strict(clean).is_ok());
    }
}
