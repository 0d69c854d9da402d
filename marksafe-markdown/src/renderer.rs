use crate::converter::{CmarkConverter, MarkdownConverter};
use marksafe_xss::{ContentValidator, HtmlSanitizer, SanitizePolicy};
use serde::Serialize;

/// Fixed fragment substituted when conversion fails. The renderer never
/// surfaces an error to the caller.
pub const PARSE_ERROR_HTML: &str = "<p>Error parsing markdown content</p>";

/// Sanitized render result
#[derive(Debug, Clone, Serialize)]
pub struct ParsedMarkdown {
    /// HTML safe to hand to the rendering surface
    pub html: String,

    /// True if sanitization changed the converted HTML in any textual way
    pub was_sanitized: bool,

    /// Pre-validation findings for the converted HTML, present only when
    /// something was altered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized_elements: Option<Vec<String>>,
}

/// The full pipeline: pre-validate raw text, convert markdown, sanitize
/// the HTML. Each call is independent and runs to completion; callers
/// debounce rapid successive invocations themselves.
pub struct MarkdownRenderer {
    converter: Box<dyn MarkdownConverter>,
    sanitizer: HtmlSanitizer,
}

impl MarkdownRenderer {
    /// Create a renderer with the default converter, policy, and engine
    pub fn new() -> Self {
        Self {
            converter: Box::new(CmarkConverter::new()),
            sanitizer: HtmlSanitizer::new(),
        }
    }

    /// Use a custom markdown converter
    pub fn with_converter(mut self, converter: Box<dyn MarkdownConverter>) -> Self {
        self.converter = converter;
        self
    }

    /// Widen the sanitization policy
    pub fn with_policy(mut self, policy: SanitizePolicy) -> Self {
        self.sanitizer = self.sanitizer.with_policy(policy);
        self
    }

    /// Use a fully custom sanitizer
    pub fn with_sanitizer(mut self, sanitizer: HtmlSanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Render untrusted markdown to sanitized HTML.
    ///
    /// Never panics and never returns an error: a failing converter is
    /// replaced by [`PARSE_ERROR_HTML`], and pre-validation findings are
    /// logged without blocking the pipeline.
    pub fn render(&self, markdown: &str) -> ParsedMarkdown {
        let report = ContentValidator::validate(markdown);
        for issue in &report.issues {
            tracing::warn!("markdown pre-validation: {issue}");
        }

        let html = match self.converter.convert(markdown) {
            Ok(html) => html,
            Err(err) => {
                tracing::error!("markdown conversion failed, substituting error fragment: {err}");
                PARSE_ERROR_HTML.to_string()
            }
        };

        let outcome = self.sanitizer.sanitize(&html);

        ParsedMarkdown {
            html: outcome.sanitized,
            was_sanitized: outcome.was_sanitized,
            sanitized_elements: outcome.was_sanitized.then_some(outcome.issues),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
