use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Inputs longer than this are flagged unsafe. The validator never
/// truncates; it only reports.
pub const MAX_CONTENT_LENGTH: usize = 1_000_000;

/// Ceiling on tag-like substrings before content is flagged as
/// excessively nested. A cheap proxy for parse-tree depth, not a real
/// structural check.
pub const MAX_TAG_COUNT: usize = 1_000;

/// Raw tags flagged by the pre-validator regardless of context
const BLOCKED_TAGS: &[&str] = &[
    "script", "iframe", "object", "embed", "form", "input", "button", "select", "textarea",
    "style", "link", "meta", "base",
];

// Ordered list of (pattern, issue label) pairs, evaluated top to bottom
// against the raw text. Order is fixed so issue output is reproducible.
static DANGEROUS_PATTERNS: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    let mut patterns = vec![
        (
            Regex::new(r"(?i)javascript\s*:").unwrap(),
            "javascript: URL scheme".to_string(),
        ),
        (
            Regex::new(r"(?i)vbscript\s*:").unwrap(),
            "vbscript: URL scheme".to_string(),
        ),
        (
            Regex::new(r"(?i)data\s*:\s*text/html").unwrap(),
            "data:text/html URL".to_string(),
        ),
        (
            Regex::new(r"(?i)\bon\w+\s*=").unwrap(),
            "inline event handler attribute".to_string(),
        ),
    ];

    for tag in BLOCKED_TAGS {
        patterns.push((
            Regex::new(&format!(r"(?i)<\s*{tag}\b")).unwrap(),
            format!("disallowed <{tag}> tag"),
        ));
    }

    patterns
});

static TAG_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[a-zA-Z][a-zA-Z0-9-]*").unwrap());

/// Diagnostic report produced by the pre-validator. Advisory only: it
/// never blocks sanitization and never rewrites content.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityValidationReport {
    /// False if any dangerous pattern matched or a size/nesting limit
    /// was exceeded
    pub is_safe: bool,

    /// Human-readable findings, in pattern-list order
    pub issues: Vec<String>,

    /// The scanned text, unmodified
    pub sanitized_content: String,
}

/// Heuristic scanner for known-dangerous markup in raw text
pub struct ContentValidator;

impl ContentValidator {
    /// Scan raw text for dangerous patterns and structural limits.
    ///
    /// Never panics; worst case is a report with `is_safe = false` and a
    /// non-empty issue list.
    pub fn validate(content: &str) -> SecurityValidationReport {
        let mut issues = Vec::new();

        if content.chars().count() > MAX_CONTENT_LENGTH {
            issues.push(format!(
                "content exceeds maximum length of {MAX_CONTENT_LENGTH} characters"
            ));
        }

        for (pattern, label) in DANGEROUS_PATTERNS.iter() {
            if pattern.is_match(content) {
                issues.push(format!("dangerous pattern detected: {label}"));
            }
        }

        if TAG_LIKE.find_iter(content).count() > MAX_TAG_COUNT {
            issues.push(format!(
                "excessive nesting: more than {MAX_TAG_COUNT} HTML tags"
            ));
        }

        SecurityValidationReport {
            is_safe: issues.is_empty(),
            issues,
            sanitized_content: content.to_string(),
        }
    }

    /// Check whether text matches any dangerous pattern
    pub fn contains_dangerous(text: &str) -> bool {
        DANGEROUS_PATTERNS
            .iter()
            .any(|(pattern, _)| pattern.is_match(text))
    }
}
