//! # Marksafe XSS Protection
//!
//! Allowlist-based HTML sanitization for untrusted, user-authored content.
//!
//! ## Features
//!
//! - ✅ **HTML Sanitization** - Remove dangerous HTML/JavaScript via allowlist
//! - ✅ **Security Pre-Validation** - Non-blocking scan for known attack patterns
//! - ✅ **Widening-Only Policies** - Callers extend the defaults, never shrink them
//! - ✅ **URL Scheme Filtering** - `javascript:`/`vbscript:` never survive
//! - ✅ **Pluggable Engine** - Swap the DOM-walking engine behind a trait
//!
//! ## Quick Start
//!
//! ```rust
//! use marksafe_xss::{ContentValidator, HtmlSanitizer, SanitizePolicy};
//!
//! // Advisory scan of raw text (for logging/telemetry)
//! let report = ContentValidator::validate("<script>alert('XSS')</script>");
//! assert!(!report.is_safe);
//!
//! // Sanitize HTML
//! let sanitizer = HtmlSanitizer::new();
//! let outcome = sanitizer.sanitize("<p>Hi</p><script>alert('XSS')</script>");
//! assert!(!outcome.sanitized.contains("script"));
//! assert!(outcome.was_sanitized);
//!
//! // Widen the policy
//! let sanitizer = HtmlSanitizer::new()
//!     .with_policy(SanitizePolicy::new().allow_tags(["video"]));
//! ```
//!
//! ## Sanitization semantics
//!
//! Everything not explicitly permitted is removed. Text content of removed
//! nodes is preserved, so malicious markup degrades to readable plain text
//! instead of disappearing silently; script and style bodies are dropped
//! with their elements.
//!
//! ```rust
//! use marksafe_xss::HtmlSanitizer;
//!
//! let outcome = HtmlSanitizer::new().sanitize("<form><p>keep me</p></form>");
//! assert!(!outcome.sanitized.contains("<form"));
//! assert!(outcome.sanitized.contains("keep me"));
//! ```
//!
//! ## Pre-validation
//!
//! The pre-validator is diagnostic only. Its findings are surfaced in the
//! sanitize outcome and logged, but never change what the sanitizer does:
//!
//! ```rust
//! use marksafe_xss::ContentValidator;
//!
//! assert!(ContentValidator::contains_dangerous("<iframe src='x'>"));
//! assert!(!ContentValidator::contains_dangerous("<p>Hello world</p>"));
//! ```

pub mod error;
pub mod policy;
pub mod sanitizer;
pub mod validator;

pub use error::{Result, SanitizeError};
pub use policy::{
    SanitizePolicy, ALLOWED_URL_SCHEMES, DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS,
};
pub use sanitizer::{AmmoniaEngine, HtmlSanitizer, HtmlSanitizerEngine, SanitizeOutcome};
pub use validator::{
    ContentValidator, SecurityValidationReport, MAX_CONTENT_LENGTH, MAX_TAG_COUNT,
};
