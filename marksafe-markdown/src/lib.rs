//! # Marksafe Markdown
//!
//! Untrusted markdown in, injection-safe HTML out.
//!
//! ## Features
//!
//! - ✅ **GitHub-Flavored Conversion** - tables, strikethrough, footnotes, task lists
//! - ✅ **Allowlist Sanitization** - everything not explicitly permitted is removed
//! - ✅ **Advisory Pre-Validation** - dangerous patterns logged, never blocking
//! - ✅ **Graceful Degradation** - converter failures become a fixed error fragment
//! - ✅ **Swappable Engines** - converter and sanitizer sit behind traits
//!
//! ## Quick Start
//!
//! ```rust
//! use marksafe_markdown::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let parsed = renderer.render("# Hi\n<script>alert(1)</script>");
//!
//! assert!(parsed.html.contains("<h1>"));
//! assert!(!parsed.html.contains("script"));
//! assert!(parsed.was_sanitized);
//! ```
//!
//! The pipeline is synchronous and stateless: pre-validate, convert,
//! sanitize, return. Repeated calls are fully independent.

pub mod converter;
pub mod error;
pub mod renderer;

pub use converter::{CmarkConverter, MarkdownConverter};
pub use error::{MarkdownError, Result};
pub use renderer::{MarkdownRenderer, ParsedMarkdown, PARSE_ERROR_HTML};
