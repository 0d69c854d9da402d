// Marksafe - markdown rendering and sanitization pipeline
//
// Converts untrusted, user-authored markdown into HTML that is safe to
// inject into a page, and derives a Content-Security-Policy consistent
// with that HTML.

// Re-export core sanitization
pub use marksafe_xss::*;

// Re-export optional crates
#[cfg(feature = "markdown")]
pub use marksafe_markdown;

#[cfg(feature = "security")]
pub use marksafe_security;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ContentValidator,
        HtmlSanitizer,
        HtmlSanitizerEngine,
        SanitizeOutcome,
        SanitizePolicy,
        SecurityValidationReport,
    };

    #[cfg(feature = "markdown")]
    pub use marksafe_markdown::{MarkdownConverter, MarkdownRenderer, ParsedMarkdown};

    #[cfg(feature = "security")]
    pub use marksafe_security::{
        check_compatibility, generate_nonce, CspConfig, CspLevel, HostEnvironment,
    };
}
