//! End-to-end pipeline scenarios: raw markdown through pre-validation,
//! conversion, and sanitization, plus the CSP surface the hosting
//! application consumes.

use marksafe::prelude::*;
use marksafe_security::{recommended_csp, StaticHostEnvironment};

#[test]
fn test_heading_with_script_injection() {
    let parsed = MarkdownRenderer::new().render("# Hi\n<script>alert(1)</script>");

    assert!(parsed.html.contains("<h1>"));
    assert!(!parsed.html.to_lowercase().contains("<script"));
    assert!(!parsed.html.contains("alert(1)"));
}

#[test]
fn test_javascript_scheme_link() {
    let parsed = MarkdownRenderer::new().render("[x](javascript:alert(1))");

    assert!(!parsed.html.contains("javascript:"));
}

#[test]
fn test_excessive_tag_tokens() {
    let markdown = "<div>".repeat(1_500);

    let report = ContentValidator::validate(&markdown);
    assert!(!report.is_safe);
    assert!(report.issues.iter().any(|i| i.contains("excessive nesting")));

    // The sanitizer still returns a bounded string
    let parsed = MarkdownRenderer::new().render(&markdown);
    assert!(!parsed.html.is_empty());
    assert!(parsed.html.len() <= markdown.len() * 3);
}

#[test]
fn test_inline_styles_with_nonce_directive() {
    let header = CspConfig::new()
        .with_inline_styles(true)
        .with_nonce("abc123")
        .to_header_value();

    assert!(header.contains("style-src 'self' 'nonce-abc123'"));
}

#[test]
fn test_permissive_preset_img_src() {
    let header = recommended_csp(CspLevel::Permissive);

    let img_src = header
        .split("; ")
        .find(|d| d.starts_with("img-src"))
        .unwrap();
    assert!(img_src.contains("data:"));
    assert!(img_src.contains('*'));
}

#[test]
fn test_full_render_and_policy_flow() {
    // What a hosting application does once at configuration time...
    let nonce = generate_nonce();
    let header = CspConfig::new()
        .with_inline_styles(true)
        .with_nonce(&nonce)
        .to_header_value();
    assert!(header.contains(&format!("'nonce-{nonce}'")));

    let env = StaticHostEnvironment {
        policy: Some(header),
        inline_styles_allowed: true,
    };
    let compat = check_compatibility(&env);
    assert!(compat.compatible);

    // ...and per content edit
    let renderer = MarkdownRenderer::new();
    let parsed = renderer.render("**bold** [link](https://example.com)");

    assert!(parsed.html.contains("<strong>bold</strong>"));
    assert!(parsed.html.contains("https://example.com"));
}

#[test]
fn test_sanitize_twice_is_stable_end_to_end() {
    let renderer = MarkdownRenderer::new();
    let sanitizer = HtmlSanitizer::new();

    let parsed = renderer.render("# T\n<img src=x onerror=alert(1)>");
    let again = sanitizer.sanitize(&parsed.html);

    assert_eq!(parsed.html, again.sanitized);
    assert!(!again.was_sanitized);
}

#[test]
fn test_prevalidation_never_blocks_rendering() {
    let dirty = "<iframe src='https://evil.example'></iframe>\n\nreadable text";
    let report = ContentValidator::validate(dirty);
    assert!(!report.is_safe);

    let parsed = MarkdownRenderer::new().render(dirty);
    assert!(parsed.html.contains("readable text"));
}
