//! Security policy utilities for Marksafe
//!
//! Derives a Content-Security-Policy consistent with sanitized markdown
//! output, generates nonces for marked inline content, and checks whether
//! the hosting environment's active policy will let that output render.
//!
//! # Example
//!
//! ```
//! use marksafe_security::{generate_nonce, CspConfig, CspLevel, recommended_csp};
//!
//! // Derive a policy from flags
//! let nonce = generate_nonce();
//! let header = CspConfig::new()
//!     .with_inline_styles(true)
//!     .with_nonce(&nonce)
//!     .to_header_value();
//! assert!(header.starts_with("default-src 'self'"));
//!
//! // Or take a named preset
//! let strict = recommended_csp(CspLevel::Strict);
//! assert!(!strict.contains("'unsafe-inline'"));
//! ```

pub mod compatibility;
pub mod content_security_policy;
pub mod nonce;

pub use compatibility::{
    check_compatibility, CspCompatibilityReport, HostEnvironment, StaticHostEnvironment,
};
pub use content_security_policy::{recommended_csp, CspConfig, CspLevel};
pub use nonce::{generate_nonce, NonceGenerator, RandomBytesSource, ThreadRngSource, NONCE_LENGTH};
