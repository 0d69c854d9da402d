//! CSP compatibility checking
//!
//! Answers whether sanitized markdown will actually render under the
//! policy already in force in the hosting environment. Advisory only: the
//! result is data, never an error, and it does not block rendering.

use serde::Serialize;

/// Capabilities of the page or process hosting the rendered output.
///
/// A browser host would read the active policy and attempt to apply an
/// inline style; headless hosts can answer from configuration via
/// [`StaticHostEnvironment`].
pub trait HostEnvironment {
    /// The CSP currently in force, if any is declared
    fn declared_policy(&self) -> Option<String>;

    /// Whether the environment permits applying an inline style
    fn inline_style_allowed(&self) -> bool;
}

/// Host answers supplied up front, for tests and headless hosts
#[derive(Debug, Clone)]
pub struct StaticHostEnvironment {
    pub policy: Option<String>,
    pub inline_styles_allowed: bool,
}

impl HostEnvironment for StaticHostEnvironment {
    fn declared_policy(&self) -> Option<String> {
        self.policy.clone()
    }

    fn inline_style_allowed(&self) -> bool {
        self.inline_styles_allowed
    }
}

/// Outcome of probing the hosting environment
#[derive(Debug, Clone, Serialize)]
pub struct CspCompatibilityReport {
    /// True iff no issues were found; recommendations may still be present
    pub compatible: bool,

    /// Conditions that will break rendering
    pub issues: Vec<String>,

    /// Non-blocking suggestions
    pub recommendations: Vec<String>,
}

/// Probe the hosting environment and report whether sanitized output will
/// render correctly under its policy
pub fn check_compatibility(env: &dyn HostEnvironment) -> CspCompatibilityReport {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if env.declared_policy().is_none() {
        recommendations.push(
            "No Content-Security-Policy detected; consider declaring one via an HTTP header or meta tag".to_string(),
        );
    }

    if !env.inline_style_allowed() {
        issues.push("Current policy blocks inline styles".to_string());
        recommendations.push(
            "Allow inline styles through a 'nonce-...' source or 'unsafe-inline' in style-src".to_string(),
        );
    }

    CspCompatibilityReport {
        compatible: issues.is_empty(),
        issues,
        recommendations,
    }
}
