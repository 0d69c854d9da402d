//! CSP nonce generation

use rand::Rng;

/// Nonce length in raw bytes; hex encoding doubles it on the wire
pub const NONCE_LENGTH: usize = 16;

/// Source of cryptographically secure random bytes.
///
/// Injected rather than reached for globally so tests can supply
/// deterministic bytes.
pub trait RandomBytesSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]);
}

/// Default source backed by the thread-local CSPRNG
#[derive(Debug, Clone, Default)]
pub struct ThreadRngSource;

impl RandomBytesSource for ThreadRngSource {
    fn fill(&self, buf: &mut [u8]) {
        rand::thread_rng().fill(buf);
    }
}

/// Generates hex-encoded nonces for `'nonce-...'` CSP sources
pub struct NonceGenerator {
    source: Box<dyn RandomBytesSource>,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self {
            source: Box::new(ThreadRngSource),
        }
    }

    pub fn with_source(source: Box<dyn RandomBytesSource>) -> Self {
        Self { source }
    }

    /// Generate a fresh nonce: [`NONCE_LENGTH`] random bytes, hex-encoded
    pub fn generate(&self) -> String {
        let mut bytes = [0u8; NONCE_LENGTH];
        self.source.fill(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a nonce with the default random source
pub fn generate_nonce() -> String {
    NonceGenerator::new().generate()
}
