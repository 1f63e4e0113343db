use thiserror::Error;
use uacache_core::ParsedRecord;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed user agent: {0}")]
    Malformed(String),
}

/// Boundary to the actual detection engine.
///
/// Implementations own the parsing rules; the cache layer only routes
/// around them. Injected into [`crate::DetectorFactory`] at
/// construction, one instance per process or per request.
pub trait UserAgentParser: Send + Sync {
    fn parse(&self, user_agent: &str) -> Result<ParsedRecord, ParseError>;
}
