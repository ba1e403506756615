//! Endpoint configuration for the console
//!
//! The read and dispatch endpoints are external collaborators; the
//! console only needs their URLs and an optional bearer token for the
//! dispatch side. Values come from the environment with defaults
//! pointing at a locally running catalog service.

// ============================================================================
// Configuration
// ============================================================================

/// Environment variable naming the read endpoint
pub const READ_URL_VAR: &str = "BRAND_CONSOLE_READ_URL";

/// Environment variable naming the dispatch endpoint
pub const DISPATCH_URL_VAR: &str = "BRAND_CONSOLE_DISPATCH_URL";

/// Environment variable carrying the dispatch bearer token
pub const TOKEN_VAR: &str = "BRAND_CONSOLE_TOKEN";

const DEFAULT_READ_URL: &str = "http://localhost:3000/api/brands-proxy";
const DEFAULT_DISPATCH_URL: &str = "http://localhost:3000/api/brand-dispatch";

/// Endpoint configuration resolved from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Read endpoint serving the catalog as a JSON array
    pub read_url: String,
    /// Dispatch endpoint accepting `{id, <fields>, operation}` writes
    pub dispatch_url: String,
    /// Optional bearer token attached to dispatch requests
    pub token: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            read_url: DEFAULT_READ_URL.to_string(),
            dispatch_url: DEFAULT_DISPATCH_URL.to_string(),
            token: None,
        }
    }
}

impl ConsoleConfig {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            read_url: get(READ_URL_VAR).unwrap_or_else(|| DEFAULT_READ_URL.to_string()),
            dispatch_url: get(DISPATCH_URL_VAR).unwrap_or_else(|| DEFAULT_DISPATCH_URL.to_string()),
            token: get(TOKEN_VAR),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
