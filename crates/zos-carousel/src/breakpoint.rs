//! Viewport-size buckets reported by the host's responsive monitor

use serde::{Deserialize, Serialize};

/// Named viewport-size bucket
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Phones
    Sm,
    /// Tablets
    Md,
    /// Everything else, including unknown tokens
    #[default]
    Default,
}

impl Breakpoint {
    /// Parse a size token; unknown tokens are `Default`
    ///
    /// Tokens read from CSS `content` arrive quoted, so quotes are stripped.
    pub fn from_token(token: &str) -> Self {
        match token.trim().trim_matches(|c| c == '"' || c == '\'') {
            "sm" => Breakpoint::Sm,
            "md" => Breakpoint::Md,
            _ => Breakpoint::Default,
        }
    }

    /// Check for the small bucket
    #[inline]
    pub fn is_small(self) -> bool {
        self == Breakpoint::Sm
    }
}

/// Source of the current breakpoint token
pub trait BreakpointSource {
    /// Current size token, e.g. `"sm"`, `"md"`, `"lg"`
    fn current_breakpoint(&self) -> String;

    /// Current token parsed into a bucket
    fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_token(&self.current_breakpoint())
    }
}

/// Breakpoint source that always reports the same token
#[derive(Clone, Debug, Default)]
pub struct FixedBreakpoint(pub String);

impl FixedBreakpoint {
    /// Create a source reporting `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl BreakpointSource for FixedBreakpoint {
    fn current_breakpoint(&self) -> String {
        self.0.clone()
    }
}

impl<F: Fn() -> String> BreakpointSource for F {
    fn current_breakpoint(&self) -> String {
        self()
    }
}
