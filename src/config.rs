//! Scanner policies.
//!
//! The reference scanner has a handful of behaviours that are arguably bugs
//! but that position-dependent tooling may rely on. Each one is a separate
//! switch here; `LexerConfig::default()` gives the normalised behaviour and
//! `LexerConfig::legacy()` reproduces the reference output.

use serde::{Deserialize, Serialize};

/// How reserved words are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatching {
    /// Scan the whole identifier, then look it up. `classify` is an identifier.
    #[default]
    WholeWord,
    /// Probe fixed-length prefixes with no boundary check. `classify` lexes
    /// as `class` followed by `ify`.
    Prefix,
}

/// When a line break bumps the line counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewlineTiming {
    /// The line increments as the `\n` itself is consumed.
    #[default]
    OnConsume,
    /// The line increments as soon as the cursor lands on a `\n`, and
    /// consuming the `\n` then counts as one more column on the new line.
    Lookahead,
}

/// Which cursor position a token reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionAnchor {
    /// Where the token text begins.
    #[default]
    Start,
    /// Where the cursor stands after the token was consumed.
    End,
}

/// What happens to a string literal or comment that hits end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnterminatedPolicy {
    #[default]
    Strict,
    /// Swallow everything up to end of input into one token.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    pub keywords: KeywordMatching,
    pub newlines: NewlineTiming,
    pub anchor: PositionAnchor,
    pub unterminated: UnterminatedPolicy,
}

impl LexerConfig {
    pub fn legacy() -> Self {
        Self {
            keywords: KeywordMatching::Prefix,
            newlines: NewlineTiming::Lookahead,
            anchor: PositionAnchor::End,
            unterminated: UnterminatedPolicy::Lenient,
        }
    }

    pub fn lenient(mut self) -> Self {
        self.unterminated = UnterminatedPolicy::Lenient;
        self
    }

    /// Parse a config from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
