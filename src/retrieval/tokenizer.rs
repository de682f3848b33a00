//! Domain-aware query tokenization.
//!
//! [`QueryTokenizer`] turns a raw query string into an ordered list of
//! lowercase search tokens. Function words are dropped, but domain
//! vocabulary (unit/area/pricing jargon), numbers, and anything carrying a
//! unit or currency marker survive the stopword filter — "area" is a
//! stopword collision worth keeping, "the" is not.

use serde::{Deserialize, Serialize};

// ── TokenizerConfig ────────────────────────────────────────────────────

/// Configuration for [`QueryTokenizer`].
///
/// Uses a builder pattern — all setters are `#[must_use]`. The defaults
/// target Indian real-estate brochure vocabulary; swap the lists to retarget
/// the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TokenizerConfig {
    /// Function words dropped unless rescued by a keep rule.
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
    /// Domain vocabulary kept even on stopword collision.
    #[serde(default = "default_domain_terms")]
    pub domain_terms: Vec<String>,
    /// Substrings marking a word as a unit/currency token.
    #[serde(default = "default_unit_markers")]
    pub unit_markers: Vec<String>,
}

fn default_stopwords() -> Vec<String> {
    [
        "the", "a", "an", "and", "or", "of", "to", "in", "on", "for", "with", "at", "by", "from",
        "is", "are", "was", "were", "be", "as", "that", "this", "these", "those",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_domain_terms() -> Vec<String> {
    [
        "bhk",
        "sq",
        "sft",
        "sqft",
        "acre",
        "acres",
        "tower",
        "core",
        "aravalli",
        "gurgaon",
        "gurugram",
        "sector",
        "clp",
        "plp",
        "possession",
        "rera",
        "super",
        "area",
        "carpet",
        "price",
        "launch",
        "amenities",
        "lakh",
        "crore",
        "flexi",
        "payment",
        "green",
        "club",
        "wellness",
        "noida",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn default_unit_markers() -> Vec<String> {
    ["bhk", "sq", "ft", "sft", "₹", "cr", "lakh", "%"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            stopwords: default_stopwords(),
            domain_terms: default_domain_terms(),
            unit_markers: default_unit_markers(),
        }
    }
}

impl TokenizerConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword list.
    #[must_use]
    pub fn stopwords(mut self, words: Vec<String>) -> Self {
        self.stopwords = words;
        self
    }

    /// Replace the domain vocabulary list.
    #[must_use]
    pub fn domain_terms(mut self, terms: Vec<String>) -> Self {
        self.domain_terms = terms;
        self
    }

    /// Replace the unit/currency marker list.
    #[must_use]
    pub fn unit_markers(mut self, markers: Vec<String>) -> Self {
        self.unit_markers = markers;
        self
    }
}

// ── QueryTokenizer ─────────────────────────────────────────────────────

/// Turns a query string into a filtered, ordered token list.
#[derive(Debug, Clone, Default)]
pub struct QueryTokenizer {
    config: TokenizerConfig,
}

impl QueryTokenizer {
    /// Build a tokenizer from the given configuration.
    #[must_use]
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Build a tokenizer with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(TokenizerConfig::default())
    }

    /// Tokenize `query` into lowercase search tokens.
    ///
    /// Order is preserved and duplicates are kept — a word repeated in the
    /// query counts twice toward overlap scoring. An empty result is valid
    /// output; callers treat it as "no ranking signal" and fall back to
    /// insertion order.
    #[must_use]
    pub fn tokenize(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();
        // Everything outside the whitelist becomes a word separator.
        let sanitized: String = lowered
            .chars()
            .map(|ch| if is_safe_char(ch) { ch } else { ' ' })
            .collect();

        sanitized
            .split_whitespace()
            .filter(|word| self.keep(word))
            .map(ToString::to_string)
            .collect()
    }

    fn keep(&self, word: &str) -> bool {
        if !self.config.stopwords.iter().any(|s| s == word) {
            return true;
        }
        self.config.domain_terms.iter().any(|t| t == word)
            || is_numeric_token(word)
            || self.config.unit_markers.iter().any(|m| word.contains(m.as_str()))
    }
}

/// Whitelist: letters, digits, space, rupee sign, percent, period, slash,
/// hyphen. Applied after lowercasing.
fn is_safe_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, ' ' | '₹' | '.' | '%' | '/' | '-')
}

/// Purely numeric, optionally with a single decimal point ("10", "2.5").
fn is_numeric_token(word: &str) -> bool {
    let stripped = word.replacen('.', "", 1);
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

// ── Tests ──────────────────────────────────────────────────────────────
