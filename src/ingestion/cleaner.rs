//! Brochure chrome and noise removal for raw OCR text.
//!
//! Brochure pages carry decoration that is poison for embeddings: standalone
//! header lines ("BROCHURE", "SITE PLAN", "FOLLOW US"), contact details,
//! URLs, and legal disclaimers. [`BrochureCleaner`] strips these before
//! chunking. Keep this narrowly focused on OCR text — curated database
//! fields do not go through here.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Standalone chrome lines: navigation labels, social links, legal headers.
static CHROME_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\s*(E-?BROCHURE|BROCHURE|SITE\s*PLAN|MASTER\s*PLAN|LOCATION(?:\s*MAP)?|APPLICATION\s*FORM|UNIT\s*PLAN|FLOOR\s*PLAN|WALK\s*THROUGH|IMAGES?|GALLERY|CONTACT|ENQUIRE\s*NOW|TERMS\s*&\s*CONDITIONS?|DISCLAIMER|LEGAL\s*DISCLAIMER|NOTES?|T&C|E&OE|RERA(?:\s*(?:NO\.?|NUMBER))?|UP\s*RERA|HARYANA\s*RERA|PRIVACY\s*POLICY|COOKIE\s*POLICY|COPYRIGHT|ALL\s*RIGHTS\s*RESERVED|FOLLOW\s*US|CONNECT\s*WITH\s*US|QR\s*CODE|SCAN\s*TO\s*(?:VIEW|DOWNLOAD|CALL|WHATSAPP)?|CALL|EMAIL|PHONE|MOBILE|WHATSAPP|WEBSITE|FACEBOOK|INSTAGRAM|YOUTUBE|LINKEDIN|TWITTER|X)\s*:?\s*$",
    )
    .expect("chrome line pattern compiles")
});

/// Inline fine print and fee jargon.
static FINE_PRINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Artist'?s\s*impression|Not\s*to\s*scale|For\s*representation\s*only|E&OE|GST\s*extra|GST\s*as\s*applicable|PLC|IDC|EDC|Stamp\s*duty|Registration|TDS|Cheque\s*in\s*favour\s*of|Bank\s*details",
    )
    .expect("fine print pattern compiles")
});

/// URLs and bare www. links.
static LINKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.[^\s]+").expect("link pattern compiles"));

/// E-mail addresses and phone numbers.
static CONTACTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[\w.+-]+@[\w-]+\.[\w.-]+\b|\+?\d[\d\s().-]{6,}\d")
        .expect("contact pattern compiles")
});

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("space run pattern compiles"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank run pattern compiles"));

// ── CleanerConfig ──────────────────────────────────────────────────────

/// Configuration for [`BrochureCleaner`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CleanerConfig {
    /// Minimum stripped length for a chunk to survive
    /// [`drop_too_small_chunks`](BrochureCleaner::drop_too_small_chunks).
    #[serde(default = "default_min_chunk_len")]
    pub min_chunk_len: usize,
}

fn default_min_chunk_len() -> usize {
    200
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            min_chunk_len: default_min_chunk_len(),
        }
    }
}

impl CleanerConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum chunk length.
    #[must_use]
    pub fn min_chunk_len(mut self, len: usize) -> Self {
        self.min_chunk_len = len;
        self
    }
}

// ── BrochureCleaner ────────────────────────────────────────────────────

/// Removes brochure chrome, contacts, and links from OCR text.
#[derive(Debug, Clone, Default)]
pub struct BrochureCleaner {
    config: CleanerConfig,
}

impl BrochureCleaner {
    /// Build a cleaner from the given configuration.
    #[must_use]
    pub fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    /// Build a cleaner with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CleanerConfig::default())
    }

    /// Clean raw brochure text before embedding.
    ///
    /// Normalizes bullets to `- `, removes chrome lines, fine print,
    /// links, and contacts, then collapses whitespace runs and excessive
    /// blank lines.
    #[must_use]
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut out = text.replace('•', "- ");
        out = CHROME_LINES.replace_all(&out, "").into_owned();
        out = FINE_PRINT.replace_all(&out, "").into_owned();
        out = LINKS.replace_all(&out, "").into_owned();
        out = CONTACTS.replace_all(&out, "").into_owned();
        out = SPACE_RUNS.replace_all(&out, " ").into_owned();
        out = BLANK_RUNS.replace_all(&out, "\n\n").into_owned();
        out.trim().to_string()
    }

    /// Filter out tiny chunks that add noise to embeddings.
    #[must_use]
    pub fn drop_too_small_chunks(&self, chunks: Vec<String>) -> Vec<String> {
        chunks
            .into_iter()
            .filter(|c| c.trim().chars().count() >= self.config.min_chunk_len)
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
