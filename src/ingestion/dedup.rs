//! Cross-page repeated-line detection.
//!
//! Brochure OCR output repeats header/footer chrome ("BROCHURE",
//! confidentiality footers, RERA numbers) on most pages. Lines that recur
//! on enough pages are boilerplate, not content, and are stripped before
//! chunking. Matching is exact-string only: a one-character OCR variant
//! between pages is treated as a different line (documented limitation —
//! no fuzzy matching here).

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

// ── RepeatedLineConfig ─────────────────────────────────────────────────

/// Configuration for [`RepeatedLineDetector`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RepeatedLineConfig {
    /// Minimum number of pages a line must appear on to count as
    /// boilerplate; also the minimum page count for detection to run at
    /// all.
    #[serde(default = "default_min_pages")]
    pub min_pages: usize,
    /// Minimum stripped line length considered; shorter lines are too
    /// generic to call repeated.
    #[serde(default = "default_min_line_len")]
    pub min_line_len: usize,
}

fn default_min_pages() -> usize {
    3
}
fn default_min_line_len() -> usize {
    15
}

impl Default for RepeatedLineConfig {
    fn default() -> Self {
        Self {
            min_pages: default_min_pages(),
            min_line_len: default_min_line_len(),
        }
    }
}

impl RepeatedLineConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum page count.
    #[must_use]
    pub fn min_pages(mut self, pages: usize) -> Self {
        self.min_pages = pages;
        self
    }

    /// Set the minimum stripped line length.
    #[must_use]
    pub fn min_line_len(mut self, len: usize) -> Self {
        self.min_line_len = len;
        self
    }
}

// ── RepeatedLineDetector ───────────────────────────────────────────────

/// Finds and strips lines recurring across a document's pages.
#[derive(Debug, Clone, Default)]
pub struct RepeatedLineDetector {
    config: RepeatedLineConfig,
}

impl RepeatedLineDetector {
    /// Build a detector from the given configuration.
    #[must_use]
    pub fn new(config: RepeatedLineConfig) -> Self {
        Self { config }
    }

    /// Build a detector with default configuration (N = 3, L = 15).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RepeatedLineConfig::default())
    }

    /// Detect boilerplate lines across `pages`.
    ///
    /// Returns the set of exact stripped lines appearing on at least
    /// `min_pages` pages. Fewer than `min_pages` pages is not enough
    /// signal, so the result is empty — not an error.
    #[must_use]
    pub fn detect(&self, pages: &[String]) -> BTreeSet<String> {
        if pages.len() < self.config.min_pages {
            return BTreeSet::new();
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for page in pages {
            for line in page.lines() {
                let stripped = line.trim();
                if stripped.chars().count() >= self.config.min_line_len {
                    *counts.entry(stripped).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .filter(|&(_, count)| count >= self.config.min_pages)
            .map(|(line, _)| line.to_string())
            .collect()
    }

    /// Remove every line whose stripped form is in `repeated` and rejoin.
    #[must_use]
    pub fn strip_page(&self, page: &str, repeated: &BTreeSet<String>) -> String {
        page.lines()
            .filter(|line| !repeated.contains(line.trim()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// [`detect`](Self::detect) followed by [`strip_page`](Self::strip_page)
    /// over every page.
    #[must_use]
    pub fn strip_pages(&self, pages: &[String]) -> Vec<String> {
        let repeated = self.detect(pages);
        pages
            .iter()
            .map(|page| self.strip_page(page, &repeated))
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
