//! Greedy Maximal Marginal Relevance selection.
//!
//! Given a relevance-ranked candidate pool, repeatedly pick the candidate
//! maximizing `λ·relevance − (1−λ)·max_similarity_to_selected`. This is an
//! O(k·n) approximation algorithm by design: each pick is locally optimal
//! at selection time, with no claim that the final set is the best possible
//! k-subset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::retrieval::scorer::RelevanceScorer;
use crate::types::Candidate;

// ── MmrConfig ──────────────────────────────────────────────────────────

/// Configuration for [`MmrSelector`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MmrConfig {
    /// Relevance/diversity trade-off in \[0.0, 1.0\]; 1.0 disables the
    /// diversity penalty entirely.
    #[serde(default = "default_lambda")]
    pub lambda: f64,
}

fn default_lambda() -> f64 {
    0.75
}

impl Default for MmrConfig {
    fn default() -> Self {
        Self {
            lambda: default_lambda(),
        }
    }
}

impl MmrConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trade-off weight λ.
    #[must_use]
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }
}

// ── MmrSelector ────────────────────────────────────────────────────────

/// Diversity-aware top-k selector over a ranked candidate list.
#[derive(Debug, Clone, Default)]
pub struct MmrSelector {
    config: MmrConfig,
}

impl MmrSelector {
    /// Build a selector from the given configuration.
    #[must_use]
    pub fn new(config: MmrConfig) -> Self {
        Self { config }
    }

    /// Build a selector with default configuration (λ = 0.75).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(MmrConfig::default())
    }

    /// Select up to `k` candidate indices from `candidates`.
    ///
    /// `candidates` must already be sorted by descending relevance; the
    /// returned indices point into that slice, in selection order.
    /// Relevance is recomputed fresh per round via `scorer`; the diversity
    /// penalty compares lowercase whitespace word *sets* of the documents
    /// themselves, not the filtered query tokens. Ties go to the earliest
    /// remaining candidate, so the result is deterministic in input order.
    ///
    /// Callers with an empty `query_tokens` list should bypass MMR and
    /// take the first `k` candidates instead.
    #[must_use]
    pub fn select(
        &self,
        scorer: &RelevanceScorer,
        candidates: &[Candidate],
        query_tokens: &[String],
        k: usize,
    ) -> Vec<usize> {
        let word_sets: Vec<HashSet<String>> = candidates
            .iter()
            .map(|c| {
                c.text
                    .to_lowercase()
                    .split_whitespace()
                    .map(ToString::to_string)
                    .collect()
            })
            .collect();

        let lambda = self.config.lambda;
        let mut pool: Vec<usize> = (0..candidates.len()).collect();
        let mut selected: Vec<usize> = Vec::new();

        while !pool.is_empty() && selected.len() < k {
            let mut best: Option<usize> = None;
            let mut best_objective = f64::NEG_INFINITY;
            for (pos, &i) in pool.iter().enumerate() {
                let relevance = scorer.score(&candidates[i], query_tokens);
                let penalty = selected
                    .iter()
                    .map(|&j| token_set_similarity(&word_sets[i], &word_sets[j]))
                    .fold(0.0, f64::max);
                let objective = lambda * relevance - (1.0 - lambda) * penalty;
                // Strict comparison: first encountered wins ties.
                if objective > best_objective {
                    best = Some(pos);
                    best_objective = objective;
                }
            }
            match best {
                Some(pos) => selected.push(pool.remove(pos)),
                None => break,
            }
        }

        selected
    }
}

/// `|A∩B| / max(1, min(|A|, |B|))` over document word sets.
fn token_set_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    intersection as f64 / a.len().min(b.len()).max(1) as f64
}

// ── Tests ──────────────────────────────────────────────────────────────
