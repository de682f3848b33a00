//! Lexical relevance scoring for one candidate against a token list.
//!
//! `score = (overlap + boost) × min(1.0, length_target / word_count)`
//!
//! Overlap counts space-delimited token hits in the candidate text; the
//! boost rewards tokens appearing inside designated metadata fields; the
//! length factor keeps very long chunks from dominating purely through
//! term repetition.

use serde::{Deserialize, Serialize};

use crate::types::Candidate;

// ── ScorerConfig ───────────────────────────────────────────────────────

/// Configuration for [`RelevanceScorer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScorerConfig {
    /// Weight added per (metadata field, query token) substring hit.
    #[serde(default = "default_metadata_boost")]
    pub metadata_boost: f64,
    /// Word-count floor; shorter candidates are treated as this long.
    #[serde(default = "default_length_floor")]
    pub length_floor: usize,
    /// Word count at which the normalization factor starts dropping below 1.
    #[serde(default = "default_length_target")]
    pub length_target: f64,
}

fn default_metadata_boost() -> f64 {
    1.5
}
fn default_length_floor() -> usize {
    50
}
fn default_length_target() -> f64 {
    600.0
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            metadata_boost: default_metadata_boost(),
            length_floor: default_length_floor(),
            length_target: default_length_target(),
        }
    }
}

impl ScorerConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-hit metadata boost weight.
    #[must_use]
    pub fn metadata_boost(mut self, weight: f64) -> Self {
        self.metadata_boost = weight;
        self
    }

    /// Set the word-count floor.
    #[must_use]
    pub fn length_floor(mut self, floor: usize) -> Self {
        self.length_floor = floor;
        self
    }

    /// Set the length-normalization target.
    #[must_use]
    pub fn length_target(mut self, target: f64) -> Self {
        self.length_target = target;
        self
    }
}

// ── RelevanceScorer ────────────────────────────────────────────────────

/// Computes a non-negative relevance score for one candidate.
///
/// Scores carry no meaning outside a single ranking pass and are not
/// comparable across queries. Callers with an empty token list must skip
/// the scorer entirely and fall back to insertion order.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    config: ScorerConfig,
}

impl RelevanceScorer {
    /// Build a scorer from the given configuration.
    #[must_use]
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Build a scorer with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ScorerConfig::default())
    }

    /// Score `candidate` against `query_tokens`.
    ///
    /// Each token in the list counts once per occurrence *in the list* —
    /// a query word repeated twice contributes twice — but multiple
    /// occurrences inside the document do not stack.
    #[must_use]
    pub fn score(&self, candidate: &Candidate, query_tokens: &[String]) -> f64 {
        let doc_lower = candidate.text.to_lowercase();
        // Boundary spaces so "cr" cannot match inside "score".
        let padded_doc = format!(" {doc_lower} ");

        let overlap = query_tokens
            .iter()
            .filter(|t| padded_doc.contains(&format!(" {t} ")))
            .count() as f64;

        let mut boost = 0.0;
        for field in candidate.metadata.boost_fields() {
            if field.is_empty() {
                continue;
            }
            let value = field.to_lowercase();
            let hits = query_tokens.iter().filter(|t| value.contains(t.as_str())).count();
            boost += self.config.metadata_boost * hits as f64;
        }

        let words = doc_lower.split_whitespace().count();
        let length = words.max(self.config.length_floor) as f64;
        let length_norm = (self.config.length_target / length).min(1.0);

        (overlap + boost) * length_norm
    }
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CandidateMetadata;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn counts_space_delimited_overlap_only() {
        let scorer = RelevanceScorer::with_defaults();
        let cand = Candidate::new("the final score is high");
        // "cr" appears inside "score" but not as a standalone word.
        assert_eq!(scorer.score(&cand, &toks(&["cr"])), 0.0);
        assert_eq!(scorer.score(&cand, &toks(&["score"])), 1.0);
    }

    #[test]
    fn repeated_query_token_counts_twice() {
        let scorer = RelevanceScorer::with_defaults();
        let cand = Candidate::new("payment plan details");
        let single = scorer.score(&cand, &toks(&["payment"]));
        let double = scorer.score(&cand, &toks(&["payment", "payment"]));
        assert!((double - 2.0 * single).abs() < 1e-9);
    }

    #[test]
    fn metadata_match_scores_strictly_higher() {
        let scorer = RelevanceScorer::with_defaults();
        let tokens = toks(&["sora", "brochure"]);
        let plain = Candidate::new("unit details for the project");
        let boosted = plain.clone().with_metadata(CandidateMetadata {
            source: "brochureA.pdf".into(),
            project: "Sora".into(),
            ..Default::default()
        });
        assert!(scorer.score(&boosted, &tokens) > scorer.score(&plain, &tokens));
    }

    #[test]
    fn long_documents_are_normalized_down() {
        let scorer = RelevanceScorer::with_defaults();
        let short = Candidate::new("possession in 2026");
        let long_text = format!("possession in 2026 {}", "filler ".repeat(1200));
        let long = Candidate::new(long_text);
        let tokens = toks(&["possession"]);
        assert!(scorer.score(&short, &tokens) > scorer.score(&long, &tokens));
    }

    #[test]
    fn short_documents_are_not_penalized_below_floor() {
        let scorer = RelevanceScorer::with_defaults();
        // 3 words, floored to 50: factor = min(1, 600/50) = 1.0.
        let cand = Candidate::new("payment plan clp");
        assert_eq!(scorer.score(&cand, &toks(&["payment", "plan"])), 2.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        let scorer = RelevanceScorer::with_defaults();
        let cand = Candidate::new("");
        assert_eq!(scorer.score(&cand, &toks(&["price"])), 0.0);
    }

    #[test]
    fn score_is_never_negative() {
        let scorer = RelevanceScorer::with_defaults();
        let cand = Candidate::new("completely unrelated text");
        assert!(scorer.score(&cand, &toks(&["₹1.2", "bhk"])) >= 0.0);
    }
}
