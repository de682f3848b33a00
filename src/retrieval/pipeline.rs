//! Retrieval orchestration: tokenize → score-rank → diversify.
//!
//! [`Retriever::rank`] is a pure function over an already-fetched candidate
//! batch; [`Retriever::retrieve`] is the async convenience that drives a
//! [`CandidateSource`] collaborator first. Fetching, caching, and latency
//! bounds all live on the collaborator side of that boundary.

use tracing::debug;

use crate::retrieval::mmr::{MmrConfig, MmrSelector};
use crate::retrieval::scorer::{RelevanceScorer, ScorerConfig};
use crate::retrieval::tokenizer::{QueryTokenizer, TokenizerConfig};
use crate::sources::CandidateSource;
use crate::types::{Candidate, CandidateMetadata, RetrievalError};

// ── SelectionResult ────────────────────────────────────────────────────

/// How a selection was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode {
    /// Scored and diversified via MMR.
    Mmr,
    /// Query produced no tokens; candidates returned in insertion order.
    InsertionOrder,
}

impl std::fmt::Display for RetrievalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mmr => write!(f, "mmr"),
            Self::InsertionOrder => write!(f, "insertion_order"),
        }
    }
}

/// Ordered retrieval output: at most `k` documents with their metadata,
/// in selection order.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    /// Selected document texts.
    pub documents: Vec<String>,
    /// Metadata parallel to `documents`.
    pub metadata: Vec<CandidateMetadata>,
    /// How the selection was produced.
    pub mode: RetrievalMode,
}

impl SelectionResult {
    /// Returns `true` when nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of selected documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

// ── Retriever ──────────────────────────────────────────────────────────

/// The retrieval pipeline: tokenizer + scorer + MMR selector.
#[derive(Debug, Clone, Default)]
pub struct Retriever {
    tokenizer: QueryTokenizer,
    scorer: RelevanceScorer,
    selector: MmrSelector,
}

impl Retriever {
    /// Create a new builder for constructing a `Retriever`.
    #[must_use]
    pub fn builder() -> RetrieverBuilder {
        RetrieverBuilder::default()
    }

    /// Build a retriever with all-default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Re-rank `candidates` for `query` and select up to `k`.
    ///
    /// Pure function of its inputs: no I/O, no shared state. An empty query
    /// token list is a defined fallback — the first `k` candidates are
    /// returned in their original order — not an error. Empty `candidates`
    /// yields an empty result.
    #[must_use]
    pub fn rank(&self, query: &str, candidates: Vec<Candidate>, k: usize) -> SelectionResult {
        let tokens = self.tokenizer.tokenize(query);
        debug!(token_count = tokens.len(), ?tokens, "query tokenized");

        if tokens.is_empty() {
            let picked: Vec<Candidate> = candidates.into_iter().take(k).collect();
            return Self::into_result(picked, RetrievalMode::InsertionOrder);
        }

        // Stable sort: equal scores keep their fetch order.
        let mut scored: Vec<(f64, Candidate)> = candidates
            .into_iter()
            .map(|c| (self.scorer.score(&c, &tokens), c))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        let ranked: Vec<Candidate> = scored.into_iter().map(|(_, c)| c).collect();

        let picked_indices = self.selector.select(&self.scorer, &ranked, &tokens, k);
        debug!(selected = ?picked_indices, "mmr selection complete");

        let mut by_index: Vec<Option<Candidate>> = ranked.into_iter().map(Some).collect();
        let picked: Vec<Candidate> = picked_indices
            .into_iter()
            .filter_map(|i| by_index[i].take())
            .collect();
        Self::into_result(picked, RetrievalMode::Mmr)
    }

    /// Fetch an over-fetched batch from `source`, then [`rank`](Self::rank).
    ///
    /// `overfetch` is independent of the final `k`; typical callers fetch
    /// an order of magnitude more than they keep.
    ///
    /// # Errors
    ///
    /// Propagates [`RetrievalError`] from the candidate source. The ranking
    /// itself cannot fail.
    pub async fn retrieve<S: CandidateSource + ?Sized>(
        &self,
        source: &S,
        query: &str,
        k: usize,
        overfetch: usize,
    ) -> Result<SelectionResult, RetrievalError> {
        let candidates = source.fetch(query, overfetch).await?;
        debug!(
            fetched = candidates.len(),
            k, overfetch, "candidate batch fetched"
        );
        let result = self.rank(query, candidates, k);
        debug!(mode = %result.mode, selected = result.len(), "retrieval complete");
        Ok(result)
    }

    fn into_result(picked: Vec<Candidate>, mode: RetrievalMode) -> SelectionResult {
        let mut documents = Vec::with_capacity(picked.len());
        let mut metadata = Vec::with_capacity(picked.len());
        for candidate in picked {
            documents.push(candidate.text);
            metadata.push(candidate.metadata);
        }
        SelectionResult {
            documents,
            metadata,
            mode,
        }
    }
}

// ── RetrieverBuilder ───────────────────────────────────────────────────

/// Builder for constructing [`Retriever`] instances.
#[derive(Debug, Default)]
pub struct RetrieverBuilder {
    tokenizer: Option<TokenizerConfig>,
    scorer: Option<ScorerConfig>,
    mmr: Option<MmrConfig>,
}

impl RetrieverBuilder {
    /// Set the tokenizer configuration.
    #[must_use]
    pub fn tokenizer(mut self, config: TokenizerConfig) -> Self {
        self.tokenizer = Some(config);
        self
    }

    /// Set the scorer configuration.
    #[must_use]
    pub fn scorer(mut self, config: ScorerConfig) -> Self {
        self.scorer = Some(config);
        self
    }

    /// Set the MMR configuration.
    #[must_use]
    pub fn mmr(mut self, config: MmrConfig) -> Self {
        self.mmr = Some(config);
        self
    }

    /// Build the [`Retriever`], filling unset pieces with defaults.
    #[must_use]
    pub fn build(self) -> Retriever {
        Retriever {
            tokenizer: QueryTokenizer::new(self.tokenizer.unwrap_or_default()),
            scorer: RelevanceScorer::new(self.scorer.unwrap_or_default()),
            selector: MmrSelector::new(self.mmr.unwrap_or_default()),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CandidateMetadata;

    fn meta(source: &str) -> CandidateMetadata {
        CandidateMetadata {
            source: source.into(),
            ..Default::default()
        }
    }

    #[test]
    fn payment_plan_query_ranks_payment_chunk_first() {
        let retriever = Retriever::with_defaults();
        let candidates = vec![
            Candidate::new("3 BHK pricing details").with_metadata(meta("brochureA")),
            Candidate::new("Payment plan: booking 10%, possession 90%")
                .with_metadata(meta("brochureA")),
        ];
        let result = retriever.rank("payment plan", candidates, 2);
        assert_eq!(result.mode, RetrievalMode::Mmr);
        assert!(result.documents[0].starts_with("Payment plan"));
    }

    #[test]
    fn empty_query_falls_back_to_insertion_order() {
        let retriever = Retriever::with_defaults();
        let candidates = vec![
            Candidate::new("first"),
            Candidate::new("second"),
            Candidate::new("third"),
        ];
        let result = retriever.rank("the of and", candidates, 2);
        assert_eq!(result.mode, RetrievalMode::InsertionOrder);
        assert_eq!(result.documents, vec!["first", "second"]);
    }

    #[test]
    fn empty_candidates_yield_empty_result() {
        let retriever = Retriever::with_defaults();
        let result = retriever.rank("payment plan", Vec::new(), 3);
        assert!(result.is_empty());
        assert!(result.metadata.is_empty());
    }

    #[test]
    fn result_length_never_exceeds_k() {
        let retriever = Retriever::with_defaults();
        let candidates = (0..10)
            .map(|i| Candidate::new(format!("payment item {i}")))
            .collect();
        let result = retriever.rank("payment", candidates, 3);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn metadata_stays_parallel_to_documents() {
        let retriever = Retriever::with_defaults();
        let candidates = vec![
            Candidate::new("pool and clubhouse amenities").with_metadata(meta("amenities.pdf")),
            Candidate::new("payment plan stages").with_metadata(meta("payment.pdf")),
        ];
        let result = retriever.rank("payment plan", candidates, 1);
        assert_eq!(result.documents.len(), result.metadata.len());
        assert_eq!(result.metadata[0].source, "payment.pdf");
    }
}
