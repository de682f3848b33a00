//! ```text
//! Query ──► retrieval::tokenizer ──► QueryTokens
//!                                        │
//! CandidateSource (over-fetch) ──► retrieval::pipeline::Retriever
//!                                        │
//!                                        ├─► retrieval::scorer   (overlap + metadata boost)
//!                                        └─► retrieval::mmr      (diversity-aware top-k)
//!
//! Page OCR text ──► ingestion::cleaner ──► ingestion::dedup ──► chunking & embedding
//!
//! Document text ──► tables::processor ─┬─► tables::extract   (HTML + pipe regions)
//!                                      ├─► tables::normalize (canonical markdown)
//!                                      ├─► tables::classify  (TableType)
//!                                      └─► TableInventory + table-free / labeled views
//! ```
//!
//! # brickrag
//!
//! **Lexical retrieval re-ranking and structured-table extraction for
//! real-estate brochure RAG pipelines.**
//!
//! `brickrag` is the algorithmic core of a brochure question-answering
//! assistant. It owns three things and nothing else:
//!
//! - **Retrieval re-ranking** — domain-aware query tokenization, lexical
//!   relevance scoring with metadata boosts and length normalization, and
//!   greedy diversity-aware selection (Maximal Marginal Relevance).
//! - **Table extraction** — locating HTML-tagged and pipe-delimited table
//!   regions in loosely formatted OCR text, repairing them into canonical
//!   markdown grids, and classifying them into a closed [`tables::TableType`]
//!   set.
//! - **Ingestion dedup** — frequency-based detection of boilerplate lines
//!   repeated across a document's pages.
//!
//! Everything with I/O in it (vector search, embeddings, OCR, persistence)
//! lives behind the collaborator traits in [`sources`]; the core itself is
//! pure, synchronous, and never fails on malformed input — OCR output is
//! expected to be imperfect, so ragged tables and unbalanced markup degrade
//! to best-effort results rather than errors.

pub mod ingestion;
pub mod retrieval;
pub mod sources;
pub mod tables;
pub mod types;

/// Re-exports for convenient access to core types.
pub mod prelude {
    pub use crate::ingestion::cleaner::{BrochureCleaner, CleanerConfig};
    pub use crate::ingestion::dedup::{RepeatedLineConfig, RepeatedLineDetector};
    pub use crate::retrieval::mmr::{MmrConfig, MmrSelector};
    pub use crate::retrieval::pipeline::{
        RetrievalMode, Retriever, RetrieverBuilder, SelectionResult,
    };
    pub use crate::retrieval::scorer::{RelevanceScorer, ScorerConfig};
    pub use crate::retrieval::tokenizer::{QueryTokenizer, TokenizerConfig};
    pub use crate::sources::CandidateSource;
    pub use crate::tables::{
        table_summary, ClassifierConfig, Table, TableClassifier, TableFormat, TableInventory,
        TableProcessor, TableType,
    };
    pub use crate::types::{Candidate, CandidateMetadata, RetrievalError};
}
