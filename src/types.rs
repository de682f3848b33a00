//! Core data types shared across the retrieval and ingestion modules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── CandidateMetadata ──────────────────────────────────────────────────

/// Metadata attached to one retrievable chunk.
///
/// The four string fields participate in the scorer's metadata boost;
/// `page` is carried through for source attribution only. Empty strings
/// mean "not provided" and contribute nothing to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMetadata {
    /// Source identifier, typically the brochure file name.
    #[serde(default)]
    pub source: String,
    /// Project label the chunk belongs to.
    #[serde(default)]
    pub project: String,
    /// Section label within the source document.
    #[serde(default)]
    pub section: String,
    /// Stable document id assigned at ingestion time.
    #[serde(default)]
    pub doc_id: String,
    /// 1-based page number in the source document, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl CandidateMetadata {
    /// Iterate the boost-eligible fields in their documented order.
    pub(crate) fn boost_fields(&self) -> [&str; 4] {
        [&self.source, &self.project, &self.section, &self.doc_id]
    }
}

// ── Candidate ──────────────────────────────────────────────────────────

/// One retrievable text chunk plus its metadata, as supplied by an
/// external fetch step. Immutable for the duration of a retrieval call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The chunk text.
    pub text: String,
    /// Attached metadata.
    #[serde(default)]
    pub metadata: CandidateMetadata,
}

impl Candidate {
    /// Create a candidate with default (empty) metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: CandidateMetadata::default(),
        }
    }

    /// Attach metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: CandidateMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

// ── RetrievalError ─────────────────────────────────────────────────────

/// Errors surfaced at the collaborator boundary.
///
/// The core itself degrades gracefully on malformed data and raises
/// nothing; this type exists for [`CandidateSource`](crate::sources::CandidateSource)
/// implementations whose backing search or store call can fail.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The candidate source (vector/keyword search) failed.
    #[error("candidate source failed: {0}")]
    Source(String),

    /// A collaborator returned data the caller contract forbids.
    #[error("collaborator contract violation: {0}")]
    Contract(String),
}

// ── Tests ──────────────────────────────────────────────────────────────
