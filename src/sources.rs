//! Collaborator traits for the I/O boundary.
//!
//! The core never performs network or disk access itself. Search backends
//! (vector stores, keyword indexes) implement [`CandidateSource`] and hand
//! the pipeline an over-fetched candidate batch; everything after that is
//! pure computation.
//!
//! ```rust,ignore
//! use brickrag::prelude::*;
//!
//! async fn example<S: CandidateSource>(source: &S) -> Result<(), RetrievalError> {
//!     let retriever = Retriever::builder().build();
//!     let result = retriever.retrieve(source, "payment plan", 3, 24).await?;
//!     println!("{} documents", result.documents.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

use crate::types::{Candidate, RetrievalError};

/// A search backend that supplies candidate chunks for a query.
///
/// Implementations are expected to over-fetch: the pipeline asks for
/// `overfetch` candidates (independent of the final `k`) and re-ranks them
/// lexically before diversity selection. Bounded latency, caching, and
/// retries are the implementation's concern — the core imposes no timeout
/// of its own.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fetch up to `overfetch` candidates relevant to `query`.
    ///
    /// Returning an empty batch is not an error; retrieval then yields an
    /// empty selection.
    async fn fetch(&self, query: &str, overfetch: usize)
    -> Result<Vec<Candidate>, RetrievalError>;
}
