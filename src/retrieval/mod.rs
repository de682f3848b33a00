//! Lexical retrieval re-ranking: tokenize → score → diversify.
//!
//! - [`tokenizer`] — domain-aware query tokenization
//! - [`scorer`] — term overlap + metadata boost + length normalization
//! - [`mmr`] — greedy Maximal Marginal Relevance selection
//! - [`pipeline`] — orchestration over an over-fetched candidate batch

pub mod mmr;
pub mod pipeline;
pub mod scorer;
pub mod tokenizer;
