//! Pre-chunking passes over raw OCR page text.
//!
//! - [`cleaner`] — brochure chrome, contact, and link removal
//! - [`dedup`] — cross-page repeated-line (header/footer) detection
//! - [`normalize`] — currency/unit/BHK normalization for retrieved context

pub mod cleaner;
pub mod dedup;
pub mod normalize;
