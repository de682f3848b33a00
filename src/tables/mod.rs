//! Structured-table extraction from brochure OCR text.
//!
//! Brochure payment plans and unit matrices survive OCR as either inline
//! HTML (`<table>…</table>`) or pipe-delimited rows. Linear chunking
//! shreds both. This module finds table regions, normalizes them to
//! markdown, classifies them by content, and produces whole-document views
//! with tables removed or replaced by labeled blocks.
//!
//! - [`extract`] — HTML and pipe-delimited region scanning
//! - [`normalize`] — conversion to canonical markdown
//! - [`classify`] — keyword-driven table typing
//! - [`processor`] — whole-document orchestration
//! - [`summary`] — one-line table descriptions for embedding

pub mod classify;
pub mod extract;
pub mod normalize;
pub mod processor;
pub mod summary;

use serde::{Deserialize, Serialize};

pub use classify::{ClassifierConfig, TableClassifier};
pub use processor::TableProcessor;
pub use summary::table_summary;

// ── TableType ──────────────────────────────────────────────────────────

/// Content category of an extracted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    /// Construction/possession milestone schedules.
    PaymentPlan,
    /// BHK/area/configuration matrices.
    #[serde(rename = "unit_specifications")]
    UnitSpecs,
    /// Rate and charge listings.
    Pricing,
    /// Facility listings.
    Amenities,
    /// Distance and proximity listings.
    Location,
    /// Fit-and-finish detail listings.
    Specifications,
    /// Nothing matched.
    Unknown,
}

impl TableType {
    /// Snake-case wire name, as used in labels and summaries.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentPlan => "payment_plan",
            Self::UnitSpecs => "unit_specifications",
            Self::Pricing => "pricing",
            Self::Amenities => "amenities",
            Self::Location => "location",
            Self::Specifications => "specifications",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TableFormat ────────────────────────────────────────────────────────

/// Source encoding of an extracted table region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// `<table>…</table>` markup; span is byte offsets into the document.
    Html,
    /// Consecutive pipe-delimited lines; span is line indices.
    Pipe,
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Pipe => write!(f, "pipe"),
        }
    }
}

// ── Table ──────────────────────────────────────────────────────────────

/// One extracted table with its normalized markdown rendition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Classified content category.
    pub table_type: TableType,
    /// Canonical markdown rendition.
    pub markdown: String,
    /// Verbatim source region as found in the document.
    pub original: String,
    /// `(start, end)` of the region; units depend on [`format`](Self::format).
    pub span: (usize, usize),
    /// Data rows in the markdown, header excluded.
    pub row_count: usize,
    /// Columns in the markdown header row.
    pub col_count: usize,
    /// Source encoding the region was found in.
    pub format: TableFormat,
}

// ── TableInventory ─────────────────────────────────────────────────────

/// Whole-document table processing output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInventory {
    /// The unmodified input document.
    pub original_text: String,
    /// All extracted tables, HTML regions first, then pipe regions.
    pub tables: Vec<Table>,
    /// The document with every table region deleted.
    pub text_without_tables: String,
    /// The document with each table region replaced by a labeled
    /// `[TABLE_n: TYPE]` markdown block.
    pub text_with_labeled_tables: String,
}

impl TableInventory {
    /// Returns `true` when no tables were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of extracted tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────
