//! One-line table descriptions for embedding alongside the markdown.
//!
//! A markdown table embeds poorly on its own; a short natural-language
//! summary ("Payment plan table with 10 milestones including booking,
//! possession") gives the retriever something to match against.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::tables::{Table, TableType};

static BHK_COUNTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*bhk").expect("bhk count pattern"));

static AREA_FIGURES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*sq").expect("area figure pattern"));

const MILESTONE_WORDS: &[&str] = &[
    "booking",
    "foundation",
    "slab",
    "possession",
    "oc",
    "registry",
];

/// Describe a table in one sentence.
#[must_use]
pub fn table_summary(table: &Table) -> String {
    match table.table_type {
        TableType::PaymentPlan => payment_plan_summary(table),
        TableType::UnitSpecs => unit_specs_summary(table),
        TableType::Pricing => format!("Pricing table with {} items", table.row_count),
        _ => format!(
            "{} table with {} rows and {} columns",
            table.table_type.as_str().replace('_', " "),
            table.row_count,
            table.col_count
        ),
    }
}

fn payment_plan_summary(table: &Table) -> String {
    let markdown_lower = table.markdown.to_lowercase();
    let milestones: Vec<&str> = MILESTONE_WORDS
        .iter()
        .filter(|w| markdown_lower.contains(**w))
        .copied()
        .collect();
    let percent_count = table.markdown.matches('%').count();

    let mut summary = format!("Payment plan table with {} milestones", table.row_count);
    if !milestones.is_empty() {
        let named: Vec<&str> = milestones.into_iter().take(3).collect();
        summary.push_str(&format!(" including {}", named.join(", ")));
    }
    if percent_count > 0 {
        summary.push_str(&format!(" with {percent_count} percentage markers"));
    }
    summary
}

fn unit_specs_summary(table: &Table) -> String {
    // BTreeSet: distinct BHK counts in a stable order.
    let bhk: BTreeSet<&str> = BHK_COUNTS
        .captures_iter(&table.markdown)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let has_areas = AREA_FIGURES.is_match(&table.markdown);

    let mut summary = format!(
        "Unit specifications table with {} configurations",
        table.row_count
    );
    if !bhk.is_empty() {
        let listed: Vec<&str> = bhk.into_iter().collect();
        summary.push_str(&format!(" ({} BHK units)", listed.join(", ")));
    }
    if has_areas {
        summary.push_str(" showing areas");
    }
    summary
}

// ── Tests ──────────────────────────────────────────────────────────────
