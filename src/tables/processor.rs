//! Whole-document table processing.

use tracing::debug;

use crate::tables::classify::{ClassifierConfig, TableClassifier};
use crate::tables::extract::{extract_html_tables, extract_pipe_tables};
use crate::tables::normalize::{html_to_markdown, normalize_pipe_table};
use crate::tables::{Table, TableFormat, TableInventory};

const MIN_PIPE_ROWS: usize = 2;

// ── TableProcessor ─────────────────────────────────────────────────────

/// Extracts, normalizes, classifies, and labels every table in a document.
#[derive(Debug, Clone, Default)]
pub struct TableProcessor {
    classifier: TableClassifier,
}

impl TableProcessor {
    /// Build a processor with the given classifier configuration.
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: TableClassifier::new(config),
        }
    }

    /// Build a processor with default keyword lists.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Process a whole document.
    ///
    /// HTML regions are extracted first, then pipe regions; a pipe region
    /// whose first occurrence falls inside an already-captured HTML span
    /// is discarded as a double detection. The two derived views replace
    /// each region at its first textual occurrence — a region whose exact
    /// text recurs verbatim elsewhere in the document is only substituted
    /// once, at the earliest occurrence.
    #[must_use]
    pub fn process(&self, text: &str) -> TableInventory {
        let mut tables: Vec<Table> = Vec::new();

        let html_regions = extract_html_tables(text);
        for (html, start, end) in &html_regions {
            let markdown = html_to_markdown(html);
            tables.push(self.build_table(
                markdown,
                html.clone(),
                (*start, *end),
                TableFormat::Html,
            ));
        }

        for (region, start_line, end_line) in extract_pipe_tables(text, MIN_PIPE_ROWS) {
            let inside_html = text.find(&region).is_some_and(|pos| {
                html_regions
                    .iter()
                    .any(|(_, start, end)| (*start..*end).contains(&pos))
            });
            if inside_html {
                continue;
            }
            let markdown = normalize_pipe_table(&region);
            tables.push(self.build_table(
                markdown,
                region,
                (start_line, end_line),
                TableFormat::Pipe,
            ));
        }

        debug!(
            html = html_regions.len(),
            total = tables.len(),
            "table extraction complete"
        );

        // Walk regions back to front so earlier substitutions don't shift
        // later ones. Labels are numbered along this walk.
        let mut order: Vec<usize> = (0..tables.len()).collect();
        order.sort_by(|&a, &b| tables[b].span.0.cmp(&tables[a].span.0));

        let mut without = text.to_string();
        let mut labeled = text.to_string();
        for (n, &idx) in order.iter().enumerate() {
            let table = &tables[idx];
            without = without.replacen(&table.original, "", 1);
            let label = format!(
                "\n[TABLE_{n}: {ty}]\n{md}\n[/TABLE_{n}]\n",
                n = n + 1,
                ty = table.table_type.as_str().to_uppercase(),
                md = table.markdown,
            );
            labeled = labeled.replacen(&table.original, &label, 1);
        }

        TableInventory {
            original_text: text.to_string(),
            tables,
            text_without_tables: without,
            text_with_labeled_tables: labeled,
        }
    }

    fn build_table(
        &self,
        markdown: String,
        original: String,
        span: (usize, usize),
        format: TableFormat,
    ) -> Table {
        let header = markdown.lines().next().unwrap_or("");
        let table_type = self.classifier.classify(&markdown, header);
        let (row_count, col_count) = count_rows_cols(&markdown);
        debug!(%table_type, %format, row_count, col_count, "table classified");
        Table {
            table_type,
            markdown,
            original,
            span,
            row_count,
            col_count,
            format,
        }
    }
}

/// Count data rows (header excluded) and header columns in a markdown
/// table. Separator rows do not count.
fn count_rows_cols(markdown: &str) -> (usize, usize) {
    let data_rows: Vec<&str> = markdown
        .lines()
        .filter(|r| !r.is_empty() && !r.starts_with("|---"))
        .collect();
    let rows = data_rows.len().saturating_sub(1);
    let cols = data_rows
        .first()
        .map_or(0, |h| h.matches('|').count().saturating_sub(1));
    (rows, cols)
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TableType;

    #[test]
    fn pipe_payment_plan_is_extracted_and_counted() {
        let processor = TableProcessor::with_defaults();
        let text = "Payment details below.\n\
                    | Stage | Amount |\n\
                    | Booking | 10% |\n\
                    | Foundation | 40% |\n\
                    | Possession | 50% |\n\
                    Contact sales for more.";
        let inventory = processor.process(text);
        assert_eq!(inventory.len(), 1);
        let table = &inventory.tables[0];
        assert_eq!(table.table_type, TableType::PaymentPlan);
        assert_eq!(table.format, TableFormat::Pipe);
        assert_eq!(table.row_count, 3);
        assert_eq!(table.col_count, 2);
    }

    #[test]
    fn html_unit_table_is_extracted_and_counted() {
        let processor = TableProcessor::with_defaults();
        let text = "<table><tr><th>Type</th><th>Area</th></tr>\
                    <tr><td>3 BHK</td><td>1450 sqft</td></tr></table>";
        let inventory = processor.process(text);
        assert_eq!(inventory.len(), 1);
        let table = &inventory.tables[0];
        assert_eq!(table.table_type, TableType::UnitSpecs);
        assert_eq!(table.format, TableFormat::Html);
        assert_eq!(table.row_count, 1);
        assert_eq!(table.col_count, 2);
    }

    #[test]
    fn pipe_region_inside_html_span_is_not_double_counted() {
        let processor = TableProcessor::with_defaults();
        let text = "<table>\n| A | B |\n| c | d |\n</table>";
        let inventory = processor.process(text);
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.tables[0].format, TableFormat::Html);
    }

    #[test]
    fn without_view_removes_every_region() {
        let processor = TableProcessor::with_defaults();
        let text = "intro\n| Item | Rate |\n| PLC | 250 |\noutro";
        let inventory = processor.process(text);
        assert!(!inventory.text_without_tables.contains("| Item | Rate |"));
        assert!(inventory.text_without_tables.contains("intro"));
        assert!(inventory.text_without_tables.contains("outro"));
    }

    #[test]
    fn labeled_view_wraps_markdown_in_numbered_blocks() {
        let processor = TableProcessor::with_defaults();
        let text = "intro\n| Item | Rate |\n| PLC | 250 |\noutro";
        let inventory = processor.process(text);
        let labeled = &inventory.text_with_labeled_tables;
        assert!(labeled.contains("[TABLE_1: PRICING]"));
        assert!(labeled.contains("[/TABLE_1]"));
        assert!(labeled.contains("|---|---|"));
        assert!(labeled.contains("intro"));
    }

    #[test]
    fn labels_are_numbered_along_the_back_to_front_walk() {
        let processor = TableProcessor::with_defaults();
        let text = "| Item | Rate |\n| PLC | 250 |\n\nprose\n\n\
                    | Facility | Note |\n| Gym | yes |";
        let inventory = processor.process(text);
        let labeled = &inventory.text_with_labeled_tables;
        // The later region in the document gets label 1.
        let amenities = labeled.find("[TABLE_1: AMENITIES]");
        let pricing = labeled.find("[TABLE_2: PRICING]");
        assert!(amenities.is_some());
        assert!(pricing.is_some());
        assert!(pricing < amenities);
    }

    #[test]
    fn duplicate_region_text_substitutes_only_first_occurrence() {
        let processor = TableProcessor::with_defaults();
        // The same two lines appear twice but form one contiguous region.
        let region = "| Item | Rate |\n| PLC | 250 |";
        let text = format!("{region}\n\nrepeated later as prose:\n{region}");
        let inventory = processor.process(&text);
        // One region spans lines 0..2; the second copy opens a second
        // region, so both are found. Each substitution hits the first
        // remaining textual occurrence only.
        assert_eq!(inventory.len(), 2);
        assert!(!inventory.text_without_tables.contains("| Item | Rate |"));
    }

    #[test]
    fn document_without_tables_passes_through_unchanged() {
        let processor = TableProcessor::with_defaults();
        let text = "Just prose about towers and possession dates.";
        let inventory = processor.process(text);
        assert!(inventory.is_empty());
        assert_eq!(inventory.text_without_tables, text);
        assert_eq!(inventory.text_with_labeled_tables, text);
    }
}
