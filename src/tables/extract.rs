//! Table region scanning.
//!
//! Two detectors over raw OCR text: a regex pass for inline HTML tables
//! and a line scanner for pipe-delimited regions. Both return the verbatim
//! region text with its span; interpretation of the span differs (bytes
//! for HTML, line indices for pipe regions).

use std::sync::LazyLock;

use regex::Regex;

/// Lazily matched so nested junk between `<table>` pairs stays contained.
static HTML_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<table>.*?</table>").expect("html table pattern"));

/// A raw extracted region: verbatim text plus its `(start, end)` span.
pub type RawRegion = (String, usize, usize);

/// Find every `<table>…</table>` region.
///
/// Matching is case-insensitive and non-greedy across newlines. Spans are
/// byte offsets into `text`, end exclusive.
#[must_use]
pub fn extract_html_tables(text: &str) -> Vec<RawRegion> {
    HTML_TABLE
        .find_iter(text)
        .map(|m| (m.as_str().to_string(), m.start(), m.end()))
        .collect()
}

/// Find pipe-delimited table regions.
///
/// A region opens on a line with at least two `|` characters and extends
/// while following lines hold at least `max(2, opening_count - 1)` pipes,
/// tolerating one ragged column. Regions shorter than `min_rows` lines are
/// rejected and scanning resumes on the next line. Spans are line indices,
/// end exclusive.
#[must_use]
pub fn extract_pipe_tables(text: &str, min_rows: usize) -> Vec<RawRegion> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut tables = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let opening = pipe_count(lines[i]);
        if opening >= 2 {
            let floor = (opening - 1).max(2);
            let mut j = i + 1;
            while j < lines.len() && pipe_count(lines[j]) >= floor {
                j += 1;
            }
            if j - i >= min_rows {
                tables.push((lines[i..j].join("\n"), i, j));
                i = j;
            } else {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    tables
}

fn pipe_count(line: &str) -> usize {
    line.matches('|').count()
}

// ── Tests ──────────────────────────────────────────────────────────────
