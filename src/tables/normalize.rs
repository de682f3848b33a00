//! Canonical markdown rendition of extracted table regions.

use std::sync::LazyLock;

use regex::Regex;

static ROWS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr>(.*?)</tr>").expect("row pattern"));

// Cells deliberately do not match across newlines; OCR keeps a cell on one
// line and spanning would swallow sibling cells.
static CELLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<t[hd]>(.*?)</t[hd]>").expect("cell pattern"));

static INNER_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>").expect("inner tag pattern"));

/// Convert an HTML table region to a markdown table.
///
/// The first row becomes the header, followed by a `|---|` separator.
/// Inner markup inside cells is stripped. Input with no `<tr>` rows is
/// returned unchanged — best effort over malformed OCR markup, never an
/// error.
#[must_use]
pub fn html_to_markdown(html: &str) -> String {
    let rows: Vec<&str> = ROWS
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    if rows.is_empty() {
        return html.to_string();
    }

    let mut out: Vec<String> = Vec::new();
    let mut is_header = true;

    for row in rows {
        let cells: Vec<String> = CELLS
            .captures_iter(row)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .map(|cell| INNER_TAGS.replace_all(cell, "").trim().to_string())
            .collect();

        if cells.is_empty() {
            continue;
        }

        out.push(format!("| {} |", cells.join(" | ")));
        if is_header {
            out.push(separator(cells.len()));
            is_header = false;
        }
    }

    out.join("\n")
}

/// Normalize a pipe-delimited region to a well-formed markdown table.
///
/// Every line is split on `|` after shedding edge pipes, cells are
/// trimmed, ragged rows are right-padded with empty cells to the widest
/// row, and a header separator is inserted after the first row. The
/// output is a fixed point: normalizing it again changes nothing.
#[must_use]
pub fn normalize_pipe_table(region: &str) -> String {
    let lines: Vec<&str> = region
        .split('\n')
        .map(str::trim)
        .filter(|ln| !ln.is_empty() && !is_separator_row(ln))
        .collect();

    if lines.is_empty() {
        return region.to_string();
    }

    let mut rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| {
            line.trim_matches('|')
                .trim()
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect();

    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(max_cols, String::new());
    }

    let mut out: Vec<String> = Vec::with_capacity(rows.len() + 1);
    out.push(format!("| {} |", rows[0].join(" | ")));
    out.push(separator(max_cols));
    for row in &rows[1..] {
        out.push(format!("| {} |", row.join(" | ")));
    }

    out.join("\n")
}

fn separator(cols: usize) -> String {
    format!("|{}|", vec!["---"; cols].join("|"))
}

/// A markdown header-separator row: only pipes, dashes, colons, and
/// spaces, with at least one dash. Dropped on re-normalization so the
/// transform is a fixed point.
fn is_separator_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' '))
}

// ── Tests ──────────────────────────────────────────────────────────────
