//! Context normalization for retrieved text.
//!
//! Brochure OCR and curated rows disagree on currency symbols, area units,
//! and BHK spellings. Everything handed to the answering model goes through
//! [`normalize`] first so "Rs. 45 Lakh", "INR 45 Lakh", and "₹45 Lakh" read
//! identically.

use std::sync::LazyLock;

use regex::Regex;

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));

static RUPEE_RS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bRs\.?\s*").expect("Rs pattern"));

static RUPEE_INR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bINR\s*").expect("INR pattern"));

static RUPEE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹\s+").expect("rupee space pattern"));

static SQ_FT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(sq\.?\s*ft\.?|sqft|sft)\b").expect("sq ft pattern"));

static SQ_M: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(sq\.?\s*m\.?|sqm)\b").expect("sq m pattern"));

static BHK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bb\.?\s*h\.?\s*k\.?\b").expect("bhk pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Remove HTML/XML tags.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    TAGS.replace_all(text, "").into_owned()
}

/// Normalize retrieved context before prompt assembly.
///
/// Strips markup, folds smart quotes to ASCII, rewrites `Rs.`/`INR` to `₹`
/// (with no space after the symbol), standardizes area units to `sq.ft.` /
/// `sq.m.`, canonicalizes BHK spellings, and collapses all whitespace runs
/// to single spaces.
#[must_use]
pub fn normalize(ctx: &str) -> String {
    let mut out = strip_tags(ctx);

    out = out
        .replace(['\u{201c}', '\u{201d}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    out = RUPEE_RS.replace_all(&out, "₹").into_owned();
    out = RUPEE_INR.replace_all(&out, "₹").into_owned();
    out = RUPEE_SPACE.replace_all(&out, "₹").into_owned();

    out = SQ_FT.replace_all(&out, "sq.ft.").into_owned();
    out = SQ_M.replace_all(&out, "sq.m.").into_owned();

    out = BHK.replace_all(&out, "BHK").into_owned();

    out = WHITESPACE.replace_all(&out, " ").into_owned();
    out.trim().to_string()
}

// ── Tests ──────────────────────────────────────────────────────────────
