//! Keyword-driven table classification.
//!
//! Classification is a fixed-priority cascade over lowercase substring
//! hits. Payment plans win only when the header row itself carries a
//! payment keyword; otherwise a schedule full of amounts would shadow a
//! plain pricing table. Pricing in turn yields whenever "payment" appears
//! anywhere in the table.

use serde::{Deserialize, Serialize};

use crate::tables::TableType;

// ── ClassifierConfig ───────────────────────────────────────────────────

/// Indicator keyword lists for [`TableClassifier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassifierConfig {
    /// Body keywords suggesting a payment schedule.
    #[serde(default = "default_payment")]
    pub payment: Vec<String>,
    /// Header keywords required to confirm a payment schedule.
    #[serde(default = "default_payment_header")]
    pub payment_header: Vec<String>,
    /// Keywords suggesting a rate/charge listing.
    #[serde(default = "default_pricing")]
    pub pricing: Vec<String>,
    /// Keywords suggesting a unit configuration matrix.
    #[serde(default = "default_unit")]
    pub unit: Vec<String>,
    /// Keywords suggesting a facility listing.
    #[serde(default = "default_amenity")]
    pub amenity: Vec<String>,
    /// Keywords suggesting a distance/proximity listing.
    #[serde(default = "default_location")]
    pub location: Vec<String>,
    /// Keywords suggesting a fit-and-finish listing.
    #[serde(default = "default_specification")]
    pub specification: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

fn default_payment() -> Vec<String> {
    owned(&[
        "payment",
        "milestone",
        "installment",
        "booking",
        "possession",
        "clp",
        "plp",
        "construction linked",
        "stage",
        "due",
        "amount",
    ])
}

fn default_payment_header() -> Vec<String> {
    owned(&["payment", "milestone", "stage", "installment"])
}

fn default_pricing() -> Vec<String> {
    owned(&["price", "rate", "cost", "charge", "fee"])
}

fn default_unit() -> Vec<String> {
    owned(&["bhk", "carpet", "super area", "saleable", "sqft", "sq.ft", "unit"])
}

fn default_amenity() -> Vec<String> {
    owned(&["amenity", "amenities", "facility", "club", "gym", "pool"])
}

fn default_location() -> Vec<String> {
    owned(&["distance", "km", "mins", "location", "nearby", "proximity"])
}

fn default_specification() -> Vec<String> {
    owned(&["specification", "flooring", "fitting", "finishing", "details"])
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            payment: default_payment(),
            payment_header: default_payment_header(),
            pricing: default_pricing(),
            unit: default_unit(),
            amenity: default_amenity(),
            location: default_location(),
            specification: default_specification(),
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ── TableClassifier ────────────────────────────────────────────────────

/// Assigns a [`TableType`] to an extracted table.
#[derive(Debug, Clone, Default)]
pub struct TableClassifier {
    config: ClassifierConfig,
}

impl TableClassifier {
    /// Build a classifier from the given configuration.
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Build a classifier with default keyword lists.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ClassifierConfig::default())
    }

    /// Classify a table from its full text and header row.
    #[must_use]
    pub fn classify(&self, table_text: &str, header_row: &str) -> TableType {
        let text = table_text.to_lowercase();
        let header = header_row.to_lowercase();

        if hits_any(&text, &self.config.payment) && hits_any(&header, &self.config.payment_header) {
            return TableType::PaymentPlan;
        }
        if hits_any(&text, &self.config.pricing) && !text.contains("payment") {
            return TableType::Pricing;
        }
        if hits_any(&text, &self.config.unit) {
            return TableType::UnitSpecs;
        }
        if hits_any(&text, &self.config.amenity) {
            return TableType::Amenities;
        }
        if hits_any(&text, &self.config.location) {
            return TableType::Location;
        }
        if hits_any(&text, &self.config.specification) {
            return TableType::Specifications;
        }
        TableType::Unknown
    }
}

fn hits_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| haystack.contains(kw.as_str()))
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_plan_requires_header_keyword() {
        let classifier = TableClassifier::with_defaults();
        let body = "| Stage | Amount |\n| Booking | 10% |\n| Possession | 90% |";
        assert_eq!(
            classifier.classify(body, "| Stage | Amount |"),
            TableType::PaymentPlan
        );
    }

    #[test]
    fn payment_words_without_header_keyword_fall_through() {
        let classifier = TableClassifier::with_defaults();
        // "booking" and "possession" appear, but the header names units.
        let body = "| Unit | Status |\n| 3 BHK | booking open, possession 2027 |";
        assert_eq!(
            classifier.classify(body, "| Unit | Status |"),
            TableType::UnitSpecs
        );
    }

    #[test]
    fn pricing_is_suppressed_when_payment_appears_anywhere() {
        let classifier = TableClassifier::with_defaults();
        let body = "| Item | Price |\n| Base | see payment schedule |";
        // Header lacks a payment keyword, pricing yields to "payment" in
        // the body, and "unit" never appears, so this lands further down.
        assert_ne!(classifier.classify(body, "| Item | Price |"), TableType::Pricing);
    }

    #[test]
    fn plain_rate_card_is_pricing() {
        let classifier = TableClassifier::with_defaults();
        let body = "| Item | Rate |\n| PLC | 250 per sft |";
        assert_eq!(classifier.classify(body, "| Item | Rate |"), TableType::Pricing);
    }

    #[test]
    fn amenities_location_and_specifications_cascade() {
        let classifier = TableClassifier::with_defaults();
        assert_eq!(
            classifier.classify("| Facility |\n| Gym |", "| Facility |"),
            TableType::Amenities
        );
        assert_eq!(
            classifier.classify("| Landmark | Distance |\n| Airport | 12 km |", "| Landmark |"),
            TableType::Location
        );
        assert_eq!(
            classifier.classify("| Flooring |\n| Vitrified |", "| Flooring |"),
            TableType::Specifications
        );
    }

    #[test]
    fn nothing_matched_is_unknown() {
        let classifier = TableClassifier::with_defaults();
        assert_eq!(classifier.classify("| A | B |\n| 1 | 2 |", "| A | B |"), TableType::Unknown);
    }
}
