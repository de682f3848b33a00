//! Integration tests for the pre-chunking ingestion passes: repeated-line
//! stripping, chrome cleaning, and context normalization working together.

use brickrag::ingestion::normalize::normalize;
use brickrag::prelude::*;

const FOOTER: &str = "Sora Developers Pvt Ltd — All information subject to change";

fn ocr_pages() -> Vec<String> {
    vec![
        format!(
            "SORA RESIDENCES\nE-BROCHURE\nLuxury 3 BHK residences from Rs. 2.1 Cr onwards.\n{FOOTER}"
        ),
        format!(
            "AMENITIES\n• Clubhouse\n• Swimming pool\nVisit www.sora-residences.example for details.\n{FOOTER}"
        ),
        format!(
            "PAYMENT PLAN\nBooking amount INR 10 Lakh, balance construction linked.\n{FOOTER}"
        ),
        format!("LOCATION\n12 km from the airport, 5 mins from the expressway.\n{FOOTER}"),
    ]
}

#[test]
fn footer_is_stripped_from_every_page() {
    let detector = RepeatedLineDetector::with_defaults();
    let pages = ocr_pages();

    let repeated = detector.detect(&pages);
    assert!(repeated.contains(FOOTER));

    for page in detector.strip_pages(&pages) {
        assert!(!page.contains("subject to change"));
    }
}

#[test]
fn cleaning_after_dedup_leaves_only_content() {
    let detector = RepeatedLineDetector::with_defaults();
    let cleaner = BrochureCleaner::with_defaults();

    let page = &detector.strip_pages(&ocr_pages())[1];
    let cleaned = cleaner.clean(page);

    assert!(!cleaned.contains("www.sora-residences.example"));
    assert!(cleaned.contains("- Clubhouse"));
    assert!(cleaned.contains("- Swimming pool"));
}

#[test]
fn normalization_unifies_currency_and_units() {
    let cleaner = BrochureCleaner::with_defaults();
    let cleaned = cleaner.clean("Luxury 3 bhk residences from Rs. 2.1 Cr, 1450 sq ft carpet.");

    let normalized = normalize(&cleaned);
    assert_eq!(
        normalized,
        "Luxury 3 BHK residences from ₹2.1 Cr, 1450 sq.ft. carpet."
    );
}

#[test]
fn small_fragment_chunks_are_dropped() {
    let cleaner = BrochureCleaner::new(CleanerConfig::new().min_chunk_len(40));
    let chunks = vec![
        "AMENITIES".to_string(),
        "The clubhouse spans two levels with a gym, spa, and indoor pool.".to_string(),
    ];

    let kept = cleaner.drop_too_small_chunks(chunks);
    assert_eq!(kept.len(), 1);
    assert!(kept[0].contains("clubhouse"));
}
