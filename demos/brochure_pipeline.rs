//! End-to-end demo: clean a brochure's OCR pages, extract its tables,
//! and answer a query over the resulting chunks.
//!
//! Run with `cargo run --example brochure_pipeline`.

use async_trait::async_trait;
use tracing_subscriber::FmtSubscriber;

use brickrag::ingestion::normalize::normalize;
use brickrag::prelude::*;

struct InMemorySource {
    chunks: Vec<Candidate>,
}

#[async_trait]
impl CandidateSource for InMemorySource {
    async fn fetch(
        &self,
        _query: &str,
        overfetch: usize,
    ) -> Result<Vec<Candidate>, RetrievalError> {
        Ok(self.chunks.iter().take(overfetch).cloned().collect())
    }
}

const PAGES: &[&str] = &[
    "SORA RESIDENCES\nE-BROCHURE\nLuxury 2 and 3 BHK residences from Rs. 1.8 Cr.\nSora Developers Pvt Ltd | RERA regd.",
    "AMENITIES\n• Clubhouse across two levels\n• 25m swimming pool\n• Landscaped central green\nSora Developers Pvt Ltd | RERA regd.",
    "PAYMENT PLAN\n| Stage | Amount |\n| Booking | 10% |\n| Foundation | 40% |\n| Possession | 50% |\nSora Developers Pvt Ltd | RERA regd.",
];

#[tokio::main]
async fn main() -> Result<(), RetrievalError> {
    init_tracing();

    // Ingestion passes: strip the repeated footer, then brochure chrome.
    let detector = RepeatedLineDetector::with_defaults();
    let cleaner = BrochureCleaner::with_defaults();
    let pages: Vec<String> = PAGES.iter().map(ToString::to_string).collect();
    let stripped = detector.strip_pages(&pages);

    let processor = TableProcessor::with_defaults();
    let mut chunks = Vec::new();
    for (page_no, page) in stripped.iter().enumerate() {
        let cleaned = cleaner.clean(page);
        let inventory = processor.process(&cleaned);
        for table in &inventory.tables {
            println!("page {}: {}", page_no + 1, table_summary(table));
        }
        chunks.push(
            Candidate::new(inventory.text_with_labeled_tables).with_metadata(CandidateMetadata {
                source: "sora_brochure.pdf".into(),
                project: "sora".into(),
                page: Some(page_no as u32 + 1),
                ..Default::default()
            }),
        );
    }

    // Retrieval over the cleaned chunks.
    let retriever = Retriever::builder().mmr(MmrConfig::new().lambda(0.75)).build();
    let source = InMemorySource { chunks };
    let result = retriever
        .retrieve(&source, "what is the payment plan", 2, 16)
        .await?;

    println!("\nselected {} chunk(s) via {}:", result.len(), result.mode);
    for (doc, meta) in result.documents.iter().zip(&result.metadata) {
        let page = meta.page.map_or_else(|| "?".to_string(), |p| p.to_string());
        println!("--- page {page} ---\n{}", normalize(doc));
    }

    Ok(())
}

fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
