// src/plan/mod.rs
pub mod decode;
pub mod models;

#[allow(unused_imports)]
pub use models::{Plan, SubstitutionRecord};

use scraper::Html;

use crate::extractors::meta::MetadataExtractor;
use crate::extractors::normalize::normalize_class;
use crate::extractors::table::TableExtractor;
use crate::utils::error::ParseError;

/// Builds a [`Plan`] from the raw file payload and its declared encoding.
///
/// The whole pipeline runs here, synchronously: decode, parse the document
/// tree, read the two metadata landmarks, extract the substitution table,
/// canonicalize every class identifier. The returned plan is immutable from
/// the caller's point of view; nothing mutates it after this returns.
pub fn build_plan(raw: Vec<u8>, encoding: &str) -> Result<Plan, ParseError> {
    let text = decode::decode(&raw, encoding)?;
    let document = Html::parse_document(&text);

    let meta = MetadataExtractor::new().extract(&document)?;
    let mut table = TableExtractor::new().extract(&document)?;

    for record in &mut table.records {
        let canonical = record.get(models::KLASSE).map(normalize_class);
        if let Some(canonical) = canonical {
            record.replace(models::KLASSE, canonical);
        }
    }

    tracing::info!(
        "Built plan for {} with {} records",
        meta.date,
        table.records.len()
    );

    Ok(Plan {
        date: meta.date,
        last_edited: meta.last_edited,
        raw,
        columns: table.columns,
        records: table.records,
    })
}
