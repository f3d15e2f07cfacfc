// src/extractors/table.rs
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::plan::models::SubstitutionRecord;
use crate::utils::error::ParseError;

// --- CSS Selectors (Lazy Static) ---
static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.mon_list").expect("Failed to compile TABLE_SELECTOR"));

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Failed to compile ROW_SELECTOR"));

static HEADER_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("Failed to compile HEADER_CELL_SELECTOR"));

static DATA_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("Failed to compile DATA_CELL_SELECTOR"));

/// The substitution table, reduced to its header-derived column names and
/// one record per data row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTable {
    pub columns: Vec<String>,
    pub records: Vec<SubstitutionRecord>,
}

pub struct TableExtractor;

impl TableExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts every data row of `table.mon_list`, mapped positionally into
    /// the column names derived from the table's first row.
    pub fn extract(&self, document: &Html) -> Result<ExtractedTable, ParseError> {
        let table = document
            .select(&TABLE_SELECTOR)
            .next()
            .ok_or_else(|| ParseError::MalformedDocument("table.mon_list".to_string()))?;

        // Column order in the header row defines the positional mapping for
        // every data row; there is no attribute-based column matching.
        let mut columns = Vec::new();
        if let Some(header_row) = table.select(&ROW_SELECTOR).next() {
            for cell in header_row.select(&HEADER_CELL_SELECTOR) {
                let text = cell.text().collect::<String>();
                columns.push(column_name(text.trim()));
            }
        }
        tracing::debug!("Derived columns: {:?}", columns);

        // Every row produces a record, the header row included; its cells
        // are th, not td, so it comes out empty and is removed below.
        let mut records: Vec<SubstitutionRecord> = Vec::new();
        for row in table.select(&ROW_SELECTOR) {
            let mut record = SubstitutionRecord::with_columns(&columns);
            for (index, cell) in row.select(&DATA_CELL_SELECTOR).enumerate() {
                let text = cell.text().collect::<String>();
                record.set(index, text.trim());
            }
            records.push(record);
        }

        // Drop the header-row artifact. A table with no rows at all produced
        // nothing to drop and stays empty.
        if !records.is_empty() {
            records.remove(0);
        }

        tracing::debug!("Extracted {} records", records.len());
        Ok(ExtractedTable { columns, records })
    }
}

/// Maps a header label to its column name. The two renamed labels keep their
/// historical short names; everything else is lower-cased verbatim, so an
/// unexpected label becomes an unexpected (but reachable) column.
fn column_name(label: &str) -> String {
    match label {
        "Klasse(n)" => "klasse".to_string(),
        "(Lehrer)" => "lehrer".to_string(),
        other => other.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> ExtractedTable {
        let document = Html::parse_document(html);
        TableExtractor::new().extract(&document).unwrap()
    }

    #[test]
    fn derives_columns_from_header_labels() {
        let table = extract(
            r#"<table class="mon_list">
                <tr><th>Klasse(n)</th><th>Stunde</th><th>(Lehrer)</th><th>Foo</th></tr>
            </table>"#,
        );
        assert_eq!(table.columns, ["klasse", "stunde", "lehrer", "foo"]);
    }

    #[test]
    fn produces_one_record_per_data_row() {
        let table = extract(
            r#"<table class="mon_list">
                <tr><th>Klasse(n)</th><th>Stunde</th></tr>
                <tr><td>9E</td><td>1</td></tr>
                <tr><td>10A</td><td>2</td></tr>
                <tr><td>5B</td><td>3</td></tr>
            </table>"#,
        );

        assert_eq!(table.records.len(), 3);
        assert_eq!(table.records[0].get("klasse"), Some("9E"));
        assert_eq!(table.records[1].get("klasse"), Some("10A"));
        assert_eq!(table.records[2].get("stunde"), Some("3"));
    }

    #[test]
    fn header_only_table_yields_no_records() {
        let table = extract(
            r#"<table class="mon_list">
                <tr><th>Klasse(n)</th><th>Stunde</th></tr>
            </table>"#,
        );
        assert_eq!(table.columns, ["klasse", "stunde"]);
        assert!(table.records.is_empty());
    }

    #[test]
    fn table_without_any_rows_yields_no_records() {
        let table = extract(r#"<table class="mon_list"></table>"#);
        assert!(table.columns.is_empty());
        assert!(table.records.is_empty());
    }

    #[test]
    fn short_rows_leave_trailing_fields_empty() {
        let table = extract(
            r#"<table class="mon_list">
                <tr><th>Klasse(n)</th><th>Stunde</th><th>Raum</th></tr>
                <tr><td>9E</td></tr>
            </table>"#,
        );

        let record = &table.records[0];
        assert_eq!(record.get("klasse"), Some("9E"));
        assert_eq!(record.get("stunde"), Some(""));
        assert_eq!(record.get("raum"), Some(""));
    }

    #[test]
    fn cell_text_is_trimmed() {
        let table = extract(
            r#"<table class="mon_list">
                <tr><th>  Klasse(n)  </th><th> Stunde </th></tr>
                <tr><td>  9E  </td><td>
                    5
                </td></tr>
            </table>"#,
        );

        assert_eq!(table.columns, ["klasse", "stunde"]);
        assert_eq!(table.records[0].get("klasse"), Some("9E"));
        assert_eq!(table.records[0].get("stunde"), Some("5"));
    }

    #[test]
    fn missing_table_is_malformed() {
        let document = Html::parse_document("<p>no substitutions today</p>");
        let result = TableExtractor::new().extract(&document);
        assert!(matches!(result, Err(ParseError::MalformedDocument(_))));
    }
}
