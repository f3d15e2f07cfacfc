// src/extractors/meta.rs
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::utils::error::ParseError;

// --- CSS Selectors (Lazy Static) ---
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".mon_title").expect("Failed to compile TITLE_SELECTOR"));

static HEAD_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".mon_head tr").expect("Failed to compile HEAD_ROW_SELECTOR"));

// --- Patterns ---
// Day and month may be one or two digits, e.g. "3-1-2022" or "23-11-2021".
static DATE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}$").expect("Failed to compile DATE_TOKEN_RE"));

const LAST_EDITED_MARKER: &str = "Stand: ";
const DATE_FORMAT: &str = "%d-%m-%Y";
const LAST_EDITED_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Date and last-edited stamp read from the plan's two landmark elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanMeta {
    pub date: NaiveDate,
    pub last_edited: NaiveDateTime,
}

pub struct MetadataExtractor;

impl MetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Reads the plan date from the title block and the last-edited stamp
    /// from the header block. Both landmarks must be present.
    pub fn extract(&self, document: &Html) -> Result<PlanMeta, ParseError> {
        let date = self.extract_date(document)?;
        let last_edited = self.extract_last_edited(document)?;

        tracing::debug!("Plan for {}, last edited {}", date, last_edited);
        Ok(PlanMeta { date, last_edited })
    }

    /// The title reads like "23-11-2021 Dienstag, Woche A"; the date is the
    /// token before the first space.
    fn extract_date(&self, document: &Html) -> Result<NaiveDate, ParseError> {
        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .ok_or_else(|| ParseError::MalformedDocument(".mon_title".to_string()))?;

        let text = title.text().collect::<String>();
        let token = text.split(' ').next().unwrap_or("");

        if !DATE_TOKEN_RE.is_match(token) {
            return Err(ParseError::DateFormat(format!(
                "title date {:?} does not match D-M-YYYY",
                token
            )));
        }

        NaiveDate::parse_from_str(token, DATE_FORMAT)
            .map_err(|e| ParseError::DateFormat(format!("title date {:?}: {}", token, e)))
    }

    /// The stamp lives in the last cell of the header block's last row,
    /// after the literal "Stand: " marker.
    fn extract_last_edited(&self, document: &Html) -> Result<NaiveDateTime, ParseError> {
        let row = document
            .select(&HEAD_ROW_SELECTOR)
            .last()
            .ok_or_else(|| ParseError::MalformedDocument(".mon_head tr".to_string()))?;

        let cell = row
            .children()
            .filter_map(ElementRef::wrap)
            .last()
            .ok_or_else(|| ParseError::MalformedDocument(".mon_head tr has no cells".to_string()))?;

        let text = cell.text().collect::<String>();
        let stamp = text
            .split(LAST_EDITED_MARKER)
            .nth(1)
            .ok_or_else(|| {
                ParseError::MalformedDocument("header cell carries no \"Stand: \" marker".to_string())
            })?
            .trim();

        NaiveDateTime::parse_from_str(stamp, LAST_EDITED_FORMAT)
            .map_err(|e| ParseError::DateFormat(format!("last-edited stamp {:?}: {}", stamp, e)))
    }
}
