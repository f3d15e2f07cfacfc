// src/plan/models.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// Conventional column names produced by the header rename table. Plans may
// carry additional columns; those stay reachable through
// [`SubstitutionRecord::get`].
pub const KLASSE: &str = "klasse";
pub const STUNDE: &str = "stunde";
pub const FACH: &str = "fach";
pub const VERTRETER: &str = "vertreter";
pub const LEHRER: &str = "lehrer";
pub const RAUM: &str = "raum";
pub const ART: &str = "art";

/// One row of the substitution table.
///
/// The field set is not fixed at compile time: it is whatever the header row
/// of the source table declared, in header order. Every record of a plan
/// shares the same field set; cells missing from short rows stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRecord {
    fields: Vec<(String, String)>,
}

impl SubstitutionRecord {
    /// Creates an empty record carrying one (empty) value per column.
    pub(crate) fn with_columns(columns: &[String]) -> Self {
        Self {
            fields: columns.iter().map(|c| (c.clone(), String::new())).collect(),
        }
    }

    /// Fills the cell at `index`. Cells beyond the header width have no
    /// column to land in and are dropped.
    pub(crate) fn set(&mut self, index: usize, value: &str) {
        if let Some((_, slot)) = self.fields.get_mut(index) {
            *slot = value.to_string();
        }
    }

    /// Replaces the value of `key`, if the column exists.
    pub(crate) fn replace(&mut self, key: &str, value: String) {
        if let Some((_, slot)) = self.fields.iter_mut().find(|(k, _)| k == key) {
            *slot = value;
        }
    }

    /// Looks up a field by its (lower-case) column name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates the fields in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // Typed accessors for the conventional columns.

    pub fn klasse(&self) -> Option<&str> {
        self.get(KLASSE)
    }

    pub fn stunde(&self) -> Option<&str> {
        self.get(STUNDE)
    }

    pub fn fach(&self) -> Option<&str> {
        self.get(FACH)
    }

    pub fn vertreter(&self) -> Option<&str> {
        self.get(VERTRETER)
    }

    pub fn lehrer(&self) -> Option<&str> {
        self.get(LEHRER)
    }

    pub fn raum(&self) -> Option<&str> {
        self.get(RAUM)
    }

    pub fn art(&self) -> Option<&str> {
        self.get(ART)
    }
}

// Serializes as a JSON object in header order; a derived impl over a map
// type would not keep that order.
impl Serialize for SubstitutionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The fully parsed substitution plan for one day.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Calendar date the plan describes.
    pub date: NaiveDate,

    /// When the plan was last edited, per its "Stand:" stamp.
    pub last_edited: NaiveDateTime,

    /// The untouched input payload, kept for traceability.
    #[serde(skip)]
    pub raw: Vec<u8>,

    /// Column names derived from the table's header row, in header order.
    pub columns: Vec<String>,

    /// One record per data row, in document order.
    pub records: Vec<SubstitutionRecord>,
}
