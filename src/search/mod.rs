// src/search/mod.rs
use crate::plan::models::{Plan, SubstitutionRecord};
use crate::utils::error::SearchError;

/// Filters a plan's records on a single field.
///
/// `key` is lower-cased and must name one of the plan's columns; `query`
/// must be a single word. Every character of the lower-cased query must
/// occur somewhere in the lower-cased field value; order and adjacency play
/// no role, and repeated query characters re-match the same occurrence. This
/// is deliberately not a substring match: querying "e9" finds a value "9E".
///
/// Matches come back in document order. A failed call leaves the plan
/// untouched and fully usable.
pub fn search<'p>(
    plan: &'p Plan,
    key: &str,
    query: &str,
) -> Result<Vec<&'p SubstitutionRecord>, SearchError> {
    if query.contains(' ') {
        return Err(SearchError::InvalidQuery(query.to_string()));
    }

    let key = key.to_lowercase();
    if !plan.columns.iter().any(|column| *column == key) {
        return Err(SearchError::FieldNotFound(key));
    }

    let needles: Vec<char> = query.to_lowercase().chars().collect();

    Ok(plan
        .records
        .iter()
        .filter(|record| {
            let value = record.get(&key).unwrap_or("").to_lowercase();
            needles.iter().all(|&needle| value.contains(needle))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::models::SubstitutionRecord;
    use chrono::NaiveDate;

    fn plan_with_klassen(values: &[&str]) -> Plan {
        let columns = vec!["klasse".to_string(), "raum".to_string()];
        let records = values
            .iter()
            .map(|value| {
                let mut record = SubstitutionRecord::with_columns(&columns);
                record.set(0, value);
                record.set(1, "101");
                record
            })
            .collect();

        Plan {
            date: NaiveDate::from_ymd_opt(2021, 11, 23).unwrap(),
            last_edited: NaiveDate::from_ymd_opt(2021, 11, 22)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap(),
            raw: Vec::new(),
            columns,
            records,
        }
    }

    #[test]
    fn matches_on_character_membership_not_substring() {
        let plan = plan_with_klassen(&["9E"]);

        // "9E" carries no 'g', so "eg" misses; "e9" hits although reversed.
        assert!(search(&plan, "klasse", "eg").unwrap().is_empty());
        assert_eq!(search(&plan, "klasse", "e9").unwrap().len(), 1);
    }

    #[test]
    fn repeated_query_characters_rematch_the_same_occurrence() {
        let plan = plan_with_klassen(&["A1"]);
        assert_eq!(search(&plan, "klasse", "aa").unwrap().len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let plan = plan_with_klassen(&["9E"]);
        assert_eq!(search(&plan, "klasse", "E").unwrap().len(), 1);
        assert_eq!(search(&plan, "Klasse", "9e").unwrap().len(), 1);
    }

    #[test]
    fn rejects_multi_word_queries() {
        let plan = plan_with_klassen(&["9E"]);
        let result = search(&plan, "klasse", "9E X");
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let plan = plan_with_klassen(&["9E"]);
        let result = search(&plan, "floor", "9");
        assert!(matches!(result, Err(SearchError::FieldNotFound(_))));
    }

    #[test]
    fn preserves_document_order() {
        let plan = plan_with_klassen(&["9E", "10A", "9B"]);
        let hits = search(&plan, "klasse", "9").unwrap();

        let klassen: Vec<_> = hits.iter().map(|r| r.klasse().unwrap()).collect();
        assert_eq!(klassen, ["9E", "9B"]);
    }

    #[test]
    fn empty_query_matches_every_record() {
        let plan = plan_with_klassen(&["9E", "10A"]);
        assert_eq!(search(&plan, "klasse", "").unwrap().len(), 2);
    }
}
