// src/extractors/normalize.rs

// Canonicalization of the class identifier. The rules are an ordered list;
// the first rule whose predicate matches is applied, otherwise the value is
// kept as-is.
struct ClassRule {
    applies: fn(&str) -> bool,
    apply: fn(&str) -> String,
}

/// Q-phase labels carry the initials of every affected course teacher glued
/// on with no separator; only the first five characters are the label.
const Q_PHASE_LABEL_LEN: usize = 5;

fn is_q_phase(value: &str) -> bool {
    value.starts_with('Q')
}

// Q3/Q4BiEffFkJaeKorTüVolWil -> Q3/Q4
fn truncate_q_phase(value: &str) -> String {
    value.chars().take(Q_PHASE_LABEL_LEN).collect()
}

fn has_leading_zero(value: &str) -> bool {
    value.starts_with('0')
}

// 09E -> 9E
fn strip_leading_zero(value: &str) -> String {
    value.chars().skip(1).collect()
}

static CLASS_RULES: &[ClassRule] = &[
    ClassRule {
        applies: is_q_phase,
        apply: truncate_q_phase,
    },
    ClassRule {
        applies: has_leading_zero,
        apply: strip_leading_zero,
    },
];

/// Canonicalizes a raw class identifier.
pub fn normalize_class(value: &str) -> String {
    for rule in CLASS_RULES {
        if (rule.applies)(value) {
            return (rule.apply)(value);
        }
    }
    value.to_string()
}
