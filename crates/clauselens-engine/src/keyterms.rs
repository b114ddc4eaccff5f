//! Key-term and critical-clause extraction

use crate::tokenize;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const MAX_KEY_TERMS: usize = 20;
const MAX_CRITICAL_CLAUSES: usize = 10;

const CRITICAL_KEYWORDS: &[&str] = &[
    "must",
    "shall",
    "required",
    "mandatory",
    "prohibited",
    "forbidden",
    "unlimited liability",
    "perpetual",
    "irrevocable",
    "exclusive",
    "non-compete",
];

fn key_term_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Capitalized defined terms ("Effective Date", "Receiving Party")
            r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b",
            r"(?i)\b(?:party|parties|term|term duration|effective date)\b",
            // Time periods ("30 days", "12 months")
            r"\d+\s*(?:days?|months?|years?)",
            // Monetary amounts
            r"\$\s*\d+(?:,\d{3})*(?:\.\d{2})?",
        ]
        .iter()
        .map(|source| Regex::new(source).expect("invalid key-term pattern"))
        .collect()
    })
}

/// Pull defined terms, durations, and amounts out of the contract
///
/// Matches deduplicate preserving first-seen order; capped at 20.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut terms = Vec::new();

    for pattern in key_term_patterns() {
        for found in pattern.find_iter(text) {
            let term = found.as_str().to_string();
            if seen.insert(term.clone()) {
                terms.push(term);
                if terms.len() == MAX_KEY_TERMS {
                    return terms;
                }
            }
        }
    }

    terms
}

/// Sentences carrying obligation or restriction language, capped at 10
pub fn identify_critical_clauses(text: &str) -> Vec<String> {
    tokenize::sentences(text)
        .iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            CRITICAL_KEYWORDS
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .take(MAX_CRITICAL_CLAUSES)
        .map(|sentence| sentence.to_string())
        .collect()
}
