//! Clause classification: keyword scan over sentences, regex scan over
//! paragraphs

use crate::types::ExtractedClause;
use clauselens_domain::{excerpt, ClauseCategory};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Flat extraction keeps at most this many clauses
pub const MAX_FLAT_CLAUSES: usize = 12;

/// Category-scoped extraction keeps at most this many clauses per category
pub const MAX_CATEGORY_CLAUSES: usize = 5;

const SENTENCE_EXCERPT_LEN: usize = 80;
const PARAGRAPH_EXCERPT_LEN: usize = 150;
const SPECIAL_EXCERPT_LEN: usize = 120;
const MAX_SPECIAL_CLAUSES: usize = 4;

const CONFIDENTIALITY_KEYWORDS: &[&str] = &[
    "confidentiality",
    "non-disclosure",
    "nda",
    "trade secret",
    "proprietary",
    "confidential information",
];

const LIABILITY_KEYWORDS: &[&str] = &[
    "liability",
    "indemnity",
    "indemnification",
    "damages",
    "limitation of liability",
    "negligence",
];

const TERMINATION_KEYWORDS: &[&str] = &[
    "termination",
    "terminate",
    "expiration",
    "end of agreement",
    "cancellation",
];

const PAYMENT_KEYWORDS: &[&str] = &[
    "payment",
    "fees",
    "compensation",
    "royalty",
    "consideration",
    "billing",
];

const WARRANTY_KEYWORDS: &[&str] = &[
    "warranty",
    "warrant",
    "guarantee",
    "representation",
    "condition",
];

const GOVERNING_LAW_KEYWORDS: &[&str] = &[
    "governing law",
    "jurisdiction",
    "venue",
    "arbitration",
    "dispute resolution",
];

/// The lowercase keyword list owned by a category, in declared order
pub fn keywords(category: ClauseCategory) -> &'static [&'static str] {
    match category {
        ClauseCategory::Confidentiality => CONFIDENTIALITY_KEYWORDS,
        ClauseCategory::Liability => LIABILITY_KEYWORDS,
        ClauseCategory::Termination => TERMINATION_KEYWORDS,
        ClauseCategory::Payment => PAYMENT_KEYWORDS,
        ClauseCategory::Warranty => WARRANTY_KEYWORDS,
        ClauseCategory::GoverningLaw => GOVERNING_LAW_KEYWORDS,
    }
}

/// Every keyword from any category that appears in the lowercased sentence
fn matched_keywords(lowered_sentence: &str) -> Vec<&'static str> {
    ClauseCategory::ALL
        .iter()
        .flat_map(|category| keywords(*category).iter())
        .filter(|keyword| lowered_sentence.contains(**keyword))
        .copied()
        .collect()
}

/// Extract the flat clause list from pre-tokenized sentences
///
/// Scans categories in declaration order, each category's keywords in
/// declared order, sentences in document order. The first keyword to match a
/// sentence claims it; later keywords skip it. Case-insensitive. Caps at
/// [`MAX_FLAT_CLAUSES`].
pub fn extract_clauses(sentences: &[&str]) -> Vec<ExtractedClause> {
    let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
    let mut seen: HashSet<usize> = HashSet::new();
    let mut clauses = Vec::new();

    'scan: for category in ClauseCategory::ALL {
        for keyword in keywords(category) {
            for (index, lowered_sentence) in lowered.iter().enumerate() {
                if seen.contains(&index) || !lowered_sentence.contains(keyword) {
                    continue;
                }
                seen.insert(index);
                let (text, truncated) = excerpt(sentences[index], SENTENCE_EXCERPT_LEN);
                clauses.push(ExtractedClause {
                    category,
                    excerpt: text,
                    truncated,
                    matched_keywords: matched_keywords(lowered_sentence),
                    source: sentences[index].to_string(),
                });
                if clauses.len() == MAX_FLAT_CLAUSES {
                    break 'scan;
                }
            }
        }
    }

    clauses
}

/// "Missing {category}" statements for every category no retained clause
/// matches
///
/// A category counts as present iff some clause's matched-keyword set
/// intersects the category's keyword list. The six-category universe is
/// checked exhaustively.
pub fn missing_clauses(clauses: &[ExtractedClause]) -> Vec<String> {
    ClauseCategory::ALL
        .iter()
        .filter(|category| {
            !clauses.iter().any(|clause| {
                clause
                    .matched_keywords
                    .iter()
                    .any(|keyword| keywords(**category).contains(keyword))
            })
        })
        .map(|category| format!("Missing {}", category.display_name()))
        .collect()
}

pub(crate) struct CategoryPatterns {
    pub(crate) category: ClauseCategory,
    pub(crate) importance: u32,
    pub(crate) patterns: Vec<Regex>,
}

impl CategoryPatterns {
    fn new(category: ClauseCategory, importance: u32, sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .map(|source| Regex::new(source).expect("invalid clause pattern"))
            .collect();
        CategoryPatterns {
            category,
            importance,
            patterns,
        }
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(text))
    }
}

/// Compiled per-category pattern table, built once at first use
pub(crate) fn clause_patterns() -> &'static [CategoryPatterns] {
    static PATTERNS: OnceLock<Vec<CategoryPatterns>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        vec![
            CategoryPatterns::new(
                ClauseCategory::Confidentiality,
                8,
                &[
                    r"(?i)confidential(ity)?.*information",
                    r"(?i)non[\s-]?disclosure",
                    r"(?i)nda",
                    r"(?i)trade secrets?",
                    r"(?i)proprietary",
                ],
            ),
            CategoryPatterns::new(
                ClauseCategory::Liability,
                9,
                &[
                    r"(?i)liability|indemnif(ication|y)",
                    r"(?i)damages",
                    r"(?i)limitation of liability",
                    r"(?i)cap on liability",
                    r"(?i)negligence",
                ],
            ),
            CategoryPatterns::new(
                ClauseCategory::Termination,
                7,
                &[
                    r"(?i)terminat(ion|e)",
                    r"(?i)expir(ation|e)",
                    r"(?i)end of .*agreement",
                    r"(?i)termination for cause",
                    r"(?i)at-?will",
                ],
            ),
            CategoryPatterns::new(
                ClauseCategory::Payment,
                8,
                &[
                    r"(?i)payment.*terms?",
                    r"(?i)fees|royalt(y|ies)",
                    r"(?i)compensation",
                    r"(?i)billing",
                    r"(?i)invoice",
                ],
            ),
            CategoryPatterns::new(
                ClauseCategory::Warranty,
                7,
                &[
                    r"(?i)warrant(y|ies)",
                    r"(?i)warrant(s)?",
                    r"(?i)guarantee(s)?",
                    r"(?i)represent(ation|s)",
                    r"(?i)condition(s)?",
                ],
            ),
            CategoryPatterns::new(
                ClauseCategory::GoverningLaw,
                6,
                &[
                    r"(?i)governing law",
                    r"(?i)jurisdiction",
                    r"(?i)arbitration",
                    r"(?i)dispute resolution",
                    r"(?i)venue",
                ],
            ),
        ]
    })
}

pub(crate) fn patterns_for(category: ClauseCategory) -> &'static CategoryPatterns {
    clause_patterns()
        .iter()
        .find(|entry| entry.category == category)
        .expect("pattern table covers every category")
}

/// Extract up to [`MAX_CATEGORY_CLAUSES`] paragraph excerpts for one category
///
/// Paragraphs are scanned in document order; a paragraph is taken when any of
/// the category's patterns matches it. Excerpts are 150 characters.
pub fn extract_by_category(paragraphs: &[&str], category: ClauseCategory) -> Vec<String> {
    let entry = patterns_for(category);
    paragraphs
        .iter()
        .filter(|paragraph| entry.matches(paragraph))
        .take(MAX_CATEGORY_CLAUSES)
        .map(|paragraph| excerpt(paragraph, PARAGRAPH_EXCERPT_LEN).0)
        .collect()
}

/// Extract special-interest paragraphs outside the six clause families
///
/// Force majeure, audit rights, insurance, export control, compliance, data
/// protection, privacy, security. Caps at 4, 120-char excerpts.
pub fn extract_special_clauses(paragraphs: &[&str]) -> Vec<String> {
    static SPECIAL: OnceLock<Vec<Regex>> = OnceLock::new();
    let patterns = SPECIAL.get_or_init(|| {
        [
            r"(?i)force majeure",
            r"(?i)audit.*right",
            r"(?i)insurance",
            r"(?i)export.*control",
            r"(?i)compliance",
            r"(?i)data protection",
            r"(?i)privacy",
            r"(?i)security",
        ]
        .iter()
        .map(|source| Regex::new(source).expect("invalid special-clause pattern"))
        .collect()
    });

    paragraphs
        .iter()
        .filter(|paragraph| patterns.iter().any(|pattern| pattern.is_match(paragraph)))
        .take(MAX_SPECIAL_CLAUSES)
        .map(|paragraph| excerpt(paragraph, SPECIAL_EXCERPT_LEN).0)
        .collect()
}
