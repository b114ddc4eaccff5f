//! ClauseLens Engine
//!
//! The clause/risk scoring pipeline: turns a free-text contract into a
//! structured risk assessment.
//!
//! # Overview
//!
//! Analysis is a sequence of deterministic pattern-matching passes over the
//! contract text, followed by arithmetic aggregation:
//!
//! ```text
//! Text → Tokenizer → Clause Classifier ┬→ Severity Calculator → Risk Items
//!                    Indicator Detector ┴→ Category Scores → Overall Score
//! ```
//!
//! # Key Features
//!
//! - **Clause Extraction**: keyword scan over sentences (flat list) and
//!   regex scan over paragraphs (per-category view)
//! - **Risk Indicators**: whole-document signals with signed score deltas
//! - **Severity Scoring**: per-clause 0–100 severity with an injectable
//!   random base term
//! - **Weighted Metrics**: five-bucket category scores combined into one
//!   overall score and risk level
//! - **Comparison**: pairwise contract similarity/difference statements and
//!   a symmetric risk-difference metric
//!
//! # Example Usage
//!
//! ```
//! use clauselens_engine::{analyze, calculate_risk_metrics};
//!
//! let text = "Each party shall maintain confidentiality of proprietary \
//!             information. Payment is due within 30 days of invoice.";
//!
//! let analysis = analyze(text)?;
//! let metrics = calculate_risk_metrics(text, &analysis.clauses, &analysis.risks);
//!
//! assert!(analysis.clauses.len() <= 12);
//! assert!(metrics.overall_score <= 100);
//! # Ok::<(), clauselens_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

mod analyzer;
mod classifier;
mod compare;
mod error;
mod indicators;
mod keyterms;
mod metrics;
mod severity;
mod tokenize;
mod types;


pub use analyzer::{analyze, analyze_with_rng};
pub use classifier::{
    extract_by_category, extract_clauses, extract_special_clauses, keywords, missing_clauses,
    MAX_CATEGORY_CLAUSES, MAX_FLAT_CLAUSES,
};
pub use compare::{analyze_document, compare_contracts, LegalAnalysis};
pub use error::EngineError;
pub use indicators::detect_indicators;
pub use keyterms::{extract_key_terms, identify_critical_clauses};
pub use metrics::{calculate_overall_risk, calculate_risk_metrics, category_scores};
pub use severity::{assess_risks, clause_severity, risk_description, MAX_RISK_ITEMS};
pub use tokenize::{paragraphs, sentences};
pub use types::{
    AnalysisResult, ComparisonResult, ExtractedClause, RiskIndicator, RiskItem, RiskMetrics,
};
