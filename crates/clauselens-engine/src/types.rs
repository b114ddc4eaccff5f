//! Result types produced by the analysis pipeline

use clauselens_domain::{
    AnalysisId, CategoryScores, ClauseCategory, RiskCategory, RiskLevel, Severity,
};
use serde::Serialize;

/// A clause matched during flat extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedClause {
    /// Category whose keyword produced the match
    pub category: ClauseCategory,
    /// First 80 characters of the matching sentence
    pub excerpt: String,
    /// Whether the excerpt was cut short
    pub truncated: bool,
    /// Every category keyword present in the source sentence, across all six
    /// categories. Missing-clause detection intersects against this set.
    pub matched_keywords: Vec<&'static str>,
    /// Full source sentence. Severity scoring reads this so keywords past the
    /// excerpt cut still count; it is not part of the wire shape.
    #[serde(skip)]
    pub source: String,
}

/// A scored entry in the risk list
///
/// Distinct from [`RiskIndicator`]: risk items are per-clause with a 0–100
/// severity, indicators are whole-document signals with signed deltas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskItem {
    /// Clause excerpt the risk was scored from
    pub clause: String,
    /// Severity in [0, 100]
    pub severity: u8,
    /// Reviewer-facing description of the concern
    pub description: &'static str,
}

/// A named whole-document risk signal
///
/// A contract either exhibits a given signal or it does not; each signal is
/// produced at most once per document. Negative scores are risk-reducing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskIndicator {
    /// Signal name
    pub name: &'static str,
    /// Signed delta contributed to the signal's category bucket
    pub score: i32,
    /// How concerning the signal is
    pub severity: Severity,
    /// Aggregate bucket this signal's score rolls into
    pub category: RiskCategory,
    /// What the signal means
    pub description: &'static str,
    /// Suggested follow-up
    pub recommendation: &'static str,
}

/// Category scores, overall score, and derived guidance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// Weighted combination of the category scores, in [0, 100]
    pub overall_score: u8,
    /// Risk band for the overall score
    pub risk_level: RiskLevel,
    /// Per-bucket scores, each in [0, 100]
    pub category_scores: CategoryScores,
    /// Follow-up actions, at most 6, actionable indicators first
    pub recommendations: Vec<&'static str>,
    /// Recommendations of every high/critical indicator
    pub critical_issues: Vec<&'static str>,
    /// Positive findings, at most 5
    pub pass_items: Vec<String>,
}

/// Terminal output of the analysis pipeline
///
/// Immutable once produced; each analysis invocation yields a fresh,
/// independent result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Identifier of this analysis run
    pub id: AnalysisId,
    /// Extracted clauses, at most 12, in scan order
    pub clauses: Vec<ExtractedClause>,
    /// Risk list, at most 8, sorted descending by severity
    pub risks: Vec<RiskItem>,
    /// "Missing {category}" statements for absent clause families
    pub missing_clauses: Vec<String>,
    /// Sentences granting rights, at most 5, 100-char excerpts
    pub permissions: Vec<String>,
    /// Sentences describing breach outcomes, at most 5, 100-char excerpts
    pub consequences: Vec<String>,
    /// One-line narrative of the findings
    pub summary: String,
    /// Elapsed wall-clock in milliseconds, informational only
    #[serde(rename = "processingTime")]
    pub processing_time_ms: f64,
    /// Cosmetic acceleration flag carried for report-shape compatibility
    #[serde(rename = "acceleratedByAMD")]
    pub accelerated_by_amd: bool,
}

/// Output of pairwise contract comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Clause families present in both documents
    pub similarities: Vec<String>,
    /// Clause families present in exactly one document
    pub differences: Vec<String>,
    /// Absolute difference of the documents' mean severity assessments
    pub risk_difference: f64,
}
