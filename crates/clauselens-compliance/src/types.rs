//! Compliance report types

use crate::catalog::RequirementSpec;
use clauselens_domain::Severity;
use serde::Serialize;

/// One requirement's evaluation against a contract
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementResult {
    /// Stable requirement identifier ("gdpr-1")
    pub id: &'static str,
    /// Standard the requirement belongs to
    pub standard: &'static str,
    /// Short requirement title
    pub requirement: &'static str,
    /// What the requirement demands
    pub description: &'static str,
    /// How serious a miss is
    pub severity: Severity,
    /// Keywords that satisfy the requirement
    pub keywords: &'static [&'static str],
    /// Whether any keyword appeared in the text
    pub found: bool,
    /// ±50-character window around the first matching keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    /// Suggested remediation
    pub recommendation: &'static str,
}

impl RequirementResult {
    pub(crate) fn from_spec(spec: &RequirementSpec, found: bool, evidence: Option<String>) -> Self {
        RequirementResult {
            id: spec.id,
            standard: spec.standard,
            requirement: spec.requirement,
            description: spec.description,
            severity: spec.severity,
            keywords: spec.keywords,
            found,
            evidence,
            recommendation: spec.recommendation,
        }
    }
}

/// Per-standard compliance aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Standard name ("GDPR")
    pub standard: &'static str,
    /// `round(100 × passed / total)`
    pub overall_score: u8,
    /// Requirements whose keywords were found
    pub passed: usize,
    /// Critical requirements not found
    pub failed: usize,
    /// Non-critical requirements not found
    pub warnings: usize,
    /// Every requirement's evaluation, catalog order
    pub requirements: Vec<RequirementResult>,
    /// Human-readable one-liner
    pub summary: String,
}
