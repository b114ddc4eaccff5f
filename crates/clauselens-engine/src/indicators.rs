//! Whole-document risk indicator detection

use crate::types::RiskIndicator;
use clauselens_domain::{RiskCategory, Severity};

fn indicator(
    name: &'static str,
    score: i32,
    severity: Severity,
    category: RiskCategory,
    description: &'static str,
    recommendation: &'static str,
) -> RiskIndicator {
    RiskIndicator {
        name,
        score,
        severity,
        category,
        description,
        recommendation,
    }
}

/// Scan the full contract text for risk signals
///
/// A fixed ordered checklist of case-insensitive substring tests; each test
/// appends at most one indicator, so output order is deterministic. Paired
/// entries (liability cap, confidentiality, termination, data protection,
/// indemnity) are either/or: the risk form suppresses the protective form
/// and vice versa.
pub fn detect_indicators(text: &str) -> Vec<RiskIndicator> {
    let lower = text.to_lowercase();
    let mut indicators = Vec::new();

    if lower.contains("unlimited liability") || lower.contains("no limit") {
        indicators.push(indicator(
            "Unlimited Liability",
            25,
            Severity::Critical,
            RiskCategory::Liability,
            "Contract contains no cap on liability exposure",
            "Negotiate a reasonable liability cap (e.g., 12 months of fees)",
        ));
    } else if lower.contains("limitation of liability") {
        indicators.push(indicator(
            "Liability Cap Present",
            -20,
            Severity::Low,
            RiskCategory::Liability,
            "Contract includes reasonable liability limitations",
            "Review cap amount to ensure adequacy for your business",
        ));
    }

    if !lower.contains("confidential") && !lower.contains("nda") {
        indicators.push(indicator(
            "Missing Confidentiality Clause",
            20,
            Severity::High,
            RiskCategory::Confidentiality,
            "No confidentiality protection identified",
            "Add comprehensive confidentiality obligations",
        ));
    } else if lower.contains("mutual confidentiality") || lower.contains("mutual nda") {
        indicators.push(indicator(
            "Mutual Confidentiality",
            -18,
            Severity::Low,
            RiskCategory::Confidentiality,
            "Strong mutual confidentiality protections present",
            "Ensure confidentiality period is appropriate for your needs",
        ));
    }

    if lower.contains("perpetual") || lower.contains("in perpetuity") {
        indicators.push(indicator(
            "Perpetual Obligation",
            18,
            Severity::High,
            RiskCategory::Operational,
            "Contract includes indefinite/perpetual obligations",
            "Negotiate time limits on key obligations",
        ));
    }

    if lower.contains("exclusive") && lower.contains("right") {
        indicators.push(indicator(
            "Exclusive Restrictions",
            15,
            Severity::High,
            RiskCategory::Operational,
            "Exclusive rights clauses may limit your business flexibility",
            "Clarify scope of exclusivity and any carve-outs",
        ));
    }

    if lower.contains("at-will")
        || lower.contains("at will")
        || lower.contains("terminate without cause")
    {
        indicators.push(indicator(
            "Unilateral Termination",
            14,
            Severity::Medium,
            RiskCategory::Operational,
            "One party can terminate without cause",
            "Require notice period or termination fee if unfavorable",
        ));
    } else if lower.contains("for cause") && lower.contains("termination") {
        indicators.push(indicator(
            "Termination for Cause",
            -12,
            Severity::Low,
            RiskCategory::Operational,
            "Termination limited to specific causes",
            "Ensure causes are clearly defined and reasonable",
        ));
    }

    if lower.contains("non-compete") || lower.contains("noncompete") {
        indicators.push(indicator(
            "Non-Compete Clause",
            16,
            Severity::High,
            RiskCategory::Operational,
            "Contract includes non-compete restrictions",
            "Negotiate reasonable time/geographic limits",
        ));
    }

    if lower.contains("gdpr") || lower.contains("ccpa") || lower.contains("data protection") {
        indicators.push(indicator(
            "Data Protection Compliance",
            -25,
            Severity::Low,
            RiskCategory::Compliance,
            "Contract addresses data protection requirements",
            "Ensure compliance procedures are clearly documented",
        ));
    } else if lower.contains("data") && lower.contains("process") {
        indicators.push(indicator(
            "Data Protection Gap",
            22,
            Severity::Critical,
            RiskCategory::Compliance,
            "Data handling lacks clear protection terms",
            "Add explicit data protection and privacy provisions",
        ));
    }

    if lower.contains("indemnif") {
        if lower.contains("mutual") {
            // Dispatches to Operational, not Liability: only the one-sided
            // form is a liability-bucket signal.
            indicators.push(indicator(
                "Mutual Indemnification",
                -12,
                Severity::Low,
                RiskCategory::Operational,
                "Mutual indemnification protections present",
                "Ensure coverage includes third-party IP claims",
            ));
        } else {
            indicators.push(indicator(
                "One-sided Indemnity",
                12,
                Severity::Medium,
                RiskCategory::Liability,
                "Indemnification obligations are one-sided",
                "Negotiate mutual indemnification terms",
            ));
        }
    }

    if lower.contains("audit") {
        indicators.push(indicator(
            "Audit Rights Present",
            6,
            Severity::Low,
            RiskCategory::Operational,
            "Contract includes audit/inspection rights",
            "Ensure audit rights are limited in scope and frequency",
        ));
    }

    if lower.contains("assign") && lower.contains("restrict") {
        indicators.push(indicator(
            "Assignment Restrictions",
            8,
            Severity::Low,
            RiskCategory::Operational,
            "Agreement restricts assignment rights",
            "Negotiate exceptions for M&A or affiliate assignments",
        ));
    }

    indicators
}
