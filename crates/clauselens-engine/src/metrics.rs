//! Category aggregation, overall scoring, and derived guidance

use crate::indicators::detect_indicators;
use crate::types::{ExtractedClause, RiskIndicator, RiskItem, RiskMetrics};
use clauselens_domain::{normalize_delta, CategoryScores, RiskCategory, RiskLevel};

const MAX_RECOMMENDATIONS: usize = 6;
const MAX_PASS_ITEMS: usize = 5;

/// Roll indicator deltas into the five aggregate buckets
///
/// Each bucket accumulates the signed scores of its indicators, then two
/// text-presence adjustments apply (each floors the accumulated delta at 0):
/// "payment" lowers the financial delta by 5; "termination" together with
/// "notice" lowers the operational delta by 8. Every bucket normalizes to
/// `clamp(0, 100, 50 + delta)`.
pub fn category_scores(indicators: &[RiskIndicator], text: &str) -> CategoryScores {
    let lower = text.to_lowercase();

    let mut confidentiality: i64 = 0;
    let mut liability: i64 = 0;
    let mut compliance: i64 = 0;
    let mut financial: i64 = 0;
    let mut operational: i64 = 0;

    for indicator in indicators {
        let delta = i64::from(indicator.score);
        match indicator.category {
            RiskCategory::Confidentiality => confidentiality += delta,
            RiskCategory::Liability => liability += delta,
            RiskCategory::Compliance => compliance += delta,
            RiskCategory::Financial => financial += delta,
            RiskCategory::Operational => operational += delta,
        }
    }

    if lower.contains("payment") {
        financial = (financial - 5).max(0);
    }
    if lower.contains("termination") && lower.contains("notice") {
        operational = (operational - 8).max(0);
    }

    CategoryScores {
        confidentiality: normalize_delta(confidentiality),
        liability: normalize_delta(liability),
        compliance: normalize_delta(compliance),
        financial: normalize_delta(financial),
        operational: normalize_delta(operational),
    }
}

/// Mean of the risk-item severities, rounded; 0 for an empty list
///
/// This is the document-level score used by single-contract views. It is a
/// different computation from [`CategoryScores::weighted_overall`] and the
/// two are kept as separate named operations.
pub fn calculate_overall_risk(risks: &[RiskItem]) -> u8 {
    if risks.is_empty() {
        return 0;
    }
    let sum: u32 = risks.iter().map(|risk| u32::from(risk.severity)).sum();
    (f64::from(sum) / risks.len() as f64).round() as u8
}

/// Compute category scores, overall score, and guidance for a contract
///
/// The pre-extracted clause and risk lists are part of the call contract for
/// metric consumers; scoring derives from the raw text's indicator scan.
pub fn calculate_risk_metrics(
    text: &str,
    _clauses: &[ExtractedClause],
    _risks: &[RiskItem],
) -> RiskMetrics {
    let indicators = detect_indicators(text);
    let category_scores = category_scores(&indicators, text);
    let overall_score = category_scores.weighted_overall();
    let risk_level = RiskLevel::from_score(overall_score);

    let critical_issues: Vec<&'static str> = indicators
        .iter()
        .filter(|indicator| indicator.severity.is_actionable())
        .map(|indicator| indicator.recommendation)
        .collect();

    RiskMetrics {
        overall_score,
        risk_level,
        category_scores,
        recommendations: recommendations(&indicators, risk_level),
        critical_issues,
        pass_items: pass_items(text, &indicators),
    }
}

/// Actionable indicator recommendations in detection order, then
/// level-conditioned boilerplate, capped at 6
fn recommendations(indicators: &[RiskIndicator], risk_level: RiskLevel) -> Vec<&'static str> {
    let mut recommendations: Vec<&'static str> = indicators
        .iter()
        .filter(|indicator| indicator.severity.is_actionable())
        .map(|indicator| indicator.recommendation)
        .collect();

    match risk_level {
        RiskLevel::High => {
            recommendations.push("Seek legal counsel before signing this contract");
            recommendations.push("Consider renegotiating key terms");
        }
        RiskLevel::Medium => {
            recommendations.push("Address identified medium-risk items before execution");
        }
        RiskLevel::Safe | RiskLevel::Low => {}
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Positive findings: one per risk-reducing indicator, plus defaults for
/// substantial documents without unlimited liability, capped at 5
fn pass_items(text: &str, indicators: &[RiskIndicator]) -> Vec<String> {
    let mut items: Vec<String> = indicators
        .iter()
        .filter(|indicator| indicator.score < 0)
        .map(|indicator| format!("✓ {}", indicator.description))
        .collect();

    if text.len() > 500 && !text.to_lowercase().contains("unlimited liability") {
        items.push("✓ Contract includes reasonable scope definition".to_string());
        items.push("✓ Includes protective clauses for parties".to_string());
    }

    items.truncate(MAX_PASS_ITEMS);
    items
}
