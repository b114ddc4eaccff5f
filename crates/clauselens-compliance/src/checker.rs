//! Compliance evaluation against the requirement catalogs

use crate::catalog::{requirements_for, Standard};
use crate::types::{ComplianceReport, RequirementResult};
use clauselens_domain::Severity;

const EVIDENCE_WINDOW: usize = 50;

/// Evaluate the contract against every requested standard
///
/// Reports come back in fixed catalog order (GDPR, CCPA, HIPAA) regardless
/// of the requested order; unknown standard names are skipped.
pub fn check_compliance<S: AsRef<str>>(text: &str, standards: &[S]) -> Vec<ComplianceReport> {
    [Standard::Gdpr, Standard::Ccpa, Standard::Hipaa]
        .into_iter()
        .filter(|standard| {
            standards
                .iter()
                .any(|name| Standard::parse(name.as_ref()) == Some(*standard))
        })
        .map(|standard| check_standard(text, standard))
        .collect()
}

/// Evaluate the contract against one standard's catalog
///
/// A requirement is found iff any of its keywords appears case-insensitively
/// in the text. Totals account for every requirement exactly once:
/// `passed` found, `failed` critical not-found, `warnings` other not-found.
pub fn check_standard(text: &str, standard: Standard) -> ComplianceReport {
    let lower = text.to_lowercase();

    let requirements: Vec<RequirementResult> = requirements_for(standard)
        .iter()
        .map(|spec| {
            let found = spec.keywords.iter().any(|keyword| lower.contains(keyword));
            let evidence = if found {
                extract_evidence(text, &lower, spec.keywords)
            } else {
                None
            };
            RequirementResult::from_spec(spec, found, evidence)
        })
        .collect();

    let total = requirements.len();
    let passed = requirements.iter().filter(|req| req.found).count();
    let failed = requirements
        .iter()
        .filter(|req| !req.found && req.severity == Severity::Critical)
        .count();
    let warnings = requirements
        .iter()
        .filter(|req| !req.found && req.severity != Severity::Critical)
        .count();
    let overall_score = ((passed as f64 / total as f64) * 100.0).round() as u8;

    let mut summary = format!(
        "{} Compliance Score: {}%. {} of {} requirements met.",
        standard.as_str(),
        overall_score,
        passed,
        total
    );
    if failed > 0 {
        summary.push_str(&format!(" {} critical requirements missing.", failed));
    }

    ComplianceReport {
        standard: standard.as_str(),
        overall_score,
        passed,
        failed,
        warnings,
        requirements,
        summary,
    }
}

/// ±50-character window around the first keyword hit, wrapped in ellipses
fn extract_evidence(text: &str, lower: &str, keywords: &[&str]) -> Option<String> {
    for keyword in keywords {
        if let Some(index) = lower.find(keyword) {
            let start = clamp_backward(text, index.saturating_sub(EVIDENCE_WINDOW));
            let end = clamp_forward(text, (index + keyword.len() + EVIDENCE_WINDOW).min(text.len()));
            return Some(format!("...{}...", &text[start..end]));
        }
    }
    None
}

fn clamp_backward(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn clamp_forward(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    // Matches no GDPR keyword
    const UNRELATED: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_gdpr_empty_match() {
        let reports = check_compliance(UNRELATED, &["GDPR"]);
        assert_eq!(reports.len(), 1);

        let report = &reports[0];
        assert_eq!(report.standard, "GDPR");
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.passed, 0);
        assert_eq!(report.failed, 3);
        assert_eq!(report.warnings, 2);
        assert!(report.requirements.iter().all(|req| !req.found));
        assert!(report.requirements.iter().all(|req| req.evidence.is_none()));
    }

    #[test]
    fn test_gdpr_full_pass() {
        let text = "Processing rests on consent; subjects have access rights; the dpo \
                    is reachable; breach notification applies; international transfer \
                    uses standard contractual clauses.";
        let report = check_standard(text, Standard::Gdpr);

        assert_eq!(report.passed, 5);
        assert_eq!(report.failed, 0);
        assert_eq!(report.warnings, 0);
        assert_eq!(report.overall_score, 100);
        assert_eq!(
            report.summary,
            "GDPR Compliance Score: 100%. 5 of 5 requirements met."
        );
    }

    #[test]
    fn test_totals_account_for_every_requirement() {
        for standard in [Standard::Gdpr, Standard::Ccpa, Standard::Hipaa] {
            for text in [UNRELATED, "breach notification and encryption and privacy policy"] {
                let report = check_standard(text, standard);
                assert_eq!(
                    report.passed + report.failed + report.warnings,
                    report.requirements.len()
                );
            }
        }
    }

    #[test]
    fn test_score_rounding() {
        // HIPAA: exactly one of three requirements met → 33.3% rounds to 33
        let report = check_standard("encryption is required in transit", Standard::Hipaa);
        assert_eq!(report.passed, 1);
        assert_eq!(report.overall_score, 33);

        // Two of three → 66.7% rounds to 67
        let report = check_standard(
            "encryption plus breach notification procedures",
            Standard::Hipaa,
        );
        assert_eq!(report.passed, 2);
        assert_eq!(report.overall_score, 67);
    }

    #[test]
    fn test_summary_mentions_critical_misses() {
        let report = check_standard(UNRELATED, Standard::Hipaa);
        assert_eq!(
            report.summary,
            "HIPAA Compliance Score: 0%. 0 of 3 requirements met. 3 critical requirements missing."
        );
    }

    #[test]
    fn test_evidence_window() {
        let text = format!("{} breach handling described here {}", "a".repeat(80), "b".repeat(80));
        let report = check_standard(&text, Standard::Gdpr);
        let breach = report
            .requirements
            .iter()
            .find(|req| req.id == "gdpr-4")
            .unwrap();

        assert!(breach.found);
        let evidence = breach.evidence.as_ref().unwrap();
        assert!(evidence.starts_with("..."));
        assert!(evidence.ends_with("..."));
        assert!(evidence.contains("breach"));
        // 50 before + keyword + 50 after, plus the ellipsis wrappers
        assert_eq!(evidence.len(), 3 + 50 + "breach".len() + 50 + 3);
    }

    #[test]
    fn test_requested_order_is_normalized() {
        let reports = check_compliance(UNRELATED, &["HIPAA", "GDPR", "GDPR"]);
        let names: Vec<&str> = reports.iter().map(|r| r.standard).collect();
        assert_eq!(names, vec!["GDPR", "HIPAA"]);
    }

    #[test]
    fn test_unknown_standard_skipped() {
        let reports = check_compliance(UNRELATED, &["SOC2"]);
        assert!(reports.is_empty());
    }

    #[test]
    fn test_report_wire_shape() {
        let report = check_standard(UNRELATED, Standard::Gdpr);
        let value = serde_json::to_value(&report).unwrap();

        assert!(value.get("overallScore").is_some());
        assert_eq!(value["requirements"][0]["severity"], "critical");
        // Absent evidence is omitted, not serialized as null
        assert!(value["requirements"][0].get("evidence").is_none());
    }
}
