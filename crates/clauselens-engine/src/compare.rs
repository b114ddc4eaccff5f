//! Pairwise contract comparison

use crate::classifier::{self, clause_patterns};
use crate::tokenize;
use crate::types::ComparisonResult;
use clauselens_domain::ClauseCategory;

/// Category-scoped view of one document
///
/// Produced by [`analyze_document`]; comparison runs one per side. The
/// severity assessment here is the deterministic pattern-importance pass,
/// intentionally separate from the randomized per-clause scoring used by the
/// single-document risk list.
#[derive(Debug, Clone)]
pub struct LegalAnalysis {
    clauses: Vec<(ClauseCategory, Vec<String>)>,
    /// Special-interest paragraphs (force majeure, insurance, ...)
    pub special_clauses: Vec<String>,
    severity_assessment: Vec<(ClauseCategory, u8)>,
}

impl LegalAnalysis {
    /// Paragraph excerpts extracted for one category
    pub fn clauses_for(&self, category: ClauseCategory) -> &[String] {
        self.clauses
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, clauses)| clauses.as_slice())
            .unwrap_or(&[])
    }

    /// Assessed severity for one category, if any sentence matched it
    pub fn severity_for(&self, category: ClauseCategory) -> Option<u8> {
        self.severity_assessment
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, severity)| *severity)
    }

    /// Mean of the per-category severity assessments; 0 when nothing matched
    pub fn mean_severity(&self) -> f64 {
        if self.severity_assessment.is_empty() {
            return 0.0;
        }
        let sum: u32 = self
            .severity_assessment
            .iter()
            .map(|(_, severity)| u32::from(*severity))
            .sum();
        f64::from(sum) / self.severity_assessment.len() as f64
    }
}

/// Run the category-scoped classification and severity assessment on one
/// document
pub fn analyze_document(text: &str) -> LegalAnalysis {
    let sentences = tokenize::sentences(text);
    let paragraphs = tokenize::paragraphs(text);

    let clauses = ClauseCategory::ALL
        .iter()
        .map(|category| {
            (
                *category,
                classifier::extract_by_category(&paragraphs, *category),
            )
        })
        .collect();

    LegalAnalysis {
        clauses,
        special_clauses: classifier::extract_special_clauses(&paragraphs),
        severity_assessment: assess_severity(&sentences),
    }
}

/// Deterministic per-category severity: pattern importance plus phrase
/// bonuses, keeping the maximum across all matching sentences
///
/// `score = importance × 10 + 15·unlimited + 12·perpetual + 10·exclusive +
/// 8·prohibit + 5·(must|shall)`, capped at 100.
fn assess_severity(sentences: &[&str]) -> Vec<(ClauseCategory, u8)> {
    let mut maxima: [Option<u8>; 6] = [None; 6];

    for sentence in sentences {
        let lower = sentence.to_lowercase();

        for (slot, entry) in clause_patterns().iter().enumerate() {
            if !entry.matches(sentence) {
                continue;
            }

            let mut score = entry.importance * 10;
            if lower.contains("unlimited") {
                score += 15;
            }
            if lower.contains("perpetual") {
                score += 12;
            }
            if lower.contains("exclusive") {
                score += 10;
            }
            if lower.contains("prohibit") {
                score += 8;
            }
            if lower.contains("must") || lower.contains("shall") {
                score += 5;
            }

            let score = score.min(100) as u8;
            maxima[slot] = Some(maxima[slot].map_or(score, |existing| existing.max(score)));
        }
    }

    clause_patterns()
        .iter()
        .zip(maxima)
        .filter_map(|(entry, score)| score.map(|s| (entry.category, s)))
        .collect()
}

/// Compare two contracts category by category
///
/// Both documents run the category-scoped pipeline independently. A category
/// present in both yields a similarity statement, in exactly one a
/// difference statement, in neither no statement. The risk difference is the
/// absolute gap between the documents' mean severity assessments, so it is
/// symmetric in its arguments.
pub fn compare_contracts(first: &str, second: &str) -> ComparisonResult {
    let analysis_first = analyze_document(first);
    let analysis_second = analyze_document(second);

    let mut similarities = Vec::new();
    let mut differences = Vec::new();

    for category in ClauseCategory::ALL {
        let in_first = !analysis_first.clauses_for(category).is_empty();
        let in_second = !analysis_second.clauses_for(category).is_empty();

        match (in_first, in_second) {
            (true, true) => similarities.push(format!(
                "Both contracts include {} clauses",
                category.as_str()
            )),
            (true, false) | (false, true) => differences.push(format!(
                "Only one contract includes detailed {} clauses",
                category.as_str()
            )),
            (false, false) => {}
        }
    }

    let risk_difference =
        (analysis_first.mean_severity() - analysis_second.mean_severity()).abs();

    ComparisonResult {
        similarities,
        differences,
        risk_difference,
    }
}
