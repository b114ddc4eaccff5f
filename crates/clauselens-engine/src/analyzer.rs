//! Full-pipeline contract analysis

use crate::classifier;
use crate::error::EngineError;
use crate::severity;
use crate::tokenize;
use crate::types::{AnalysisResult, ExtractedClause, RiskItem};
use clauselens_domain::{excerpt, AnalysisId};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};

/// Permissions and consequences each keep at most this many sentences
const MAX_SENTENCE_EXCERPTS: usize = 5;
const SENTENCE_EXCERPT_LEN: usize = 100;

const PERMISSION_KEYWORDS: &[&str] = &[
    "you may",
    "you are permitted",
    "granted",
    "entitled",
    "allowed",
    "permitted",
];

const CONSEQUENCE_KEYWORDS: &[&str] = &[
    "breach",
    "violation",
    "failure",
    "default",
    "consequence",
    "result",
    "penalty",
];

/// Run the full analysis pipeline on a contract
///
/// Per-clause severity draws its random base from the thread-local
/// generator; use [`analyze_with_rng`] to pin it.
pub fn analyze(text: &str) -> Result<AnalysisResult, EngineError> {
    analyze_with_rng(text, &mut rand::thread_rng())
}

/// Run the full analysis pipeline with a caller-supplied random source
///
/// With a fixed generator the pipeline is a pure function of its input:
/// repeated calls yield identical output. Fails with
/// [`EngineError::EmptyInput`] on empty or whitespace-only text; no partial
/// result is ever produced.
pub fn analyze_with_rng<R: Rng + ?Sized>(
    text: &str,
    rng: &mut R,
) -> Result<AnalysisResult, EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let started = Instant::now();
    let sentences = tokenize::sentences(text);
    debug!(sentences = sentences.len(), "tokenized contract");

    let clauses = classifier::extract_clauses(&sentences);
    let risks = severity::assess_risks(&clauses, rng);
    let missing_clauses = classifier::missing_clauses(&clauses);
    let permissions = keyword_excerpts(&sentences, PERMISSION_KEYWORDS);
    let consequences = keyword_excerpts(&sentences, CONSEQUENCE_KEYWORDS);
    let summary = generate_summary(&clauses, &risks);

    let result = AnalysisResult {
        id: AnalysisId::new(),
        clauses,
        risks,
        missing_clauses,
        permissions,
        consequences,
        summary,
        processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        accelerated_by_amd: true,
    };

    info!(
        analysis = %result.id,
        clauses = result.clauses.len(),
        risks = result.risks.len(),
        missing = result.missing_clauses.len(),
        "contract analysis complete"
    );

    Ok(result)
}

/// Sentences containing any of the keywords, as 100-char excerpts
fn keyword_excerpts(sentences: &[&str], keywords: &[&str]) -> Vec<String> {
    sentences
        .iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            keywords.iter().any(|keyword| lower.contains(keyword))
        })
        .take(MAX_SENTENCE_EXCERPTS)
        .map(|sentence| excerpt(sentence, SENTENCE_EXCERPT_LEN).0)
        .collect()
}

fn generate_summary(clauses: &[ExtractedClause], risks: &[RiskItem]) -> String {
    let high_risk = risks.iter().filter(|risk| risk.severity > 70).count();
    let medium_risk = risks
        .iter()
        .filter(|risk| risk.severity > 40 && risk.severity <= 70)
        .count();

    let verdict = if high_risk > 0 {
        "Immediate review recommended."
    } else {
        "Generally acceptable terms."
    };

    format!(
        "Contract contains {} key clauses with {} high-risk and {} medium-risk items identified. {}",
        clauses.len(),
        high_risk,
        medium_risk,
        verdict
    )
}
