//! Clause and risk category enumerations

use serde::Serialize;

/// One of the six clause families scanned during extraction
///
/// Declaration order is a contract: extraction always scans categories in
/// this order, so flat clause lists are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClauseCategory {
    /// Confidentiality and non-disclosure obligations
    Confidentiality,
    /// Liability, indemnification, and damages terms
    Liability,
    /// Termination and expiration terms
    Termination,
    /// Payment, fees, and compensation terms
    Payment,
    /// Warranties, guarantees, and representations
    Warranty,
    /// Governing law, jurisdiction, and dispute resolution
    GoverningLaw,
}

impl ClauseCategory {
    /// All categories in declaration order
    pub const ALL: [ClauseCategory; 6] = [
        ClauseCategory::Confidentiality,
        ClauseCategory::Liability,
        ClauseCategory::Termination,
        ClauseCategory::Payment,
        ClauseCategory::Warranty,
        ClauseCategory::GoverningLaw,
    ];

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseCategory::Confidentiality => "confidentiality",
            ClauseCategory::Liability => "liability",
            ClauseCategory::Termination => "termination",
            ClauseCategory::Payment => "payment",
            ClauseCategory::Warranty => "warranty",
            ClauseCategory::GoverningLaw => "governing law",
        }
    }

    /// Human-readable display name (used in missing-clause statements)
    pub fn display_name(&self) -> &'static str {
        match self {
            ClauseCategory::Confidentiality => "Confidentiality",
            ClauseCategory::Liability => "Liability",
            ClauseCategory::Termination => "Termination",
            ClauseCategory::Payment => "Payment",
            ClauseCategory::Warranty => "Warranty",
            ClauseCategory::GoverningLaw => "Governing Law",
        }
    }

    /// Parse a category from its lowercase identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "confidentiality" => Some(ClauseCategory::Confidentiality),
            "liability" => Some(ClauseCategory::Liability),
            "termination" => Some(ClauseCategory::Termination),
            "payment" => Some(ClauseCategory::Payment),
            "warranty" => Some(ClauseCategory::Warranty),
            "governing law" | "governinglaw" => Some(ClauseCategory::GoverningLaw),
            _ => None,
        }
    }
}

impl std::str::FromStr for ClauseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid clause category: {}", s))
    }
}

/// One of the five aggregate buckets that indicator deltas roll up into
///
/// Note this is a different grouping from [`ClauseCategory`]: several clause
/// families (termination, warranty, governing law) aggregate under
/// Operational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    /// Confidentiality protections
    Confidentiality,
    /// Liability and indemnity exposure
    Liability,
    /// Regulatory and data-protection posture
    Compliance,
    /// Payment and fee exposure
    Financial,
    /// Everything else: termination, exclusivity, assignment, audit
    Operational,
}

impl RiskCategory {
    /// All buckets in declaration order
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Confidentiality,
        RiskCategory::Liability,
        RiskCategory::Compliance,
        RiskCategory::Financial,
        RiskCategory::Operational,
    ];

    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Confidentiality => "confidentiality",
            RiskCategory::Liability => "liability",
            RiskCategory::Compliance => "compliance",
            RiskCategory::Financial => "financial",
            RiskCategory::Operational => "operational",
        }
    }
}
