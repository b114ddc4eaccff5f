//! Fixed regulatory requirement catalogs

use clauselens_domain::Severity;

/// A supported regulatory standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    /// EU General Data Protection Regulation
    Gdpr,
    /// California Consumer Privacy Act
    Ccpa,
    /// US Health Insurance Portability and Accountability Act
    Hipaa,
}

impl Standard {
    /// Get the standard name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::Gdpr => "GDPR",
            Standard::Ccpa => "CCPA",
            Standard::Hipaa => "HIPAA",
        }
    }

    /// Parse a standard from its name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GDPR" => Some(Standard::Gdpr),
            "CCPA" => Some(Standard::Ccpa),
            "HIPAA" => Some(Standard::Hipaa),
            _ => None,
        }
    }
}

impl std::str::FromStr for Standard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown compliance standard: {}", s))
    }
}

/// One catalog entry: what a standard requires and which keywords satisfy it
#[derive(Debug)]
pub struct RequirementSpec {
    pub(crate) id: &'static str,
    pub(crate) standard: &'static str,
    pub(crate) requirement: &'static str,
    pub(crate) description: &'static str,
    pub(crate) severity: Severity,
    pub(crate) keywords: &'static [&'static str],
    pub(crate) recommendation: &'static str,
}

const GDPR_REQUIREMENTS: &[RequirementSpec] = &[
    RequirementSpec {
        id: "gdpr-1",
        standard: "GDPR",
        requirement: "Lawful Basis for Processing",
        description: "Contract must specify lawful basis for personal data processing",
        severity: Severity::Critical,
        keywords: &[
            "lawful basis",
            "consent",
            "processing",
            "data",
            "legitimate interest",
        ],
        recommendation: "Add explicit statement of lawful basis (consent, contract, legal \
                         obligation, vital interests, public task, or legitimate interests)",
    },
    RequirementSpec {
        id: "gdpr-2",
        standard: "GDPR",
        requirement: "Data Subject Rights",
        description: "Must acknowledge right to access, rectification, erasure, and portability",
        severity: Severity::Critical,
        keywords: &[
            "data subject rights",
            "access",
            "rectification",
            "erasure",
            "right to be forgotten",
            "portability",
        ],
        recommendation: "Include specific section detailing how data subjects can exercise \
                         their rights",
    },
    RequirementSpec {
        id: "gdpr-3",
        standard: "GDPR",
        requirement: "Data Protection Officer",
        description: "Should mention DPO contact if applicable",
        severity: Severity::Medium,
        keywords: &["data protection officer", "dpo", "privacy officer"],
        recommendation: "Add DPO contact information if organization processes large volumes \
                         of personal data",
    },
    RequirementSpec {
        id: "gdpr-4",
        standard: "GDPR",
        requirement: "Data Breach Notification",
        description: "Must include data breach notification procedures",
        severity: Severity::Critical,
        keywords: &["breach", "notification", "incident", "personal data breach"],
        recommendation: "Define clear breach notification timelines and procedures (72 hours \
                         to authorities)",
    },
    RequirementSpec {
        id: "gdpr-5",
        standard: "GDPR",
        requirement: "International Transfer Mechanism",
        description: "If transferring data internationally, must have transfer mechanism",
        severity: Severity::High,
        keywords: &[
            "international transfer",
            "standard contractual clauses",
            "adequacy decision",
            "binding corporate rules",
        ],
        recommendation: "Use Standard Contractual Clauses (SCCs) or approved transfer mechanisms",
    },
];

const CCPA_REQUIREMENTS: &[RequirementSpec] = &[
    RequirementSpec {
        id: "ccpa-1",
        standard: "CCPA",
        requirement: "Right to Know",
        description: "Must disclose what personal information is collected and how it is used",
        severity: Severity::Critical,
        keywords: &[
            "right to know",
            "personal information",
            "collection",
            "disclosure",
        ],
        recommendation: "Add clear disclosure of what data is collected and used for",
    },
    RequirementSpec {
        id: "ccpa-2",
        standard: "CCPA",
        requirement: "Right to Delete",
        description: "Must allow consumers to request deletion of personal information",
        severity: Severity::Critical,
        keywords: &["right to delete", "deletion request", "opt-out"],
        recommendation: "Include mechanism for consumers to request data deletion",
    },
    RequirementSpec {
        id: "ccpa-3",
        standard: "CCPA",
        requirement: "Right to Opt-Out",
        description: "Must allow opting out of sale or sharing of personal information",
        severity: Severity::High,
        keywords: &["opt-out", "sale", "sharing", "do not sell"],
        recommendation: "Add clear opt-out mechanism and \"Do Not Sell My Personal \
                         Information\" link",
    },
    RequirementSpec {
        id: "ccpa-4",
        standard: "CCPA",
        requirement: "Privacy Notice",
        description: "Must maintain comprehensive privacy notice",
        severity: Severity::Critical,
        keywords: &["privacy notice", "privacy policy", "notice"],
        recommendation: "Ensure detailed privacy policy is linked and accessible",
    },
];

const HIPAA_REQUIREMENTS: &[RequirementSpec] = &[
    RequirementSpec {
        id: "hipaa-1",
        standard: "HIPAA",
        requirement: "Business Associate Agreement",
        description: "Required for any entity handling Protected Health Information",
        severity: Severity::Critical,
        keywords: &[
            "baa",
            "business associate",
            "protected health information",
            "phi",
        ],
        recommendation: "Add comprehensive Business Associate Agreement if handling health data",
    },
    RequirementSpec {
        id: "hipaa-2",
        standard: "HIPAA",
        requirement: "Encryption Standards",
        description: "PHI must be encrypted in transit and at rest",
        severity: Severity::Critical,
        keywords: &["encryption", "encrypted", "aes", "tls", "ssl"],
        recommendation: "Specify encryption standards (AES-256, TLS 1.2 minimum)",
    },
    RequirementSpec {
        id: "hipaa-3",
        standard: "HIPAA",
        requirement: "Breach Notification",
        description: "Must specify breach notification procedures",
        severity: Severity::Critical,
        keywords: &["breach notification", "hipaa breach"],
        recommendation: "Define breach notification timelines and procedures",
    },
];

/// The fixed requirement catalog of one standard
pub fn requirements_for(standard: Standard) -> &'static [RequirementSpec] {
    match standard {
        Standard::Gdpr => GDPR_REQUIREMENTS,
        Standard::Ccpa => CCPA_REQUIREMENTS,
        Standard::Hipaa => HIPAA_REQUIREMENTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(requirements_for(Standard::Gdpr).len(), 5);
        assert_eq!(requirements_for(Standard::Ccpa).len(), 4);
        assert_eq!(requirements_for(Standard::Hipaa).len(), 3);
    }

    #[test]
    fn test_gdpr_critical_count() {
        let criticals = requirements_for(Standard::Gdpr)
            .iter()
            .filter(|req| req.severity == Severity::Critical)
            .count();
        assert_eq!(criticals, 3);
    }

    #[test]
    fn test_parse_standard() {
        assert_eq!(Standard::parse("GDPR"), Some(Standard::Gdpr));
        assert_eq!(Standard::parse("hipaa"), Some(Standard::Hipaa));
        assert_eq!(Standard::parse("SOC2"), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = Vec::new();
        for standard in [Standard::Gdpr, Standard::Ccpa, Standard::Hipaa] {
            for requirement in requirements_for(standard) {
                assert!(!ids.contains(&requirement.id), "duplicate {}", requirement.id);
                ids.push(requirement.id);
            }
        }
    }
}
