//! Severity module - four-level concern rating

use serde::Serialize;

/// Severity of a risk indicator or compliance requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational or risk-reducing
    Low,
    /// Worth reviewing before execution
    Medium,
    /// Should be addressed before signing
    High,
    /// Requires immediate attention
    Critical,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Parse a severity from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Whether this severity feeds recommendations and critical-issue lists
    pub fn is_actionable(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}
