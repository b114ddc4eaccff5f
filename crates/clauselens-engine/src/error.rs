//! Error types for the analysis engine

use thiserror::Error;

/// Errors that can occur during contract analysis
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Contract text was empty or whitespace-only
    #[error("Contract text is required")]
    EmptyInput,
}
