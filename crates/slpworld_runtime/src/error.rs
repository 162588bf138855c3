//! Pipeline errors.

use slpworld_debug::PipelineStage;
use slpworld_foundation::{Error, ErrorContext};
use thiserror::Error;

/// A failed pipeline run, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The input was empty or whitespace-only.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Lexical parsing failed.
    #[error("parse: {source}")]
    Parse {
        /// The underlying error.
        #[source]
        source: Error,
    },

    /// Canonicalization or mapping failed.
    #[error("{stage}: {source}")]
    Mapping {
        /// [`PipelineStage::Extract`] or [`PipelineStage::Map`].
        stage: PipelineStage,
        /// The underlying error.
        #[source]
        source: Error,
    },

    /// Emitting SLP text failed.
    #[error("emit: {source}")]
    Emit {
        /// The underlying error.
        #[source]
        source: Error,
    },
}

impl InterpretError {
    /// Short name of the error category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid-input",
            Self::Parse { .. } => "parse",
            Self::Mapping { .. } => "mapping",
            Self::Emit { .. } => "emit",
        }
    }

    /// The stage that failed, if the input got that far.
    #[must_use]
    pub fn stage(&self) -> Option<PipelineStage> {
        match self {
            Self::InvalidInput(_) => None,
            Self::Parse { .. } => Some(PipelineStage::Parse),
            Self::Mapping { stage, .. } => Some(*stage),
            Self::Emit { .. } => Some(PipelineStage::Emit),
        }
    }

    /// Where in the input the underlying error occurred, if recorded.
    #[must_use]
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::InvalidInput(_) => None,
            Self::Parse { source } | Self::Mapping { source, .. } | Self::Emit { source } => {
                source.context.as_ref()
            }
        }
    }

    /// Whether running again with the same input could succeed.
    ///
    /// The pipeline is deterministic, so this is always false.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
