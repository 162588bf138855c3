//! Interpreter configuration.

use slpworld_debug::ObservabilityConfig;
use slpworld_language::EmitConfig;

/// Configuration for an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Output formatting.
    pub emit: EmitConfig,
    /// Pipeline tracing.
    pub observability: ObservabilityConfig,
}

impl InterpreterConfig {
    /// Creates the default configuration: 4-space indent, tracing off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that records every run into the trace buffer.
    #[must_use]
    pub fn traced() -> Self {
        Self::default().with_observability(ObservabilityConfig::enabled())
    }

    /// Builder method to set the emit configuration.
    #[must_use]
    pub fn with_emit(mut self, emit: EmitConfig) -> Self {
        self.emit = emit;
        self
    }

    /// Builder method to set the observability configuration.
    #[must_use]
    pub fn with_observability(mut self, observability: ObservabilityConfig) -> Self {
        self.observability = observability;
        self
    }
}
