//! Configuration for the observability system.

use crate::trace::TracerConfig;

/// Configuration for the observability system.
///
/// Controls pipeline tracing and trace retention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Whether tracing is enabled (false = zero overhead).
    pub enabled: bool,

    /// Trace ring buffer size (number of records to retain).
    pub buffer_size: usize,

    /// Output trace to stderr.
    pub trace_to_stderr: bool,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            trace_to_stderr: false,
            json_output: false,
        }
    }
}

impl ObservabilityConfig {
    /// Creates a configuration with tracing enabled into the buffer only.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a configuration for debugging: traces go to stderr as well.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            enabled: true,
            buffer_size: 50000,
            trace_to_stderr: true,
            json_output: false,
        }
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// The tracer configuration this describes.
    #[must_use]
    pub fn tracer_config(&self) -> TracerConfig {
        let mut config = TracerConfig::new().with_buffer_size(self.buffer_size);
        if self.enabled {
            config = config.enabled();
        }
        if self.trace_to_stderr {
            config = config.to_stderr();
        }
        if self.json_output {
            config = config.json();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::TraceOutput;

    #[test]
    fn presets() {
        assert!(!ObservabilityConfig::default().enabled);
        assert!(ObservabilityConfig::enabled().enabled);
        assert!(!ObservabilityConfig::enabled().trace_to_stderr);

        let debug = ObservabilityConfig::debug();
        assert!(debug.enabled && debug.trace_to_stderr);
    }

    #[test]
    fn debug_preset_flows_into_tracer_config() {
        let config = ObservabilityConfig::debug()
            .with_json_output(true)
            .tracer_config();

        assert!(config.enabled);
        assert_eq!(config.buffer_size, 50000);
        assert_eq!(config.output, TraceOutput::Stderr);
        assert!(config.json_format);
    }

    #[test]
    fn default_config_disables_tracer() {
        let config = ObservabilityConfig::default().tracer_config();
        assert!(!config.enabled);
        assert_eq!(config.buffer_size, 10000);
        assert_eq!(config.output, TraceOutput::None);
        assert!(!config.json_format);
    }
}
