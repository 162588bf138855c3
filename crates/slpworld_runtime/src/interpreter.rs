//! The four-stage pipeline: parse, extract, map, emit.

use slpworld_debug::{PipelineStage, Tracer};
use slpworld_engine::{Mapper, MappingReport, SlpGraph};
use slpworld_foundation::Result;
use slpworld_language::emit_with_config;
use slpworld_world::extract;

use crate::config::InterpreterConfig;
use crate::error::InterpretError;

/// Interprets text with the default configuration.
///
/// # Errors
///
/// Returns [`InterpretError::InvalidInput`] for empty or whitespace-only
/// text, or the stage error of the first stage that fails.
pub fn interpret(text: &str) -> std::result::Result<String, InterpretError> {
    Interpreter::new().interpret(text)
}

/// Runs one stage, bracketing it with trace events.
fn staged<T>(tracer: &mut Tracer, stage: PipelineStage, f: impl FnOnce() -> Result<T>) -> Result<T> {
    tracer.stage_start(stage);
    let result = tracing::debug_span!("stage", %stage).in_scope(f);
    tracer.stage_end(stage, result.is_ok());
    result
}

// =============================================================================
// Interpreter
// =============================================================================

/// A configured pipeline.
///
/// Every call to [`interpret`](Self::interpret) is independent; the only
/// state carried between runs is the trace buffer and the mapping report of
/// the last run.
#[derive(Debug, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
    tracer: Tracer,
    mapper: Mapper,
}

impl Interpreter {
    /// Creates an interpreter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the given configuration.
    #[must_use]
    pub fn with_config(config: InterpreterConfig) -> Self {
        let tracer = Tracer::new(config.observability.tracer_config());
        Self {
            config,
            tracer,
            mapper: Mapper::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Rules fired and relations skipped during the last run.
    #[must_use]
    pub fn last_report(&self) -> &MappingReport {
        self.mapper.report()
    }

    /// Interprets text into SLP.
    ///
    /// # Errors
    ///
    /// Returns [`InterpretError::InvalidInput`] for empty or whitespace-only
    /// text, or the stage error of the first stage that fails.
    pub fn interpret(&mut self, text: &str) -> std::result::Result<String, InterpretError> {
        self.tracer.run_start(text.len());
        let result = self.graph(text).and_then(|graph| self.emit(&graph));
        self.tracer.run_end(result.is_ok());

        match &result {
            Ok(output) => tracing::debug!(bytes = output.len(), "interpreted text"),
            Err(e) => tracing::debug!(kind = e.kind(), error = %e, "interpretation failed"),
        }
        result
    }

    /// Runs parse, extract and map, stopping short of emitting.
    ///
    /// # Errors
    ///
    /// As for [`interpret`](Self::interpret), minus emit failures.
    pub fn interpret_graph(&mut self, text: &str) -> std::result::Result<SlpGraph, InterpretError> {
        self.tracer.run_start(text.len());
        let result = self.graph(text);
        self.tracer.run_end(result.is_ok());
        result
    }

    fn graph(&mut self, text: &str) -> std::result::Result<SlpGraph, InterpretError> {
        if text.trim().is_empty() {
            return Err(InterpretError::InvalidInput(
                "input must be a non-empty string".to_string(),
            ));
        }

        let parsed = staged(&mut self.tracer, PipelineStage::Parse, || {
            slpworld_parser::parse(text)
        })
        .map_err(|source| InterpretError::Parse { source })?;

        let world = staged(&mut self.tracer, PipelineStage::Extract, || extract(&parsed))
            .map_err(|source| InterpretError::Mapping {
                stage: PipelineStage::Extract,
                source,
            })?;
        for entity in world.entities() {
            self.tracer.entity_registered(&entity.name);
        }

        let mapper = &mut self.mapper;
        let graph = staged(&mut self.tracer, PipelineStage::Map, || mapper.map(&world))
            .map_err(|source| InterpretError::Mapping {
                stage: PipelineStage::Map,
                source,
            })?;
        self.trace_report();

        Ok(graph)
    }

    fn emit(&mut self, graph: &SlpGraph) -> std::result::Result<String, InterpretError> {
        let config = &self.config.emit;
        let output = staged(&mut self.tracer, PipelineStage::Emit, || {
            emit_with_config(graph, config)
        })
        .map_err(|source| InterpretError::Emit { source })?;

        if self.tracer.is_enabled() {
            for node in graph.nodes() {
                let lines = node.attributes.len()
                    + node.states.len()
                    + node.positions.len()
                    + node.closures.len();
                self.tracer.node_emitted(&node.name, lines);
            }
        }
        Ok(output)
    }

    fn trace_report(&mut self) {
        if !self.tracer.is_enabled() {
            return;
        }
        let report = self.mapper.report();
        for applied in &report.applied {
            self.tracer
                .relation_emitted(&applied.node, applied.rule.name(), &applied.descriptor);
        }
        for skipped in &report.skipped {
            self.tracer.relation_skipped(
                skipped.relation,
                skipped.subject.as_deref(),
                &skipped.reason.to_string(),
            );
        }
    }
}
