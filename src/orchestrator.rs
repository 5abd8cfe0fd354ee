//! Debug orchestrator: the coordinating procedure for one request.
//!
//! Runs the linear pipeline over a single [`DebugTask`]: the mandatory
//! debug-fix call, then the optional exercise and course calls, each a
//! build-prompt / send / parse step. Calls run sequentially; there is no
//! shared state across requests, so one orchestrator can serve concurrent
//! requests from behind an `Arc`.
//!
//! Failure semantics follow the reference behavior: a provider error in
//! ANY step aborts the whole request, while a completion that arrives but
//! does not match the expected shape degrades to the parsers' fallback
//! values. An empty completion is ordinary parser input, not an error.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::OrchestratorResult;
use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::parser::{parse_course, parse_debug_fix, parse_exercises};
use crate::prompts::{build_course_prompt, build_debug_fix_prompt, build_exercise_prompt};
use crate::types::{DebugReport, DebugTask};

/// Generation parameters for the three completion call sites.
///
/// The debug-fix call runs cooler for determinism; exercise and course
/// generation run slightly warmer to favor variety inside the fixed reply
/// format, with larger output budgets for their multi-block payloads.
#[derive(Debug, Clone)]
pub struct DebugOrchestratorConfig {
    /// Model identifier for all calls. Empty selects the provider's
    /// default model.
    pub model: String,
    /// Temperature for the debug-fix call.
    pub debug_temperature: f64,
    /// Output budget for the debug-fix call.
    pub debug_max_tokens: u32,
    /// Temperature for the exercise-generation call.
    pub exercise_temperature: f64,
    /// Output budget for the exercise-generation call.
    pub exercise_max_tokens: u32,
    /// Temperature for the course-generation call.
    pub course_temperature: f64,
    /// Output budget for the course-generation call.
    pub course_max_tokens: u32,
}

impl Default for DebugOrchestratorConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            debug_temperature: 0.6,
            debug_max_tokens: 2000,
            exercise_temperature: 0.65,
            exercise_max_tokens: 4000,
            course_temperature: 0.65,
            course_max_tokens: 4000,
        }
    }
}

impl DebugOrchestratorConfig {
    /// Creates a configuration with the default call parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model for all calls.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the debug-fix call parameters.
    pub fn with_debug_params(mut self, temperature: f64, max_tokens: u32) -> Self {
        self.debug_temperature = temperature;
        self.debug_max_tokens = max_tokens;
        self
    }

    /// Sets the exercise-generation call parameters.
    pub fn with_exercise_params(mut self, temperature: f64, max_tokens: u32) -> Self {
        self.exercise_temperature = temperature;
        self.exercise_max_tokens = max_tokens;
        self
    }

    /// Sets the course-generation call parameters.
    pub fn with_course_params(mut self, temperature: f64, max_tokens: u32) -> Self {
        self.course_temperature = temperature;
        self.course_max_tokens = max_tokens;
        self
    }
}

/// Orchestrator for debugging requests.
///
/// Holds only a shareable provider handle and static configuration; all
/// per-request state lives on the stack of [`DebugOrchestrator::run`].
pub struct DebugOrchestrator {
    llm_client: Arc<dyn LlmProvider>,
    config: DebugOrchestratorConfig,
}

impl std::fmt::Debug for DebugOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugOrchestrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DebugOrchestrator {
    /// Creates a new orchestrator.
    pub fn new(llm_client: Arc<dyn LlmProvider>, config: DebugOrchestratorConfig) -> Self {
        Self { llm_client, config }
    }

    /// Creates an orchestrator with default configuration.
    pub fn with_defaults(llm_client: Arc<dyn LlmProvider>) -> Self {
        Self::new(llm_client, DebugOrchestratorConfig::default())
    }

    /// Runs the full pipeline for one task.
    ///
    /// Always produces the debug-fix result; generates exercises when the
    /// task asks for a positive count and a course when the task asks for
    /// one. Any provider error aborts the whole request.
    pub async fn run(&self, task: &DebugTask) -> OrchestratorResult<DebugReport> {
        info!(
            language = %task.language,
            want_exercises = task.want_exercises,
            exercise_count = task.exercise_count,
            want_course = task.want_course,
            "Running debug orchestration"
        );

        let completion = self
            .complete(
                build_debug_fix_prompt(task),
                self.config.debug_temperature,
                self.config.debug_max_tokens,
            )
            .await?;
        let result = parse_debug_fix(&completion, &task.code);

        let exercises = if task.want_exercises && task.exercise_count > 0 {
            let completion = self
                .complete(
                    build_exercise_prompt(task),
                    self.config.exercise_temperature,
                    self.config.exercise_max_tokens,
                )
                .await?;
            let records = parse_exercises(&completion);
            debug!(
                requested = task.exercise_count,
                parsed = records.len(),
                "Parsed exercise records"
            );
            records
        } else {
            Vec::new()
        };

        let course = if task.want_course {
            let completion = self
                .complete(
                    build_course_prompt(task),
                    self.config.course_temperature,
                    self.config.course_max_tokens,
                )
                .await?;
            let course = parse_course(&completion);
            debug!(
                sections = course.as_ref().map(Vec::len),
                "Parsed course sections"
            );
            course
        } else {
            None
        };

        Ok(DebugReport {
            result,
            exercises,
            course,
        })
    }

    /// Sends one prompt and resolves the reply to its raw text.
    ///
    /// An empty or missing completion resolves to an empty string so the
    /// parsers always receive some input; provider errors propagate.
    async fn complete(
        &self,
        prompt: String,
        temperature: f64,
        max_tokens: u32,
    ) -> OrchestratorResult<String> {
        let request =
            GenerationRequest::new(self.config.model.clone(), vec![Message::user(prompt)])
                .with_temperature(temperature)
                .with_max_tokens(max_tokens);

        let response = self.llm_client.generate(request).await?;
        Ok(response.first_content().unwrap_or_default().to_string())
    }
}
