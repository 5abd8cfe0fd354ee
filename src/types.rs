//! Core data types for the debugging pipeline.
//!
//! Every structure here is request-local: built for one orchestration call,
//! serialized back to the caller, and discarded. Durable identity is the
//! concern of whatever persistence layer sits above this crate.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Developer level targeted by generated practice exercises.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for ExerciseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        write!(f, "{}", name)
    }
}

/// One incoming debugging request.
///
/// Immutable once constructed. Missing optional fields default the way the
/// request boundary defines them: `language` falls back to `"javascript"`,
/// everything else to off/zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugTask {
    /// The buggy source code, treated as an opaque string.
    pub code: String,
    /// Error message observed by the user. May be empty.
    #[serde(default)]
    pub error: String,
    /// Programming language of the submitted code.
    #[serde(default = "default_language")]
    pub language: String,
    /// Whether to also generate practice exercises.
    #[serde(default)]
    pub want_exercises: bool,
    /// Requested number of exercises. Advisory only: the model may return
    /// fewer or more blocks, and the parser reports what it finds.
    #[serde(default)]
    pub exercise_count: u8,
    /// Developer level the exercises should target.
    #[serde(default)]
    pub exercise_level: ExerciseLevel,
    /// Whether to also generate a short course.
    #[serde(default)]
    pub want_course: bool,
}

fn default_language() -> String {
    "javascript".to_string()
}

impl DebugTask {
    /// Creates a task for the given code with the request-boundary defaults.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: String::new(),
            language: default_language(),
            want_exercises: false,
            exercise_count: 0,
            exercise_level: ExerciseLevel::Beginner,
            want_course: false,
        }
    }

    /// Sets the error message.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    /// Sets the language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Requests exercise generation with the given count and level.
    pub fn with_exercises(mut self, count: u8, level: ExerciseLevel) -> Self {
        self.want_exercises = true;
        self.exercise_count = count;
        self.exercise_level = level;
        self
    }

    /// Requests course generation.
    pub fn with_course(mut self) -> Self {
        self.want_course = true;
        self
    }
}

/// Structured outcome of the mandatory debug-fix call.
///
/// Every field is always present: a parse miss degrades to a documented
/// placeholder value instead of an absent field, so consumers never branch
/// on null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugResult {
    /// The code as submitted, echoed back unchanged.
    pub original_code: String,
    /// Corrected code scraped from the reply, or `"Failed to parse code"`.
    pub corrected_code: String,
    /// Analysis of the error, or empty when the section was missing.
    pub error_analysis: String,
    /// Explanation of the fix, or empty when the section was missing.
    pub fix_explanation: String,
}

/// One generated practice exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// 1-based position in the order the model emitted the exercises,
    /// independent of any number the model wrote in the block header.
    pub id: usize,
    /// Problem statement. Empty when the block carried no `Description:`.
    pub description: String,
    /// Solution code. Empty when the block carried no `Solution:`.
    pub solution: String,
}

/// One section of a generated short course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSection {
    /// 1-based position in emission order.
    pub id: usize,
    /// Section title. Empty when the block carried no `Title:`.
    pub title: String,
    /// Section body. Empty when the block carried no `Content:`.
    pub content: String,
}

/// Final merged response for one debugging request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugReport {
    /// The mandatory debug-fix result.
    #[serde(flatten)]
    pub result: DebugResult,
    /// Generated exercises. Empty when none were requested or parsed.
    pub exercises: Vec<ExerciseRecord>,
    /// Course sections. Absent (not an empty list) when course generation
    /// was not requested or the reply had no course structure, so callers
    /// can tell "not asked for" apart from "asked for but empty".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Vec<CourseSection>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults_from_minimal_json() {
        let task: DebugTask = serde_json::from_str(r#"{"code": "var x = 1"}"#)
            .expect("minimal task should deserialize");

        assert_eq!(task.code, "var x = 1");
        assert_eq!(task.error, "");
        assert_eq!(task.language, "javascript");
        assert!(!task.want_exercises);
        assert_eq!(task.exercise_count, 0);
        assert_eq!(task.exercise_level, ExerciseLevel::Beginner);
        assert!(!task.want_course);
    }

    #[test]
    fn test_exercise_level_serde_lowercase() {
        let level: ExerciseLevel =
            serde_json::from_str(r#""intermediate""#).expect("level should deserialize");
        assert_eq!(level, ExerciseLevel::Intermediate);

        let json = serde_json::to_string(&ExerciseLevel::Advanced).expect("should serialize");
        assert_eq!(json, r#""advanced""#);
    }

    #[test]
    fn test_exercise_level_display() {
        assert_eq!(ExerciseLevel::Beginner.to_string(), "beginner");
        assert_eq!(ExerciseLevel::Intermediate.to_string(), "intermediate");
        assert_eq!(ExerciseLevel::Advanced.to_string(), "advanced");
    }

    #[test]
    fn test_task_builders() {
        let task = DebugTask::new("fn main() {}")
            .with_error("E0308")
            .with_language("rust")
            .with_exercises(3, ExerciseLevel::Advanced)
            .with_course();

        assert_eq!(task.language, "rust");
        assert!(task.want_exercises);
        assert_eq!(task.exercise_count, 3);
        assert_eq!(task.exercise_level, ExerciseLevel::Advanced);
        assert!(task.want_course);
    }

    #[test]
    fn test_report_omits_absent_course() {
        let report = DebugReport {
            result: DebugResult {
                original_code: "a".to_string(),
                corrected_code: "b".to_string(),
                error_analysis: String::new(),
                fix_explanation: String::new(),
            },
            exercises: Vec::new(),
            course: None,
        };

        let json = serde_json::to_value(&report).expect("report should serialize");
        assert!(json.get("course").is_none(), "absent course must not serialize");
        assert_eq!(json["exercises"], serde_json::json!([]));
        // Flattened result fields sit at the top level.
        assert_eq!(json["original_code"], "a");
        assert_eq!(json["corrected_code"], "b");
    }

    #[test]
    fn test_report_keeps_empty_course_list() {
        let report = DebugReport {
            result: DebugResult {
                original_code: "a".to_string(),
                corrected_code: "b".to_string(),
                error_analysis: String::new(),
                fix_explanation: String::new(),
            },
            exercises: Vec::new(),
            course: Some(Vec::new()),
        };

        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(
            json["course"],
            serde_json::json!([]),
            "requested-but-empty course must serialize as an empty list"
        );
    }
}
