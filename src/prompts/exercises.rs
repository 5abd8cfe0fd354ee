//! Exercise-generation prompt builder.
//!
//! Builds the prompt asking the model for practice exercises that target
//! the error pattern found in the submitted code, tuned to the requested
//! developer level.

use crate::types::{DebugTask, ExerciseLevel};

/// Template for the exercise-generation call.
///
/// The `### Exercises:` header and the `#### Exercise <n>:` /
/// `Description:` / `Solution:` block shape are the reply contract
/// consumed by [`crate::parser::parse_exercises`]. The requested count is
/// advisory only; the parser handles fewer or more blocks.
const EXERCISE_TEMPLATE: &str = r#"You are a master software engineer with decades of experience in teaching and mentoring junior developers.

I need you to create {count} high-quality {level} level coding exercises in {language} that will help developers learn to avoid and fix the specific error pattern seen in this code.

CODE WITH ERROR:
```{language}
{code}
```

ERROR MESSAGE:
{error}

INSTRUCTIONS:
1. Carefully analyze the error pattern in the code
2. Design exercises that target the same concept but in different contexts
3. Ensure each exercise has clear learning objectives
4. Make exercises progressively more challenging
5. Include detailed comments in solutions explaining the key concepts
6. Focus on real-world practical scenarios that developers encounter

DEVELOPER LEVEL: {level}

For {level} level developers, focus on:
{level_guidance}

RESPOND USING EXACTLY THIS FORMAT:

### Exercises:

#### Exercise 1:
Description: [Concise problem statement with clear objectives]

Solution:
```{language}
[Well-commented, optimal solution code]
```

#### Exercise 2:
Description: [Concise problem statement with clear objectives]

Solution:
```{language}
[Well-commented, optimal solution code]
```

[Continue with remaining exercises as requested]"#;

/// Substituted for the error message when the user supplied none.
const NO_ERROR_FALLBACK: &str =
    "No explicit error message provided, but the code contains logical or syntax issues.";

const BEGINNER_GUIDANCE: &str = "- Basic syntax and common pitfalls
- Clear, guided exercises
- Fundamental concepts with detailed explanations
- Simple, focused problems with one main learning objective per exercise";

const INTERMEDIATE_GUIDANCE: &str = "- More complex logic and edge cases
- Combined concepts that work together
- Best practices and code efficiency
- Realistic scenarios with moderate complexity";

const ADVANCED_GUIDANCE: &str = "- Advanced patterns and optimizations
- Debugging complex interactions
- Performance considerations
- Architecture and design decisions";

/// Returns the fixed guidance block for a developer level.
fn level_guidance(level: ExerciseLevel) -> &'static str {
    match level {
        ExerciseLevel::Beginner => BEGINNER_GUIDANCE,
        ExerciseLevel::Intermediate => INTERMEDIATE_GUIDANCE,
        ExerciseLevel::Advanced => ADVANCED_GUIDANCE,
    }
}

/// Renders the exercise-generation prompt for a task.
pub fn build_exercise_prompt(task: &DebugTask) -> String {
    let error = if task.error.trim().is_empty() {
        NO_ERROR_FALLBACK
    } else {
        task.error.as_str()
    };

    EXERCISE_TEMPLATE
        .replace("{count}", &task.exercise_count.to_string())
        .replace("{level_guidance}", level_guidance(task.exercise_level))
        .replace("{level}", &task.exercise_level.to_string())
        .replace("{language}", &task.language)
        .replace("{error}", error)
        .replace("{code}", &task.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_count_level_and_language() {
        let task = DebugTask::new("var x = 1")
            .with_language("python")
            .with_exercises(4, ExerciseLevel::Intermediate);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains("create 4 high-quality intermediate level coding exercises in python"));
        assert!(prompt.contains("DEVELOPER LEVEL: intermediate"));
    }

    #[test]
    fn test_prompt_commands_reply_contract() {
        let task = DebugTask::new("var x = 1").with_exercises(2, ExerciseLevel::Beginner);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains("### Exercises:"));
        assert!(prompt.contains("#### Exercise 1:"));
        assert!(prompt.contains("Description:"));
        assert!(prompt.contains("Solution:"));
    }

    #[test]
    fn test_beginner_guidance_selected() {
        let task = DebugTask::new("x").with_exercises(1, ExerciseLevel::Beginner);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains("Basic syntax and common pitfalls"));
        assert!(!prompt.contains("Architecture and design decisions"));
    }

    #[test]
    fn test_intermediate_guidance_selected() {
        let task = DebugTask::new("x").with_exercises(1, ExerciseLevel::Intermediate);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains("More complex logic and edge cases"));
        assert!(!prompt.contains("Basic syntax and common pitfalls"));
    }

    #[test]
    fn test_advanced_guidance_selected() {
        let task = DebugTask::new("x").with_exercises(1, ExerciseLevel::Advanced);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains("Advanced patterns and optimizations"));
        assert!(!prompt.contains("Clear, guided exercises"));
    }

    #[test]
    fn test_empty_error_uses_fallback_line() {
        let task = DebugTask::new("var x = 1").with_exercises(1, ExerciseLevel::Beginner);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains(NO_ERROR_FALLBACK));
    }

    #[test]
    fn test_explicit_error_is_embedded() {
        let task = DebugTask::new("var x = 1")
            .with_error("TypeError: x is undefined")
            .with_exercises(1, ExerciseLevel::Beginner);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains("TypeError: x is undefined"));
        assert!(!prompt.contains(NO_ERROR_FALLBACK));
    }

    #[test]
    fn test_code_is_embedded_in_fence() {
        let task = DebugTask::new("for (;;) {}").with_exercises(1, ExerciseLevel::Beginner);
        let prompt = build_exercise_prompt(&task);

        assert!(prompt.contains("```javascript\nfor (;;) {}\n```"));
    }
}
