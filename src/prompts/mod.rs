//! LLM prompts for the debugging pipeline.
//!
//! Each builder renders one fully-formed instruction string from a
//! [`DebugTask`](crate::types::DebugTask). The templates command the model
//! to reply in a fixed delimited shape; the literal section headers they
//! name are the parsing contract shared with [`crate::parser`]. Any change
//! to a header string here must be mirrored there.
//!
//! Prompt construction is total: inputs are interpolated as opaque strings
//! with no validation of code syntax or language legality.
//!
//! # Usage
//!
//! ```no_run
//! use bugforge::prompts::{build_course_prompt, build_debug_fix_prompt, build_exercise_prompt};
//! use bugforge::types::{DebugTask, ExerciseLevel};
//!
//! let task = DebugTask::new("var x = 1")
//!     .with_error("x is not defined")
//!     .with_exercises(3, ExerciseLevel::Beginner);
//!
//! let debug_prompt = build_debug_fix_prompt(&task);
//! let exercise_prompt = build_exercise_prompt(&task);
//! let course_prompt = build_course_prompt(&task);
//! ```

pub mod course;
pub mod debug_fix;
pub mod exercises;

pub use course::build_course_prompt;
pub use debug_fix::build_debug_fix_prompt;
pub use exercises::build_exercise_prompt;
