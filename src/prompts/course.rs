//! Course-generation prompt builder.
//!
//! Builds the prompt asking the model for a short course teaching the
//! error pattern behind the submitted code.

use crate::types::DebugTask;

/// Template for the course-generation call.
///
/// The `### Course Content:` header and the `#### Section <n>:` /
/// `Title:` / `Content:` block shape are the reply contract consumed by
/// [`crate::parser::parse_course`].
const COURSE_TEMPLATE: &str = r#"You are an experienced programming instructor.

Create a short course that teaches a developer how to understand, fix and avoid the error pattern seen in this {language} code.

CODE WITH ERROR:
```{language}
{code}
```

ERROR MESSAGE:
{error}

The course should move from understanding the error to recognizing and preventing it in real projects. Keep each section focused and practical.

RESPOND USING EXACTLY THIS FORMAT:

### Course Content:

#### Section 1:
Title: [Short section title]
Content: [Section content]

#### Section 2:
Title: [Short section title]
Content: [Section content]

[Continue with additional sections as needed]"#;

/// Renders the course-generation prompt for a task.
///
/// `language`, `code` and `error` are embedded verbatim.
pub fn build_course_prompt(task: &DebugTask) -> String {
    COURSE_TEMPLATE
        .replace("{language}", &task.language)
        .replace("{error}", &task.error)
        .replace("{code}", &task.code)
}
