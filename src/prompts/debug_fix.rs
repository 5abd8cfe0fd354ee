//! Debug-fix prompt builder.
//!
//! Renders the prompt for the mandatory first call of every debugging
//! request: fix the submitted code and explain what was wrong.

use crate::types::DebugTask;

/// Template for the debug-fix call.
///
/// The fenced code block and the `### Error Analysis:` /
/// `### Fix Explanation:` headers are the reply contract consumed by
/// [`crate::parser::parse_debug_fix`].
const DEBUG_FIX_TEMPLATE: &str = r#"Fix this {language} code and explain the error:
Code: {code}
Error: {error}

Respond with this format:
### Corrected Code:
```{language}
[fixed code here]
```

### Error Analysis:
[analysis here]

### Fix Explanation:
[explanation here]"#;

/// Renders the debug-fix prompt for a task.
///
/// `language`, `code` and `error` are embedded verbatim; an empty error
/// message stays empty.
pub fn build_debug_fix_prompt(task: &DebugTask) -> String {
    DEBUG_FIX_TEMPLATE
        .replace("{language}", &task.language)
        .replace("{error}", &task.error)
        .replace("{code}", &task.code)
}
