//! Exercise-list response parsing.

use super::sections;
use crate::types::ExerciseRecord;

/// Header gating the whole exercise list.
const EXERCISES_HEADER: &str = "### Exercises:";

/// Label introducing an exercise's problem statement.
const DESCRIPTION_LABEL: &str = "Description:";

/// Label introducing an exercise's solution.
const SOLUTION_LABEL: &str = "Solution:";

/// Scrapes an exercise-generation completion into a list of records.
///
/// Returns an empty list when the `### Exercises:` header is absent.
/// Otherwise the text after the header is split on `#### Exercise <n>:`
/// delimiters; the number the model wrote is ignored and each record's
/// `id` is its 1-based position in the split result. The list length
/// follows the completion text, not the requested count.
///
/// Per-block extraction degrades per field: a block missing its
/// `Description:` or `Solution:` still yields a record with the missing
/// field empty rather than being dropped.
pub fn parse_exercises(completion: &str) -> Vec<ExerciseRecord> {
    let Some(start) = completion.find(EXERCISES_HEADER) else {
        return Vec::new();
    };
    let body = &completion[start + EXERCISES_HEADER.len()..];

    sections::numbered_blocks(body, "Exercise")
        .into_iter()
        .enumerate()
        .map(|(index, block)| ExerciseRecord {
            id: index + 1,
            description: sections::labeled_field(&block, DESCRIPTION_LABEL, Some(SOLUTION_LABEL))
                .unwrap_or_default(),
            solution: solution_text(&block),
        })
        .collect()
}

/// Extracts the solution from one exercise block.
///
/// Prefers the interior of a fenced code block after `Solution:`; falls
/// back to the raw text after the label when no fence is present, and to
/// an empty string when the label itself is missing.
fn solution_text(block: &str) -> String {
    let Some(start) = block.find(SOLUTION_LABEL) else {
        return String::new();
    };
    let rest = &block[start + SOLUTION_LABEL.len()..];

    match sections::first_fenced_block(rest) {
        Some(code) => code,
        None => rest.trim().to_string(),
    }
}
