//! Debug-fix response parsing.

use super::sections;
use crate::types::DebugResult;

/// Placeholder emitted when no fenced code block could be located.
pub const CORRECTED_CODE_FALLBACK: &str = "Failed to parse code";

/// Header introducing the error-analysis section of a reply.
const ERROR_ANALYSIS_HEADER: &str = "### Error Analysis:";

/// Header introducing the fix-explanation section of a reply.
const FIX_EXPLANATION_HEADER: &str = "### Fix Explanation:";

/// Scrapes a debug-fix completion into a [`DebugResult`].
///
/// Three independent extractions, each with its own fallback:
/// - `corrected_code`: interior of the first fenced code block, trimmed;
///   [`CORRECTED_CODE_FALLBACK`] when no block is found.
/// - `error_analysis`: text between `### Error Analysis:` and the next
///   line starting with `###` or the end of input, trimmed; empty when the
///   header is absent.
/// - `fix_explanation`: text after `### Fix Explanation:` to the end of
///   input, trimmed; empty when the header is absent.
///
/// A miss in one extraction never prevents the others, and the result is
/// always fully populated. The submitted code is echoed back unchanged as
/// `original_code`.
pub fn parse_debug_fix(completion: &str, original_code: &str) -> DebugResult {
    let corrected_code = sections::first_fenced_block(completion)
        .unwrap_or_else(|| CORRECTED_CODE_FALLBACK.to_string());

    let error_analysis =
        sections::section_until_next_header(completion, ERROR_ANALYSIS_HEADER).unwrap_or_default();

    let fix_explanation =
        sections::section_to_end(completion, FIX_EXPLANATION_HEADER).unwrap_or_default();

    DebugResult {
        original_code: original_code.to_string(),
        corrected_code,
        error_analysis,
        fix_explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "blah ```js\nconst x = 1;\n``` more text ### Error Analysis:\nbad var\n### Fix Explanation:\nuse const";

    #[test]
    fn test_well_formed_reply() {
        let result = parse_debug_fix(WELL_FORMED, "var x = 1");

        assert_eq!(result.original_code, "var x = 1");
        assert_eq!(result.corrected_code, "const x = 1;");
        assert_eq!(result.error_analysis, "bad var");
        assert_eq!(result.fix_explanation, "use const");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = parse_debug_fix(WELL_FORMED, "var x = 1");
        let second = parse_debug_fix(WELL_FORMED, "var x = 1");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_completion_yields_fallbacks() {
        let result = parse_debug_fix("", "var x = 1");

        assert_eq!(result.original_code, "var x = 1");
        assert_eq!(result.corrected_code, CORRECTED_CODE_FALLBACK);
        assert_eq!(result.error_analysis, "");
        assert_eq!(result.fix_explanation, "");
    }

    #[test]
    fn test_completion_without_delimiters_yields_fallbacks() {
        let result = parse_debug_fix("the model rambled about nothing useful", "code");

        assert_eq!(result.corrected_code, CORRECTED_CODE_FALLBACK);
        assert_eq!(result.error_analysis, "");
        assert_eq!(result.fix_explanation, "");
    }

    #[test]
    fn test_extractions_are_independent() {
        // Code block and explanation present, analysis section missing.
        let completion = "```js\nlet ok = true;\n```\n### Fix Explanation:\ndeclared it";
        let result = parse_debug_fix(completion, "orig");

        assert_eq!(result.corrected_code, "let ok = true;");
        assert_eq!(result.error_analysis, "");
        assert_eq!(result.fix_explanation, "declared it");
    }

    #[test]
    fn test_analysis_runs_to_end_without_following_header() {
        let completion = "### Error Analysis:\nundeclared variable\nspread over lines";
        let result = parse_debug_fix(completion, "orig");

        assert_eq!(result.error_analysis, "undeclared variable\nspread over lines");
        assert_eq!(result.corrected_code, CORRECTED_CODE_FALLBACK);
    }

    #[test]
    fn test_unclosed_fence_falls_back() {
        let completion = "```js\nconst x = 1;\n### Error Analysis:\nbad";
        let result = parse_debug_fix(completion, "orig");

        assert_eq!(result.corrected_code, CORRECTED_CODE_FALLBACK);
        assert_eq!(result.error_analysis, "bad");
    }

    #[test]
    fn test_fix_explanation_spans_to_end_of_text() {
        let completion = "### Fix Explanation:\nfirst line\n\nsecond paragraph  ";
        let result = parse_debug_fix(completion, "orig");

        assert_eq!(result.fix_explanation, "first line\n\nsecond paragraph");
    }
}
