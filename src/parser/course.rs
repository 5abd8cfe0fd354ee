//! Course-section response parsing.

use super::sections;
use crate::types::CourseSection;

/// Header gating the whole course.
const COURSE_HEADER: &str = "### Course Content:";

/// Label introducing a section's title.
const TITLE_LABEL: &str = "Title:";

/// Label introducing a section's body.
const CONTENT_LABEL: &str = "Content:";

/// Scrapes a course-generation completion into a list of sections.
///
/// Returns `None` when the `### Course Content:` header is absent, so
/// callers can tell "no course produced" apart from "course produced with
/// zero sections" (`Some` of an empty list). Blocks are split on
/// `#### Section <n>:` delimiters with ids assigned by position, and each
/// field degrades to an empty string when its label is missing.
pub fn parse_course(completion: &str) -> Option<Vec<CourseSection>> {
    let start = completion.find(COURSE_HEADER)?;
    let body = &completion[start + COURSE_HEADER.len()..];

    let sections_list = sections::numbered_blocks(body, "Section")
        .into_iter()
        .enumerate()
        .map(|(index, block)| CourseSection {
            id: index + 1,
            title: sections::labeled_field(&block, TITLE_LABEL, Some(CONTENT_LABEL))
                .unwrap_or_default(),
            content: sections::labeled_field(&block, CONTENT_LABEL, None).unwrap_or_default(),
        })
        .collect();

    Some(sections_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "### Course Content:\n\n\
        #### Section 1:\nTitle: Understanding the error\nContent: Variables must be declared.\n\n\
        #### Section 2:\nTitle: Preventing it\nContent: Use strict mode.\nAnd lint your code.";

    #[test]
    fn test_missing_header_is_absent_sentinel() {
        assert_eq!(parse_course("no course in this reply"), None);
        assert_eq!(parse_course(""), None);
    }

    #[test]
    fn test_header_with_blank_remainder_is_present_but_empty() {
        let course = parse_course("### Course Content:\n   ");
        assert_eq!(course, Some(Vec::new()));
    }

    #[test]
    fn test_extracts_sections_in_order() {
        let course = parse_course(WELL_FORMED).expect("header present");

        assert_eq!(course.len(), 2);
        assert_eq!(course[0].id, 1);
        assert_eq!(course[0].title, "Understanding the error");
        assert_eq!(course[0].content, "Variables must be declared.");
        assert_eq!(course[1].id, 2);
        assert_eq!(course[1].title, "Preventing it");
    }

    #[test]
    fn test_content_runs_to_end_of_block() {
        let course = parse_course(WELL_FORMED).expect("header present");
        assert_eq!(course[1].content, "Use strict mode.\nAnd lint your code.");
    }

    #[test]
    fn test_block_without_title_degrades_per_field() {
        let reply = "### Course Content:\n#### Section 1:\nContent: body only";
        let course = parse_course(reply).expect("header present");

        assert_eq!(course.len(), 1);
        assert_eq!(course[0].title, "");
        assert_eq!(course[0].content, "body only");
    }

    #[test]
    fn test_block_without_content_degrades_per_field() {
        let reply = "### Course Content:\n#### Section 1:\nTitle: title only";
        let course = parse_course(reply).expect("header present");

        assert_eq!(course.len(), 1);
        assert_eq!(course[0].title, "title only");
        assert_eq!(course[0].content, "");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(parse_course(WELL_FORMED), parse_course(WELL_FORMED));
    }
}
