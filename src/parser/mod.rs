//! Response parsing for the debugging pipeline.
//!
//! Turns raw completion text into the structured records of
//! [`crate::types`] using ordered pattern extraction with explicit
//! fallback values. The upstream generator's adherence to the requested
//! format is probabilistic, not guaranteed, so every parser here is a
//! best-effort text scraper, not a strict grammar: a pure, total function
//! over its input string that never returns an error.
//!
//! Fallback behavior per parser:
//! - [`parse_debug_fix`]: missing code fence yields the
//!   `"Failed to parse code"` placeholder, missing sections yield empty
//!   strings; no field is ever absent.
//! - [`parse_exercises`]: missing `### Exercises:` header yields an empty
//!   list; a malformed block still emits a record with whatever fields
//!   were extractable.
//! - [`parse_course`]: missing `### Course Content:` header yields `None`,
//!   distinguishable from a present-but-empty section list.

pub mod course;
pub mod debug_fix;
pub mod exercises;
pub mod sections;

pub use course::parse_course;
pub use debug_fix::{parse_debug_fix, CORRECTED_CODE_FALLBACK};
pub use exercises::parse_exercises;
