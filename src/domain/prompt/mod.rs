//! Prompt templates for every generation route.
//!
//! Each builder is a pure function from request fields to the fixed
//! Portuguese instruction text sent upstream. Inputs arrive exactly as
//! the client typed them; only the documented defaults are applied.

mod templates;

pub use templates::{
    activity_prompt, correction_prompt, educational_text_prompt, exam_prompt,
    guardian_message_prompt, lesson_plan_prompt, material_suggestions_prompt, parse_question_count,
    summary_prompt, DEFAULT_QUESTION_COUNT,
};

/// Output budget, in tokens, per route family.
pub mod budget {
    pub const ACTIVITY: u32 = 1000;
    pub const CORRECTION: u32 = 300;
    pub const LESSON_PLAN: u32 = 1000;
    pub const EXAM: u32 = 2000;
    pub const GUARDIAN_MESSAGE: u32 = 300;
    pub const MATERIAL_SUGGESTIONS: u32 = 600;
    pub const SUMMARY: u32 = 500;
    pub const EDUCATIONAL_TEXT: u32 = 1000;
}
