//! One module per route family.

pub mod ask;
pub mod exams;
pub mod export;
pub mod library;
pub mod school;
pub mod teaching;
