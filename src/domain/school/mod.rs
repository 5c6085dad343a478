//! School records: classes, saved questions, calendar events and
//! library materials.

mod entity;
mod repository;

pub use entity::{Event, Material, MaterialFilter, Question, SchoolClass};
pub use repository::SchoolRepository;
