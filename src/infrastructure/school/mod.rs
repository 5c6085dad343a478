//! In-memory implementation of the school repository.

mod in_memory;

pub use in_memory::InMemorySchoolRepository;
