use async_trait::async_trait;

use super::{Event, Material, MaterialFilter, Question, SchoolClass};
use crate::domain::DomainError;

/// Store abstraction over the in-memory lists. Volatile by design; this
/// seam is where a persistent backend would plug in.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    async fn add_class(&self, class: SchoolClass) -> Result<(), DomainError>;

    /// Classes in insertion order.
    async fn list_classes(&self) -> Result<Vec<SchoolClass>, DomainError>;

    async fn add_question(&self, question: Question) -> Result<(), DomainError>;

    async fn add_event(&self, event: Event) -> Result<(), DomainError>;

    /// Seeded materials matching the filter, in insertion order.
    async fn search_materials(&self, filter: &MaterialFilter)
        -> Result<Vec<Material>, DomainError>;
}
