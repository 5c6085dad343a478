//! In-memory school repository

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{
    DomainError, Event, Material, MaterialFilter, Question, SchoolClass, SchoolRepository,
};

/// In-memory implementation of [`SchoolRepository`].
///
/// Append-only lists behind `RwLock`s; everything is lost on restart.
pub struct InMemorySchoolRepository {
    classes: RwLock<Vec<SchoolClass>>,
    questions: RwLock<Vec<Question>>,
    events: RwLock<Vec<Event>>,
    materials: Vec<Material>,
}

impl InMemorySchoolRepository {
    /// Creates an empty repository with no seeded materials.
    pub fn new() -> Self {
        Self::with_materials(Vec::new())
    }

    /// Creates a repository with the standard two seeded library materials.
    pub fn with_seed_materials() -> Self {
        Self::with_materials(vec![
            Material {
                nome: "Livro de Português".to_string(),
                disciplina: "Português".to_string(),
                ano: "3º ano".to_string(),
                tipo: "Livro".to_string(),
                resposta: Some("Exemplo".to_string()),
            },
            Material {
                nome: "Livro de Matemática".to_string(),
                disciplina: "Matemática".to_string(),
                ano: "4º ano".to_string(),
                tipo: "Livro".to_string(),
                resposta: Some("42".to_string()),
            },
        ])
    }

    pub fn with_materials(materials: Vec<Material>) -> Self {
        Self {
            classes: RwLock::new(Vec::new()),
            questions: RwLock::new(Vec::new()),
            events: RwLock::new(Vec::new()),
            materials,
        }
    }
}

impl Default for InMemorySchoolRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn add_class(&self, class: SchoolClass) -> Result<(), DomainError> {
        let mut classes = self
            .classes
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        classes.push(class);
        Ok(())
    }

    async fn list_classes(&self) -> Result<Vec<SchoolClass>, DomainError> {
        let classes = self
            .classes
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        Ok(classes.clone())
    }

    async fn add_question(&self, question: Question) -> Result<(), DomainError> {
        let mut questions = self
            .questions
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        questions.push(question);
        Ok(())
    }

    async fn add_event(&self, event: Event) -> Result<(), DomainError> {
        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
        events.push(event);
        Ok(())
    }

    async fn search_materials(
        &self,
        filter: &MaterialFilter,
    ) -> Result<Vec<Material>, DomainError> {
        Ok(self
            .materials
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }
}
