use serde::{Deserialize, Serialize};

/// A registered class. Just the name; duplicates are accepted silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub nome: String,
}

impl SchoolClass {
    pub fn new(nome: impl Into<String>) -> Self {
        Self { nome: nome.into() }
    }
}

/// A saved exam question. Append-only; no route reads the bank back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub questao: String,
    pub disciplina: String,
    pub resposta: String,
}

/// A calendar event. The date string is stored as given, unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub evento: String,
    pub data: String,
}

/// A library material. Two records are seeded at startup; the list is
/// read-only after that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub nome: String,
    pub disciplina: String,
    pub ano: String,
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resposta: Option<String>,
}

/// Filter for the local material search. Empty fields match everything;
/// the term is a case-insensitive substring match on the name.
#[derive(Debug, Clone, Default)]
pub struct MaterialFilter {
    pub termo: String,
    pub disciplina: String,
    pub ano: String,
}

impl MaterialFilter {
    pub fn matches(&self, material: &Material) -> bool {
        (self.disciplina.is_empty() || material.disciplina == self.disciplina)
            && (self.ano.is_empty() || material.ano == self.ano)
            && (self.termo.is_empty()
                || material
                    .nome
                    .to_lowercase()
                    .contains(&self.termo.to_lowercase()))
    }
}
