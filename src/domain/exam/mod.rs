//! Splitting a generated exam into questions and answer key.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Fixed text used when the model did not emit a separate answer key.
pub const MISSING_ANSWER_KEY: &str = "Gabarito não gerado separadamente.";

/// Fixed text used when the questions portion came back empty.
pub const MISSING_QUESTIONS: &str = "Não foi possível gerar a prova.";

static ANSWER_KEY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)gabarito").expect("valid answer-key regex"));

/// An exam split into its questions and answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamPaper {
    pub prova: String,
    pub gabarito: String,
}

/// Split the generated text on the first case-insensitive occurrence of
/// the literal heading "Gabarito". Best-effort: the model's format is not
/// enforced, so a missing heading yields the fixed placeholder instead.
pub fn split_answer_key(text: &str) -> ExamPaper {
    let (questions, key) = match ANSWER_KEY_HEADING.find(text) {
        Some(m) => (&text[..m.start()], Some(&text[m.end()..])),
        None => (text, None),
    };

    let questions = questions.trim();
    let prova = if questions.is_empty() {
        MISSING_QUESTIONS.to_string()
    } else {
        questions.to_string()
    };

    let gabarito = match key {
        Some(key) => key.trim().to_string(),
        None => MISSING_ANSWER_KEY.to_string(),
    };

    ExamPaper { prova, gabarito }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_heading() {
        let paper = split_answer_key("Questão 1: qual?\nA) x B) y\n\nGabarito:\nQuestão 1: B\n");
        assert_eq!(paper.prova, "Questão 1: qual?\nA) x B) y");
        assert_eq!(paper.gabarito, ":\nQuestão 1: B");
    }

    #[test]
    fn test_split_is_case_insensitive() {
        let paper = split_answer_key("Questões aqui\nGABARITO: 1-A");
        assert_eq!(paper.prova, "Questões aqui");
        assert_eq!(paper.gabarito, ": 1-A");
    }

    #[test]
    fn test_missing_heading_uses_placeholder() {
        let paper = split_answer_key("Questão 1: qual?\nA) x B) y");
        assert_eq!(paper.prova, "Questão 1: qual?\nA) x B) y");
        assert_eq!(paper.gabarito, MISSING_ANSWER_KEY);
    }

    #[test]
    fn test_splits_only_on_first_occurrence() {
        let paper = split_answer_key("Perguntas\nGabarito parte 1\nGabarito parte 2");
        assert_eq!(paper.prova, "Perguntas");
        assert_eq!(paper.gabarito, "parte 1\nGabarito parte 2");
    }

    #[test]
    fn test_empty_questions_portion() {
        let paper = split_answer_key("Gabarito: 1-C");
        assert_eq!(paper.prova, MISSING_QUESTIONS);
        assert_eq!(paper.gabarito, ": 1-C");
    }
}
