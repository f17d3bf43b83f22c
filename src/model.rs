use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Valor de la columna `type` que marca una pregunta de verdadero/falso.
pub const TRUE_FALSE_CODE: &str = "2";

/// Una fila del CSV, tal cual viene (celdas ya recortadas).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionRecord {
    pub kind_code: String, // columna `type`
    pub number: String,
    pub answer: String,
    pub image: String,
    pub question: String,
    pub options: Vec<String>, // orden de columnas, nunca reordenado
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    /// ○ / ×, comparado literalmente con `answer`.
    TrueFalse,
    /// Opciones posicionales contra el alfabeto de etiquetas.
    MultipleChoice,
}

impl QuestionRecord {
    pub fn kind(&self) -> QuestionKind {
        if self.kind_code == TRUE_FALSE_CODE {
            QuestionKind::TrueFalse
        } else {
            QuestionKind::MultipleChoice
        }
    }

    /// Número a mostrar en el historial: el de la columna o la posición 1-based.
    pub fn display_number(&self, index: usize) -> String {
        if self.number.is_empty() {
            (index + 1).to_string()
        } else {
            self.number.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub number: String,
    pub selected: String,
    pub is_correct: bool,
    pub correct_answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub percentage: u32,
    pub total: usize,
}

impl Score {
    pub fn new(correct: usize, total: usize) -> Self {
        // Sin preguntas no hay porcentaje que calcular
        let percentage = if total == 0 {
            0
        } else {
            (100.0 * correct as f64 / total as f64).round() as u32
        };
        Self {
            correct,
            percentage,
            total,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "正答率: {}% ({}/{})",
            self.percentage, self.correct, self.total
        )
    }
}

/// Alfabeto con el que se muestran las opciones. Sirve igual en el YAML
/// (`label_mode: number`) y en `--label-mode`.
#[derive(Clone, Copy, Debug, Deserialize, ValueEnum, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    #[default]
    Kana,
    #[serde(alias = "num")]
    #[value(alias = "num")]
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Toc,
    Quiz,
    NotFound(String),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Toc
    }
}
