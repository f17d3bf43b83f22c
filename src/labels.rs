// src/labels.rs

use crate::model::LabelMode;

pub const KANA_LABELS: [&str; 7] = ["イ", "ロ", "ハ", "ニ", "ホ", "ヘ", "ト"];
pub const NUM_LABELS: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

/// Los dos símbolos de una pregunta verdadero/falso.
pub const TRUE_FALSE_LABELS: [&str; 2] = ["○", "×"];

/// Posición de `label` en el alfabeto que lo contenga (kana primero).
/// `None` nunca coincide con nada al corregir.
pub fn label_index(label: &str) -> Option<usize> {
    KANA_LABELS
        .iter()
        .position(|l| *l == label)
        .or_else(|| NUM_LABELS.iter().position(|l| *l == label))
}

/// Dos etiquetas valen lo mismo si ambas existen y caen en la misma posición.
pub fn labels_match(selected: &str, answer: &str) -> bool {
    match (label_index(selected), label_index(answer)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl LabelMode {
    pub fn labels(self) -> &'static [&'static str; 7] {
        match self {
            LabelMode::Kana => &KANA_LABELS,
            LabelMode::Number => &NUM_LABELS,
        }
    }

    /// Texto del selector de modo
    pub fn caption(self) -> &'static str {
        match self {
            LabelMode::Kana => "イロハニ",
            LabelMode::Number => "1234",
        }
    }
}
