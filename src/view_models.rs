// src/view_models.rs

/// Fila del historial lateral.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub index: usize,
    pub number: String,
    pub selected: String,
    pub verdict: Option<bool>, // None = sin responder
    pub correct_answer: String,
    pub is_current: bool,
}

impl HistoryRow {
    pub fn verdict_label(&self) -> &'static str {
        match self.verdict {
            Some(true) => "正解",
            Some(false) => "不正",
            None => "",
        }
    }
}

/// Opción de respuesta tal como se pinta: etiqueta a enviar y texto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceRow {
    pub label: &'static str,
    pub text: String,
}

impl ChoiceRow {
    pub fn chip(&self) -> String {
        format!("[{}]", self.label)
    }
}
