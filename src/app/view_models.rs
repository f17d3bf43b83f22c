use super::*;
use crate::model::QuestionKind;

impl ExamApp {
    /// Filas del historial: solo hasta la frontera revelada.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        let session = &self.session;
        session
            .questions()
            .iter()
            .take(session.visible_history_count())
            .enumerate()
            .map(|(i, q)| {
                let result = session.result(i);
                HistoryRow {
                    index: i,
                    number: q.display_number(i),
                    selected: result.map(|r| r.selected.clone()).unwrap_or_default(),
                    verdict: result.map(|r| r.is_correct),
                    correct_answer: result
                        .map(|r| r.correct_answer.clone())
                        .unwrap_or_default(),
                    is_current: i == session.view_index(),
                }
            })
            .collect()
    }

    /// Opciones de la pregunta actual con las etiquetas del modo activo.
    /// Las opciones que pasan de siete no tienen etiqueta y no se muestran.
    pub fn choice_rows(&self) -> Vec<ChoiceRow> {
        let Some(question) = self.current_question() else {
            return Vec::new();
        };
        match question.kind() {
            QuestionKind::TrueFalse => Vec::new(),
            QuestionKind::MultipleChoice => self
                .label_mode
                .labels()
                .iter()
                .zip(&question.options)
                .map(|(label, text)| ChoiceRow {
                    label: *label,
                    text: text.clone(),
                })
                .collect(),
        }
    }
}
