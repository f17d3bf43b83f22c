use super::*;
use crate::labels::TRUE_FALSE_LABELS;
use crate::model::QuestionKind;

impl ExamApp {
    pub fn answer(&mut self, label: &str) {
        if !self.is_interactive() {
            return;
        }
        let index = self.session.view_index();
        if let Some(result) = self.session.answer(label) {
            log::info!(
                "Pregunta {} ({}): {} -> {}",
                index + 1,
                result.number,
                result.selected,
                if result.is_correct { "正解" } else { "不正" }
            );
        }
    }

    /// Responde por posición (teclas 1-7): la etiqueta del modo activo en
    /// opción múltiple, ○/× en verdadero/falso.
    pub fn answer_by_position(&mut self, position: usize) {
        let label = match self.session.current_question().map(|q| q.kind()) {
            Some(QuestionKind::TrueFalse) => TRUE_FALSE_LABELS.get(position).copied(),
            Some(QuestionKind::MultipleChoice) => {
                let has_option = self
                    .session
                    .current_question()
                    .is_some_and(|q| position < q.options.len());
                if has_option {
                    self.label_mode.labels().get(position).copied()
                } else {
                    None
                }
            }
            None => None,
        };
        if let Some(label) = label {
            self.answer(label);
        }
    }

    pub fn undo_last(&mut self) {
        if self.session.undo_last().is_none() {
            log::debug!("Nada que deshacer");
        }
    }

    pub fn reset_quiz(&mut self) {
        log::info!("Examen reiniciado");
        self.session.reset();
    }

    pub fn open_question(&mut self, index: usize) {
        self.session.open_question(index);
    }

    pub fn set_label_mode(&mut self, mode: LabelMode) {
        self.label_mode = mode;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
