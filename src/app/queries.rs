use super::*;
use crate::model::QuestionRecord;

impl ExamApp {
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.session.current_question()
    }

    /// Nombre del archivo abierto para la cabecera
    pub fn display_name(&self) -> &str {
        self.current_file
            .as_ref()
            .map(|f| f.display_name.as_str())
            .unwrap_or_default()
    }

    pub fn score_text(&self) -> String {
        self.session.score().to_string()
    }

    /// Ubicación de la imagen de la pregunta actual, si tiene.
    pub fn current_image(&self) -> Option<String> {
        let question = self.current_question()?;
        if question.image.is_empty() {
            return None;
        }
        Some(
            self.config
                .content_source()
                .image_location(&self.config.base_path, &question.image),
        )
    }
}
