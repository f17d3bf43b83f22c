use super::*;

impl ExamApp {
    /// Recoge el resultado de la carga en segundo plano, si ya llegó.
    pub fn poll_load(&mut self) {
        let Some(outcome) = self.loader.poll() else {
            return;
        };

        match outcome.result {
            Ok(questions) => {
                log::info!("{}: {} preguntas", outcome.raw, questions.len());
                self.session = QuizSession::new(questions);
                self.load_error = None;
            }
            Err(e) => {
                log::error!("Carga de CSV fallida ({}): {e}", outcome.raw);
                // Sin lista parcial: la sesión queda vacía
                self.session = QuizSession::default();
                self.load_error = Some(format!(
                    "CSVの読み込みに失敗しました。ファイル: {}",
                    outcome.raw
                ));
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_pending()
    }

    /// Se puede responder: hay preguntas y no hay carga ni error.
    pub fn is_interactive(&self) -> bool {
        !self.is_loading() && self.load_error.is_none() && !self.session.is_empty()
    }
}
