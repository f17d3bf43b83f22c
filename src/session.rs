// src/session.rs

use crate::labels::labels_match;
use crate::model::{AnswerResult, QuestionKind, QuestionRecord, Score};

/// Estado completo de una sesión de examen sobre un único archivo.
///
/// Se crea nueva al cambiar de archivo; nada se conserva entre sesiones.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    results: Vec<Option<AnswerResult>>,
    view_index: usize,
    revealed_frontier: usize,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl QuizSession {
    /// Sesión recién cargada: sin respuestas, en la pregunta 0, solo la 0 visible.
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        let results = vec![None; questions.len()];
        Self {
            questions,
            results,
            view_index: 0,
            revealed_frontier: 1,
        }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn results(&self) -> &[Option<AnswerResult>] {
        &self.results
    }

    pub fn result(&self, index: usize) -> Option<&AnswerResult> {
        self.results.get(index).and_then(Option::as_ref)
    }

    pub fn view_index(&self) -> usize {
        self.view_index
    }

    pub fn revealed_frontier(&self) -> usize {
        self.revealed_frontier
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.view_index)
    }

    /// Corrige `selected_label` contra la pregunta actual y avanza a la
    /// siguiente sin responder (con vuelta al principio).
    pub fn answer(&mut self, selected_label: &str) -> Option<&AnswerResult> {
        let index = self.view_index;
        let question = self.questions.get(index)?;

        let is_correct = match question.kind() {
            QuestionKind::TrueFalse => question.answer == selected_label,
            QuestionKind::MultipleChoice => labels_match(selected_label, &question.answer),
        };
        let result = AnswerResult {
            number: question.number.clone(),
            selected: selected_label.to_string(),
            is_correct,
            correct_answer: question.answer.clone(),
        };
        self.results[index] = Some(result);

        // 1) siguiente sin responder tras la actual, 2) desde el principio, 3) quedarse
        let next = self.first_unanswered_from(index + 1).unwrap_or(index);
        self.view_index = next;
        self.revealed_frontier = self
            .revealed_frontier
            .max(self.total().min(next + 1));

        log::debug!(
            "Pregunta {} respondida ({}), vista -> {}, frontera {}",
            index,
            if is_correct { "correcta" } else { "incorrecta" },
            self.view_index,
            self.revealed_frontier
        );

        self.results[index].as_ref()
    }

    /// Primera pregunta sin responder desde `start`, dando la vuelta al inicio.
    fn first_unanswered_from(&self, start: usize) -> Option<usize> {
        let total = self.total();
        let start = start.min(total);
        (start..total)
            .chain(0..start)
            .find(|&i| self.results[i].is_none())
    }

    /// Borra la respuesta de índice más alto y vuelve a esa pregunta.
    /// La frontera no retrocede.
    pub fn undo_last(&mut self) -> Option<usize> {
        let index = self.results.iter().rposition(Option::is_some)?;
        self.results[index] = None;
        self.view_index = index;
        log::debug!("Deshecha la respuesta {index}");
        Some(index)
    }

    pub fn reset(&mut self) {
        self.results = vec![None; self.questions.len()];
        self.view_index = 0;
        self.revealed_frontier = 1;
    }

    /// Abre una pregunta del historial. Se ignora si está fuera de rango o
    /// aún no se ha revelado.
    pub fn open_question(&mut self, index: usize) -> bool {
        if index >= self.visible_history_count() {
            log::debug!("Pregunta {index} no revelada, se ignora");
            return false;
        }
        self.view_index = index;
        true
    }

    pub fn visible_history_count(&self) -> usize {
        self.revealed_frontier.min(self.total())
    }

    pub fn answered_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.answered_count() == self.total()
    }

    pub fn score(&self) -> Score {
        let correct = self
            .results
            .iter()
            .flatten()
            .filter(|r| r.is_correct)
            .count();
        Score::new(correct, self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(number: &str, answer: &str) -> QuestionRecord {
        QuestionRecord {
            kind_code: "2".into(),
            number: number.into(),
            answer: answer.into(),
            question: format!("問題 {number}"),
            ..Default::default()
        }
    }

    fn mc(number: &str, answer: &str) -> QuestionRecord {
        QuestionRecord {
            kind_code: "1".into(),
            number: number.into(),
            answer: answer.into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            ..Default::default()
        }
    }

    #[test]
    fn new_session_starts_at_zero_with_one_visible() {
        let s = QuizSession::new(vec![tf("1", "○"), tf("2", "×")]);
        assert_eq!(s.view_index(), 0);
        assert_eq!(s.revealed_frontier(), 1);
        assert_eq!(s.results().len(), 2);
        assert!(s.results().iter().all(Option::is_none));
        assert_eq!(s.visible_history_count(), 1);
    }

    #[test]
    fn true_false_answer_advances_and_reveals() {
        let mut s = QuizSession::new(vec![tf("1", "○"), mc("2", "イ"), mc("3", "ロ")]);
        let r = s.answer("○").cloned().unwrap();
        assert!(r.is_correct);
        assert_eq!(r.number, "1");
        assert_eq!(r.correct_answer, "○");
        assert_eq!(s.view_index(), 1);
        assert_eq!(s.revealed_frontier(), 2);
    }

    #[test]
    fn true_false_compares_literally() {
        let mut s = QuizSession::new(vec![tf("1", "○")]);
        assert!(!s.answer("×").unwrap().is_correct);
        s.reset();
        // Sin traducción de alfabeto: "1" no vale como ○
        assert!(!s.answer("1").unwrap().is_correct);
    }

    #[test]
    fn multiple_choice_accepts_either_alphabet() {
        let mut s = QuizSession::new(vec![mc("1", "ロ")]);
        assert!(s.answer("2").unwrap().is_correct);
        s.reset();
        assert!(s.answer("ロ").unwrap().is_correct);
        s.reset();
        assert!(!s.answer("イ").unwrap().is_correct);
    }

    #[test]
    fn unknown_labels_are_incorrect() {
        let mut s = QuizSession::new(vec![mc("1", "z")]);
        assert!(!s.answer("z").unwrap().is_correct);
    }

    #[test]
    fn answering_last_wraps_to_first_unanswered() {
        let mut s = QuizSession::new(vec![mc("1", "イ"), mc("2", "イ"), mc("3", "イ")]);
        s.view_index = 2;
        s.revealed_frontier = 3;
        s.answer("イ");
        assert_eq!(s.view_index(), 0);
        assert_eq!(s.revealed_frontier(), 3);
    }

    #[test]
    fn all_answered_stays_put() {
        let mut s = QuizSession::new(vec![mc("1", "イ"), mc("2", "ロ")]);
        s.answer("イ");
        s.answer("ハ");
        assert_eq!(s.view_index(), 1);
        assert!(s.is_complete());
        // Responder de nuevo sobrescribe y sigue en el mismo sitio
        let r = s.answer("ロ").cloned().unwrap();
        assert!(r.is_correct);
        assert_eq!(s.view_index(), 1);
        assert_eq!(s.score().correct, 2);
    }

    #[test]
    fn answer_on_empty_session_is_noop() {
        let mut s = QuizSession::new(Vec::new());
        assert!(s.answer("イ").is_none());
        assert_eq!(s.view_index(), 0);
        assert_eq!(s.revealed_frontier(), 1);
        assert_eq!(s.visible_history_count(), 0);
    }

    #[test]
    fn undo_restores_slot_and_view_but_not_frontier() {
        let mut s = QuizSession::new(vec![mc("1", "イ"), mc("2", "ロ"), mc("3", "ハ")]);
        s.answer("イ");
        let before = s.results()[1].clone();
        s.answer("ロ");
        let frontier = s.revealed_frontier();
        assert_eq!(s.undo_last(), Some(1));
        assert_eq!(s.results()[1], before);
        assert_eq!(s.view_index(), 1);
        assert_eq!(s.revealed_frontier(), frontier);
    }

    #[test]
    fn undo_picks_highest_answered_index() {
        let mut s = QuizSession::new(vec![mc("1", "イ"), mc("2", "ロ"), mc("3", "ハ")]);
        s.answer("イ");
        s.answer("イ");
        assert!(s.open_question(0));
        s.answer("ロ");
        assert_eq!(s.undo_last(), Some(1));
        assert_eq!(s.view_index(), 1);
        assert!(s.result(0).is_some());
    }

    #[test]
    fn undo_without_answers_is_noop() {
        let mut s = QuizSession::new(vec![mc("1", "イ"), mc("2", "ロ")]);
        s.answer("イ");
        s.open_question(1);
        s.undo_last();
        assert_eq!(s.undo_last(), None);
        assert_eq!(s.view_index(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = QuizSession::new(vec![mc("1", "イ"), mc("2", "ロ"), mc("3", "ハ")]);
        s.answer("イ");
        s.answer("ロ");
        s.reset();
        assert_eq!(s.answered_count(), 0);
        assert_eq!(s.view_index(), 0);
        assert_eq!(s.revealed_frontier(), 1);
    }

    #[test]
    fn open_question_refuses_unrevealed_or_out_of_range() {
        let mut s = QuizSession::new(vec![mc("1", "イ"), mc("2", "ロ"), mc("3", "ハ")]);
        assert!(!s.open_question(1));
        assert!(!s.open_question(7));
        assert_eq!(s.view_index(), 0);

        s.answer("イ");
        assert_eq!(s.revealed_frontier(), 2);
        assert!(s.open_question(0));
        assert_eq!(s.view_index(), 0);
        assert!(s.open_question(1));
        assert_eq!(s.view_index(), 1);
        assert!(!s.open_question(2));
        assert_eq!(s.view_index(), 1);
    }

    #[test]
    fn frontier_never_shrinks_while_answering() {
        let mut s = QuizSession::new((1..=5).map(|n| mc(&n.to_string(), "イ")).collect());
        let mut last = s.revealed_frontier();
        for label in ["イ", "ロ", "イ", "ハ", "イ", "ロ"] {
            s.answer(label);
            assert!(s.revealed_frontier() >= last);
            assert!(s.revealed_frontier() <= s.total());
            last = s.revealed_frontier();
            if s.view_index() > 0 {
                s.open_question(0);
            }
        }
    }

    #[test]
    fn score_counts_correct_answers() {
        let mut s = QuizSession::new(vec![tf("1", "○"), mc("2", "ロ"), mc("3", "ハ")]);
        assert_eq!(s.score(), Score::new(0, 3));
        s.answer("○");
        s.answer("1");
        s.answer("3");
        let score = s.score();
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 3);
        assert_eq!(score.percentage, 67);
    }
}
