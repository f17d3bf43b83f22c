use super::*;
use crate::route::{RouteOutcome, resolve_route, route_segments};

impl ExamApp {
    /// Vuelve al índice. Cualquier carga en curso queda invalidada.
    pub fn open_toc(&mut self) {
        self.loader.cancel();
        self.current_file = None;
        self.session = QuizSession::default();
        self.load_error = None;
        self.rescan();
        self.state = AppState::Toc;
    }

    /// Abre una ruta `quiz/<segmentos codificados>` (enlace directo).
    pub fn open_route(&mut self, route: &str) {
        let segments = route_segments(route);
        self.open_file(&segments);
    }

    /// Abre un CSV por segmentos. Cada apertura crea una sesión nueva.
    pub fn open_file(&mut self, segments: &[String]) {
        match resolve_route(&self.known_routes, segments) {
            RouteOutcome::Quiz(file) => {
                // 1) descartar la sesión anterior
                self.session = QuizSession::default();
                self.load_error = None;

                // 2) lanzar la carga; una petición nueva invalida la anterior
                self.loader.request(
                    self.config.content_source(),
                    self.config.base_path.clone(),
                    file.raw.clone(),
                );

                self.current_file = Some(file);
                self.state = AppState::Quiz;
            }
            RouteOutcome::NotFound => {
                log::warn!("Ruta desconocida: {}", segments.join("/"));
                self.loader.cancel();
                self.current_file = None;
                self.session = QuizSession::default();
                self.load_error = None;
                self.state = AppState::NotFound(segments.join("/"));
            }
        }
    }
}
