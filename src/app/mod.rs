use crate::config::ViewerConfig;
use crate::loader::QuizLoader;
use crate::model::{AppState, LabelMode};
use crate::route::FileParam;
use crate::session::QuizSession;
use crate::toc::{CsvToc, build_csv_toc, collect_csv_files};

// Submódulos
pub mod actions;
pub mod loading;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ChoiceRow, HistoryRow};

pub struct ExamApp {
    pub config: ViewerConfig,
    pub toc: CsvToc,
    pub known_routes: Vec<Vec<String>>, // una por CSV descubierto
    pub state: AppState,
    pub current_file: Option<FileParam>,
    pub session: QuizSession,
    pub label_mode: LabelMode,
    pub load_error: Option<String>,
    pub sidebar_open: bool,
    loader: QuizLoader,
}

impl ExamApp {
    pub fn new(config: ViewerConfig) -> Self {
        let label_mode = config.label_mode;
        let mut app = Self {
            config,
            toc: CsvToc::default(),
            known_routes: Vec::new(),
            state: AppState::Toc,
            current_file: None,
            session: QuizSession::default(),
            label_mode,
            load_error: None,
            sidebar_open: false,
            loader: QuizLoader::default(),
        };
        app.rescan();
        app
    }

    /// Vuelve a recorrer el directorio de CSV (índice y rutas).
    pub fn rescan(&mut self) {
        let csv_dir = self.config.csv_dir();
        self.toc = build_csv_toc(&csv_dir);
        self.known_routes = collect_csv_files(&csv_dir);
    }
}
