// src/loader.rs

use crate::config::normalize_base_path;
use crate::data::parse_csv_text;
use crate::model::QuestionRecord;
use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, USER_AGENT};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use thiserror::Error;

/// De dónde se leen los CSV y las imágenes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Raíz del sitio en disco (`<raíz>/csv`, `<raíz>/img`).
    Directory(PathBuf),
    /// Origen HTTP del sitio publicado.
    Http(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no se pudo leer {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP {status} para {location}")]
    Http { location: String, status: u16 },
    #[error("fallo de red en {location}: {source}")]
    Request {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("no hay ubicaciones candidatas")]
    NoCandidates,
}

/// Ubicaciones a probar, en orden: con la ruta base delante y sin ella.
pub fn candidate_locations(prefix: &str, raw: &str) -> Vec<String> {
    fn push_unique(candidates: &mut Vec<String>, value: String) {
        if !candidates.iter().any(|c| c == &value) {
            candidates.push(value);
        }
    }

    let base = format!("/csv/{}", raw.trim_start_matches('/'));
    let mut candidates = Vec::new();
    push_unique(&mut candidates, format!("{}{base}", normalize_base_path(prefix)));
    push_unique(&mut candidates, base);
    candidates
}

/// `<prefijo>/img/<imagen>`
pub fn image_src(prefix: &str, image: &str) -> String {
    format!("{}/img/{}", normalize_base_path(prefix), image)
}

impl ContentSource {
    fn fetch_location(&self, location: &str) -> Result<String, LoadError> {
        match self {
            ContentSource::Directory(root) => {
                let path = root.join(location.trim_start_matches('/'));
                let bytes = std::fs::read(&path).map_err(|source| LoadError::Io {
                    location: path.display().to_string(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            ContentSource::Http(origin) => {
                let url = format!("{}{}", origin.trim_end_matches('/'), encode_path(location));
                let response = Client::new()
                    .get(&url)
                    .header(USER_AGENT, concat!("exam-viewer/", env!("CARGO_PKG_VERSION")))
                    .header(CACHE_CONTROL, "no-store")
                    .send()
                    .map_err(|source| LoadError::Request {
                        location: url.clone(),
                        source,
                    })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Http {
                        location: url,
                        status: status.as_u16(),
                    });
                }
                response.text().map_err(|source| LoadError::Request {
                    location: url,
                    source,
                })
            }
        }
    }

    /// Dónde mostrar la imagen de una pregunta.
    pub fn image_location(&self, prefix: &str, image: &str) -> String {
        match self {
            ContentSource::Directory(root) => root
                .join("img")
                .join(image)
                .display()
                .to_string(),
            ContentSource::Http(origin) => format!(
                "{}{}",
                origin.trim_end_matches('/'),
                encode_path(&image_src(prefix, image))
            ),
        }
    }
}

fn encode_path(location: &str) -> String {
    location
        .split('/')
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Prueba cada ubicación candidata y devuelve el primer texto que se pueda
/// leer; si todas fallan, el último error.
pub fn fetch_quiz_text(source: &ContentSource, prefix: &str, raw: &str) -> Result<String, LoadError> {
    let mut last_error = LoadError::NoCandidates;
    for location in candidate_locations(prefix, raw) {
        match source.fetch_location(&location) {
            Ok(text) => {
                log::debug!("CSV leído de {location}");
                return Ok(text);
            }
            Err(e) => {
                log::debug!("Candidato descartado: {e}");
                last_error = e;
            }
        }
    }
    Err(last_error)
}

pub fn load_quiz(
    source: &ContentSource,
    prefix: &str,
    raw: &str,
) -> Result<Vec<QuestionRecord>, LoadError> {
    let text = fetch_quiz_text(source, prefix, raw)?;
    Ok(parse_csv_text(&text))
}

/// Resultado de una carga, con el archivo al que pertenece.
#[derive(Debug)]
pub struct LoadOutcome {
    pub raw: String,
    pub result: Result<Vec<QuestionRecord>, LoadError>,
}

struct LoadMessage {
    generation: u64,
    outcome: LoadOutcome,
}

/// Carga en segundo plano. Cada petición lleva una generación y solo la de
/// la última petición llega a `poll`; el resto se descarta.
pub struct QuizLoader {
    generation: u64,
    pending: bool,
    tx: Sender<LoadMessage>,
    rx: Receiver<LoadMessage>,
}

impl Default for QuizLoader {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generation: 0,
            pending: false,
            tx,
            rx,
        }
    }
}

impl QuizLoader {
    pub fn request(&mut self, source: ContentSource, prefix: String, raw: String) {
        self.generation += 1;
        self.pending = true;
        let generation = self.generation;
        let tx = self.tx.clone();

        log::info!("Cargando {raw} (petición {generation})");
        std::thread::spawn(move || {
            let result = load_quiz(&source, &prefix, &raw);
            // El receptor puede haber desaparecido si la app se cerró
            let _ = tx.send(LoadMessage {
                generation,
                outcome: LoadOutcome { raw, result },
            });
        });
    }

    /// Invalida la petición en curso (navegar fuera del examen).
    pub fn cancel(&mut self) {
        if self.pending {
            log::debug!("Petición {} invalidada", self.generation);
        }
        self.generation += 1;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn poll(&mut self) -> Option<LoadOutcome> {
        loop {
            match self.rx.try_recv() {
                Ok(message) if message.generation == self.generation => {
                    self.pending = false;
                    return Some(message.outcome);
                }
                Ok(message) => {
                    log::debug!(
                        "Respuesta obsoleta de {} descartada",
                        message.outcome.raw
                    );
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn site_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            create_dir_all(path.parent().unwrap()).unwrap();
            write(path, content).unwrap();
        }
        dir
    }

    fn wait_for(loader: &mut QuizLoader) -> LoadOutcome {
        let start = Instant::now();
        loop {
            if let Some(outcome) = loader.poll() {
                return outcome;
            }
            assert!(start.elapsed() < Duration::from_secs(5), "la carga no terminó");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn candidates_try_prefix_first() {
        assert_eq!(
            candidate_locations("/repo", "a/b.csv"),
            vec!["/repo/csv/a/b.csv".to_string(), "/csv/a/b.csv".to_string()]
        );
        assert_eq!(candidate_locations("", "b.csv"), vec!["/csv/b.csv".to_string()]);
        assert_eq!(candidate_locations("/", "b.csv"), vec!["/csv/b.csv".to_string()]);
    }

    #[test]
    fn image_src_uses_prefix() {
        assert_eq!(image_src("/repo", "q1.png"), "/repo/img/q1.png");
        assert_eq!(image_src("", "q1.png"), "/img/q1.png");
    }

    #[test]
    fn http_image_location_is_encoded() {
        let source = ContentSource::Http("https://example.org/".into());
        assert_eq!(
            source.image_location("/repo", "図 1.png"),
            "https://example.org/repo/img/%E5%9B%B3%201.png"
        );
    }

    #[test]
    fn falls_back_to_unprefixed_location() {
        let site = site_with(&[("csv/set.csv", "2,1,○,,Q\n")]);
        let source = ContentSource::Directory(site.path().to_path_buf());
        let qs = load_quiz(&source, "/repo", "set.csv").unwrap();
        assert_eq!(qs.len(), 1);
        assert_eq!(qs[0].answer, "○");
    }

    #[test]
    fn prefixed_location_wins_when_present() {
        let site = site_with(&[
            ("repo/csv/set.csv", "2,1,○,,A\n2,2,×,,B\n"),
            ("csv/set.csv", "2,1,○,,A\n"),
        ]);
        let source = ContentSource::Directory(site.path().to_path_buf());
        assert_eq!(load_quiz(&source, "/repo", "set.csv").unwrap().len(), 2);
    }

    #[test]
    fn missing_file_reports_last_error() {
        let site = site_with(&[]);
        let source = ContentSource::Directory(site.path().to_path_buf());
        let err = load_quiz(&source, "/repo", "nope.csv").unwrap_err();
        match err {
            LoadError::Io { location, .. } => assert!(location.ends_with("nope.csv")),
            other => panic!("error inesperado: {other:?}"),
        }
    }

    #[test]
    fn http_falls_back_when_prefixed_location_is_missing() {
        let mut server = mockito::Server::new();
        let prefixed = server
            .mock("GET", "/repo/csv/set.csv")
            .with_status(404)
            .expect(1)
            .create();
        let plain = server
            .mock("GET", "/csv/set.csv")
            .with_status(200)
            .with_body("2,1,○,,Q\n1,2,ロ,,Q2,a,b\n")
            .expect(1)
            .create();

        let source = ContentSource::Http(server.url());
        let qs = load_quiz(&source, "/repo", "set.csv").unwrap();
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[1].options, vec!["a", "b"]);
        prefixed.assert();
        plain.assert();
    }

    #[test]
    fn http_error_status_is_reported() {
        let mut server = mockito::Server::new();
        let _prefixed = server.mock("GET", "/repo/csv/set.csv").with_status(404).create();
        let _plain = server.mock("GET", "/csv/set.csv").with_status(503).create();

        let source = ContentSource::Http(server.url());
        match fetch_quiz_text(&source, "/repo", "set.csv").unwrap_err() {
            LoadError::Http { location, status } => {
                assert_eq!(status, 503);
                assert!(location.ends_with("/csv/set.csv"));
                assert!(!location.contains("/repo/"));
            }
            other => panic!("error inesperado: {other:?}"),
        }
    }

    #[test]
    fn loader_delivers_only_latest_request() {
        let site = site_with(&[
            ("csv/a.csv", "1,1,イ,,A,x\n"),
            ("csv/b.csv", "1,1,イ,,B,x\n1,2,ロ,,B2,y\n"),
        ]);
        let source = ContentSource::Directory(site.path().to_path_buf());
        let mut loader = QuizLoader::default();

        loader.request(source.clone(), String::new(), "a.csv".into());
        loader.request(source, String::new(), "b.csv".into());
        assert!(loader.is_pending());

        let outcome = wait_for(&mut loader);
        assert_eq!(outcome.raw, "b.csv");
        assert_eq!(outcome.result.unwrap().len(), 2);
        assert!(!loader.is_pending());

        // La respuesta de a.csv nunca se entrega
        std::thread::sleep(Duration::from_millis(50));
        assert!(loader.poll().is_none());
    }

    #[test]
    fn cancelled_request_is_discarded() {
        let site = site_with(&[("csv/a.csv", "1,1,イ,,A,x\n")]);
        let source = ContentSource::Directory(site.path().to_path_buf());
        let mut loader = QuizLoader::default();
        loader.request(source, String::new(), "a.csv".into());
        loader.cancel();
        assert!(!loader.is_pending());
        std::thread::sleep(Duration::from_millis(100));
        assert!(loader.poll().is_none());
    }
}
