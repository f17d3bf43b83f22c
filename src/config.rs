// src/config.rs

use crate::loader::ContentSource;
use crate::model::LabelMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno con la ruta base del sitio (p. ej. `/web-exam`).
pub const BASE_PATH_ENV: &str = "EXAM_BASE_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo leer la configuración {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuración inválida en {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Raíz del sitio: contiene `csv/` y, opcionalmente, `img/`.
    pub site_root: PathBuf,
    /// Si existe, el contenido se descarga de aquí en vez de leerse del disco.
    pub content_url: Option<String>,
    pub base_path: String,
    pub label_mode: LabelMode,
    /// Fuente con glifos japoneses; egui no trae ninguna.
    pub font_path: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("public"),
            content_url: None,
            base_path: String::new(),
            label_mode: LabelMode::Kana,
            font_path: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_yaml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: ViewerConfig =
            serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.base_path = normalize_base_path(&config.base_path);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text, path)?;
        log::info!("Configuración cargada de {}", path.display());
        Ok(config)
    }

    /// Directorio con los CSV
    pub fn csv_dir(&self) -> PathBuf {
        self.site_root.join("csv")
    }

    pub fn content_source(&self) -> ContentSource {
        match &self.content_url {
            Some(url) if !url.trim().is_empty() => ContentSource::Http(url.trim().to_string()),
            _ => ContentSource::Directory(self.site_root.clone()),
        }
    }

    pub fn set_base_path(&mut self, base_path: &str) {
        self.base_path = normalize_base_path(base_path);
    }
}

/// `""`, `"/"` -> `""`; `"repo/"` -> `"/repo"`.
pub fn normalize_base_path(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
