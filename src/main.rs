use anyhow::Context as _;
use clap::Parser;
use exam_viewer::config::{BASE_PATH_ENV, ViewerConfig};
use exam_viewer::model::LabelMode;
use exam_viewer::{ExamApp, ui};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Visor de exámenes tipo test a partir de archivos CSV")]
struct Args {
    /// Archivo YAML de configuración.
    #[arg(short, long, env = "EXAM_CONFIG")]
    config: Option<PathBuf>,

    /// Raíz del sitio (contiene `csv/` e `img/`).
    #[arg(long, env = "EXAM_SITE_ROOT")]
    site_root: Option<PathBuf>,

    /// Origen HTTP del sitio publicado; si se indica, los CSV se descargan.
    #[arg(long, env = "EXAM_CONTENT_URL")]
    content_url: Option<String>,

    /// Ruta base con la que se sirve el sitio (p. ej. `/web-exam`).
    #[arg(long, env = BASE_PATH_ENV)]
    base_path: Option<String>,

    /// Etiquetas iniciales.
    #[arg(long, env = "EXAM_LABEL_MODE", value_enum)]
    label_mode: Option<LabelMode>,

    /// Fuente TTF/OTF con glifos japoneses.
    #[arg(long, env = "EXAM_FONT")]
    font: Option<PathBuf>,

    /// Ruta a abrir al arrancar, p. ej. `quiz/%E7%AC%AC1%E7%AB%A0/01.csv`.
    #[arg(long)]
    open: Option<String>,
}

fn build_config(args: &Args) -> anyhow::Result<ViewerConfig> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("cargando {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    // Los argumentos pisan al archivo
    if let Some(root) = &args.site_root {
        config.site_root = root.clone();
    }
    if let Some(url) = &args.content_url {
        config.content_url = Some(url.clone());
    }
    if let Some(base) = &args.base_path {
        config.set_base_path(base);
    }
    if let Some(mode) = args.label_mode {
        config.label_mode = mode;
    }
    if let Some(font) = &args.font {
        config.font_path = Some(font.clone());
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let config = build_config(&args)?;
    log::info!(
        "Sitio en {} (ruta base {:?})",
        config.site_root.display(),
        config.base_path
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let open = args.open.clone();
    eframe::run_native(
        "Exam Viewer",
        options,
        Box::new(move |cc| {
            if let Some(font) = &config.font_path {
                if let Err(e) = ui::install_font(&cc.egui_ctx, font) {
                    log::warn!("No se pudo cargar la fuente {}: {e}", font.display());
                }
            }
            let mut app = ExamApp::new(config);
            if let Some(route) = open {
                app.open_route(&route);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("error en la interfaz: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_defaults() {
        let args = Args::try_parse_from([
            "exam_viewer",
            "--site-root",
            "site",
            "--base-path",
            "exams/",
            "--label-mode",
            "num",
        ])
        .unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.site_root, PathBuf::from("site"));
        assert_eq!(config.base_path, "/exams");
        assert_eq!(config.label_mode, LabelMode::Number);
    }

    #[test]
    fn unknown_label_mode_is_rejected() {
        assert!(Args::try_parse_from(["exam_viewer", "--label-mode", "roman"]).is_err());
    }
}
