//! Lista las rutas navegables del sitio: el índice y una por cada CSV.

use clap::Parser;
use exam_viewer::route::encode_route;
use exam_viewer::toc::collect_csv_files;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Lista las rutas de examen del directorio de CSV")]
struct Args {
    /// Raíz del sitio (contiene `csv/`).
    #[arg(long, env = "EXAM_SITE_ROOT", default_value = "public")]
    site_root: PathBuf,

    /// Ruta base a anteponer (p. ej. `/web-exam`).
    #[arg(long, env = exam_viewer::config::BASE_PATH_ENV, default_value = "")]
    base_path: String,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let base = exam_viewer::config::normalize_base_path(&args.base_path);
    let files = collect_csv_files(&args.site_root.join("csv"));

    println!("{base}/");
    for segments in &files {
        println!("{base}/{}/", encode_route(segments));
    }
    log::info!("{} rutas de examen", files.len());
}
