// src/toc.rs

use std::cmp::Ordering;
use std::fs::FileType;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocFile {
    pub name: String,      // sin extensión
    pub path: Vec<String>, // carpetas + nombre de archivo con extensión
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocFolder {
    pub name: String,
    pub path: Vec<String>,
    pub entries: Vec<TocEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocEntry {
    File(TocFile),
    Folder(TocFolder),
}

/// Índice completo: carpetas de primer nivel y archivos sueltos en la raíz.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvToc {
    pub folders: Vec<TocFolder>,
    pub root_files: Vec<TocFile>,
}

impl CsvToc {
    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }

    pub fn file_count(&self) -> usize {
        fn count(entries: &[TocEntry]) -> usize {
            entries
                .iter()
                .map(|e| match e {
                    TocEntry::File(_) => 1,
                    TocEntry::Folder(f) => count(&f.entries),
                })
                .sum()
        }
        self.root_files.len() + self.folders.iter().map(|f| count(&f.entries)).sum::<usize>()
    }
}

pub fn is_csv_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

/// Quita la extensión `.csv` (sin distinguir mayúsculas).
pub fn strip_csv_extension(name: &str) -> &str {
    if is_csv_name(name) && name.is_char_boundary(name.len() - 4) {
        &name[..name.len() - 4]
    } else {
        name
    }
}

/// Construye el índice a partir de `root`. Un directorio ilegible (o
/// inexistente) se trata como vacío.
pub fn build_csv_toc(root: &Path) -> CsvToc {
    let mut toc = CsvToc::default();

    for (name, file_type) in read_level(root) {
        if file_type.is_dir() {
            let segments = vec![name.clone()];
            toc.folders.push(build_folder(&root.join(&name), segments));
        } else if file_type.is_file() && is_csv_name(&name) {
            toc.root_files.push(TocFile {
                name: strip_csv_extension(&name).to_string(),
                path: vec![name],
            });
        }
    }

    // Los archivos sueltos se ordenan por nombre visible
    toc.root_files.sort_by(|a, b| compare_names(&a.name, &b.name));

    log::info!(
        "Índice construido desde {}: {} carpetas, {} archivos",
        root.display(),
        toc.folders.len(),
        toc.file_count()
    );
    toc
}

fn build_folder(dir: &Path, segments: Vec<String>) -> TocFolder {
    let mut entries = Vec::new();
    for (name, file_type) in read_level(dir) {
        let mut path = segments.clone();
        path.push(name.clone());
        if file_type.is_dir() {
            entries.push(TocEntry::Folder(build_folder(&dir.join(&name), path)));
        } else if file_type.is_file() && is_csv_name(&name) {
            entries.push(TocEntry::File(TocFile {
                name: strip_csv_extension(&name).to_string(),
                path,
            }));
        }
    }

    TocFolder {
        name: segments.last().cloned().unwrap_or_default(),
        path: segments,
        entries,
    }
}

/// Todas las rutas de CSV bajo `root` (segmentos), en profundidad y en orden.
pub fn collect_csv_files(root: &Path) -> Vec<Vec<String>> {
    walker(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(visible_entry)
        .filter(|(name, entry)| entry.file_type().is_file() && is_csv_name(name))
        .filter_map(|(_, entry)| {
            entry
                .path()
                .strip_prefix(root)
                .ok()?
                .iter()
                .map(|s| s.to_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .collect()
}

/// Recorrido ordenado con `compare_names`, sin la propia raíz.
fn walker(dir: &Path) -> WalkDir {
    WalkDir::new(dir).min_depth(1).sort_by(|a, b| {
        compare_names(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy())
    })
}

// La raíz puede llamarse `.tmpXXXX`; solo cuentan los nombres de dentro
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Entrada legible con nombre UTF-8. Los errores se registran y se saltan.
fn visible_entry(entry: walkdir::Result<DirEntry>) -> Option<(String, DirEntry)> {
    let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
            log::warn!("No se pudo leer: {e}");
            return None;
        }
    };
    match entry.file_name().to_str() {
        Some(name) => Some((name.to_string(), entry)),
        None => {
            log::warn!("Nombre no UTF-8 ignorado: {:?}", entry.file_name());
            None
        }
    }
}

/// Entradas visibles de un único nivel, ya ordenadas.
fn read_level(dir: &Path) -> Vec<(String, FileType)> {
    walker(dir)
        .max_depth(1)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(visible_entry)
        .map(|(name, entry)| (name, entry.file_type()))
        .collect()
}

/// Comparación de nombres pensada para contenido en japonés: ignora
/// mayúsculas y anchura completa, iguala hiragana y katakana, y ordena
/// símbolos < dígitos < latín < kana < resto. Empates por texto original.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let ka = a.chars().map(collation_unit);
    let kb = b.chars().map(collation_unit);
    ka.cmp(kb).then_with(|| a.cmp(b))
}

fn collation_unit(c: char) -> (u8, char) {
    let c = fold_width(c);
    match c {
        '0'..='9' => (1, c),
        'a'..='z' => (2, c),
        'A'..='Z' => (2, c.to_ascii_lowercase()),
        // Hiragana -> katakana
        '\u{3041}'..='\u{3096}' => (3, char::from_u32(c as u32 + 0x60).unwrap_or(c)),
        '\u{30A1}'..='\u{30FA}' | 'ー' => (3, c),
        _ if c.is_whitespace() || c.is_ascii_punctuation() => (0, c),
        _ => (4, c),
    }
}

/// Formas de anchura completa (Ａ, １...) a ASCII.
fn fold_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{3000}' => ' ',
        _ => c,
    }
}
