// src/data.rs

use crate::model::QuestionRecord;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Convierte el texto de un CSV en preguntas, una por línea no vacía.
///
/// Sin comillas ni escapes: una coma siempre separa celdas. Las líneas que
/// quedan vacías tras recortar se descartan y nunca se rechaza una fila.
pub fn parse_csv_text(text: &str) -> Vec<QuestionRecord> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    // `\r`, `\n` y `\r\n` son terminadores para el lector
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut questions = Vec::new();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Fila CSV ilegible, se omite: {e}");
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }
        questions.push(record_from_cells(record.iter()));
    }
    questions
}

/// Línea de solo espacios: una única celda que queda vacía
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}

/// Asigna celdas por posición: type, number, answer, image, question y el
/// resto (no vacías) como opciones.
pub fn record_from_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> QuestionRecord {
    let mut cells = cells.into_iter().map(str::trim);
    let mut next = || cells.next().unwrap_or_default().to_string();

    let kind_code = next();
    let number = next();
    let answer = next();
    let image = next();
    let question = next();
    let options = cells
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();

    QuestionRecord {
        kind_code,
        number,
        answer,
        image,
        question,
        options,
    }
}
