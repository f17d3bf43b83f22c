// src/route.rs

use crate::toc::strip_csv_extension;
use std::borrow::Cow;

/// Prefijo de las rutas de examen.
pub const QUIZ_ROUTE_PREFIX: &str = "quiz/";

/// Archivo seleccionado: ruta relativa cruda (`carpeta/archivo.csv`) y nombre
/// para la cabecera (`carpeta / archivo`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParam {
    pub raw: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Quiz(FileParam),
    NotFound,
}

/// `["第1章", "01.csv"]` -> `quiz/%E7%AC%AC1%E7%AB%A0/01.csv`
pub fn encode_route(segments: &[String]) -> String {
    let encoded: Vec<Cow<'_, str>> = segments
        .iter()
        .map(|s| urlencoding::encode(s))
        .collect();
    format!("{QUIZ_ROUTE_PREFIX}{}", encoded.join("/"))
}

/// Separa una ruta (con o sin `quiz/` delante) en segmentos decodificados.
pub fn route_segments(route: &str) -> Vec<String> {
    let route = route.trim().trim_start_matches('/');
    let route = route.strip_prefix(QUIZ_ROUTE_PREFIX).unwrap_or(route);
    route
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode_component)
        .collect()
}

fn decode_component(text: &str) -> String {
    match urlencoding::decode(text) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::debug!("Segmento sin decodificar ({e}): {text}");
            text.to_string()
        }
    }
}

/// Parámetro de URL todavía codificado (`%E8%A9%A6%E9%A8%93.csv`).
pub fn decode_file_param(param: &str) -> FileParam {
    FileParam::from_raw(decode_component(param))
}

impl FileParam {
    /// A partir de la ruta ya decodificada; no se vuelve a decodificar.
    pub fn from_raw(raw: String) -> Self {
        let display_name = strip_csv_extension(&raw)
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" / ");
        FileParam { raw, display_name }
    }
}

/// Solo se resuelven las rutas descubiertas al escanear; el resto es 404.
pub fn resolve_route(known: &[Vec<String>], segments: &[String]) -> RouteOutcome {
    if segments.is_empty() || !known.iter().any(|k| k.as_slice() == segments) {
        return RouteOutcome::NotFound;
    }
    RouteOutcome::Quiz(FileParam::from_raw(segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn encodes_each_segment() {
        let route = encode_route(&segs(&["第1章", "a b.csv"]));
        assert_eq!(route, "quiz/%E7%AC%AC1%E7%AB%A0/a%20b.csv");
        assert_eq!(route_segments(&route), segs(&["第1章", "a b.csv"]));
    }

    #[test]
    fn slash_inside_a_segment_stays_encoded() {
        let route = encode_route(&segs(&["a/b.csv"]));
        assert_eq!(route, "quiz/a%2Fb.csv");
    }

    #[test]
    fn route_segments_accepts_bare_paths() {
        assert_eq!(route_segments("/dir/x.csv"), segs(&["dir", "x.csv"]));
        assert_eq!(route_segments(""), Vec::<String>::new());
    }

    #[test]
    fn display_name_strips_extension_and_joins() {
        let p = decode_file_param("第1章/ 基礎 .CSV");
        assert_eq!(p.raw, "第1章/ 基礎 .CSV");
        assert_eq!(p.display_name, "第1章 / 基礎");

        let p = decode_file_param("%E8%A9%A6%E9%A8%93.csv");
        assert_eq!(p.raw, "試験.csv");
        assert_eq!(p.display_name, "試験");
    }

    #[test]
    fn bad_escapes_fall_back_to_raw_text() {
        let p = decode_file_param("%FF%FE.csv");
        assert_eq!(p.raw, "%FF%FE.csv");
    }

    #[test]
    fn unknown_routes_are_not_found() {
        let known = vec![segs(&["a", "b.csv"]), segs(&["c.csv"])];
        assert_eq!(resolve_route(&known, &segs(&["x.csv"])), RouteOutcome::NotFound);
        assert_eq!(resolve_route(&known, &[]), RouteOutcome::NotFound);
        match resolve_route(&known, &segs(&["a", "b.csv"])) {
            RouteOutcome::Quiz(p) => {
                assert_eq!(p.raw, "a/b.csv");
                assert_eq!(p.display_name, "a / b");
            }
            RouteOutcome::NotFound => panic!("ruta conocida no resuelta"),
        }
    }

    #[test]
    fn known_segments_are_not_decoded_twice() {
        let known = vec![segs(&["a%41.csv"])];
        match resolve_route(&known, &segs(&["a%41.csv"])) {
            RouteOutcome::Quiz(p) => {
                assert_eq!(p.raw, "a%41.csv");
                assert_eq!(p.display_name, "a%41");
            }
            RouteOutcome::NotFound => panic!("ruta conocida no resuelta"),
        }
    }

    #[test]
    fn encoded_route_round_trips_literal_percent() {
        let route = encode_route(&segs(&["a%41.csv"]));
        assert_eq!(route, "quiz/a%2541.csv");
        assert_eq!(route_segments(&route), segs(&["a%41.csv"]));
    }
}
