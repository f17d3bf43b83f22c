mod helpers;
pub mod layout;
pub mod views;

use crate::app::ExamApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::{Context, FontData, FontDefinitions, FontFamily};
use layout::{quiz_header, status_bar};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

impl App for ExamApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultado de la carga en segundo plano
        self.poll_load();
        if self.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // CABECERA DEL EXAMEN (solo durante el examen)
        if matches!(self.state, AppState::Quiz) {
            quiz_header(self, ctx);
            views::quiz::handle_shortcuts(self, ctx);
        }

        // Barra de estado con el cambio de tema
        status_bar(self, ctx);

        // Dispatch por estado
        match self.state.clone() {
            AppState::Toc => views::toc::ui_toc(self, ctx),
            AppState::Quiz => {
                views::sidebar::ui_sidebar(self, ctx);
                views::quiz::ui_quiz(self, ctx);
            }
            AppState::NotFound(route) => views::not_found::ui_not_found(self, ctx, &route),
        }
    }
}

/// Añade una fuente con glifos japoneses delante de las de egui.
pub fn install_font(ctx: &Context, path: &Path) -> std::io::Result<()> {
    let bytes = std::fs::read(path)?;
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("japanese".to_owned(), Arc::new(FontData::from_owned(bytes)));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, "japanese".to_owned());
    fonts
        .families
        .entry(FontFamily::Monospace)
        .or_default()
        .push("japanese".to_owned());
    ctx.set_fonts(fonts);
    log::info!("Fuente cargada: {}", path.display());
    Ok(())
}
