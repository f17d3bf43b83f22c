use crate::app::ExamApp;
use crate::model::LabelMode;
use egui::{Button, CentralPanel, ComboBox, Context, Frame, RichText, ScrollArea, Ui, Visuals};

/// Barra superior del examen: índice, título, deshacer, reintentar y modo
/// de etiquetas.
pub fn quiz_header(app: &mut ExamApp, ctx: &Context) {
    egui::TopBottomPanel::top("quiz_header").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let burger = if app.sidebar_open { "✖" } else { "☰" };
            if ui
                .add(Button::new(burger).selected(app.sidebar_open))
                .on_hover_text("サイドバーを開閉")
                .clicked()
            {
                app.toggle_sidebar();
            }

            if ui.button("目次").clicked() {
                app.open_toc();
                ctx.request_repaint();
                return;
            }

            ui.label(RichText::new(app.display_name()).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut mode = app.label_mode;
                ComboBox::from_id_salt("label_mode")
                    .selected_text(mode.caption())
                    .show_ui(ui, |ui| {
                        for option in [LabelMode::Kana, LabelMode::Number] {
                            ui.selectable_value(&mut mode, option, option.caption());
                        }
                    });
                if mode != app.label_mode {
                    app.set_label_mode(mode);
                }

                if ui.button("リトライ").clicked() {
                    app.reset_quiz();
                }
                if ui.button("戻る").clicked() {
                    app.undo_last();
                }
            });
        });
    });
}

/// Barra de estado: carpeta de CSV y número de archivos a la izquierda,
/// cambio de tema a la derecha.
pub fn status_bar(app: &ExamApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "{}  ·  CSV {}件",
                    app.config.csv_dir().display(),
                    app.toc.file_count()
                ))
                .small()
                .weak(),
            );
            if app.is_loading() {
                ui.add(egui::Spinner::new().size(10.0));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dark = ctx.style().visuals.dark_mode;
                let caption = if dark { "☀ ライト" } else { "🌙 ダーク" };
                if ui.small_button(caption).clicked() {
                    ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
                }
            });
        });
    });
}

/// Página con desplazamiento vertical y columna centrada de ancho máximo
/// `max_width`.
pub fn scroll_page(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let width = ui.available_width().min(max_width);
        let side = ((ui.available_width() - width) / 2.0).max(0.0);
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        ui.add_space(16.0);
                        inner(ui);
                    });
                });
            });
    });
}

/// Aviso a pantalla completa con un único botón. Devuelve `true` si se pulsó.
pub fn message_page(ctx: &Context, title: &str, message: RichText, action: &str) -> bool {
    let mut clicked = false;
    CentralPanel::default().show(ctx, |ui| {
        ui.add_space((ui.available_height() * 0.3).max(0.0));
        ui.vertical_centered(|ui| {
            Frame::group(ui.style())
                .inner_margin(egui::Margin::symmetric(32, 20))
                .show(ui, |ui| {
                    ui.heading(title);
                    ui.add_space(8.0);
                    ui.label(message);
                    ui.add_space(16.0);
                    clicked = ui.button(action).clicked();
                });
        });
    });
    clicked
}
