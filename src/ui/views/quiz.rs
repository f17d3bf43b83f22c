use crate::app::ExamApp;
use crate::labels::TRUE_FALSE_LABELS;
use crate::model::QuestionKind;
use crate::ui::helpers::{big_choice_button, choice_row};
use egui::{Align, CentralPanel, Context, Key, RichText, ScrollArea, Spinner};

const NUMBER_KEYS: [Key; 7] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
];

/// Teclas 1-7 responden por posición; Retroceso deshace.
pub fn handle_shortcuts(app: &mut ExamApp, ctx: &Context) {
    let (position, undo) = ctx.input(|i| {
        (
            NUMBER_KEYS.iter().position(|k| i.key_pressed(*k)),
            i.key_pressed(Key::Backspace),
        )
    });
    if let Some(position) = position {
        app.answer_by_position(position);
    }
    if undo {
        app.undo_last();
    }
}

pub fn ui_quiz(app: &mut ExamApp, ctx: &Context) {
    let mut answered: Option<&'static str> = None;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 720.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                    ui.set_max_width(panel_width);

                    // ---------- TARJETA DE PREGUNTA ----------
                    egui::Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(20, 16))
                        .show(ui, |ui| {
                            ui.set_width(panel_width);
                            if let Some(error) = &app.load_error {
                                ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
                            } else if app.is_loading() {
                                ui.horizontal(|ui| {
                                    ui.add(Spinner::new());
                                    ui.label("CSVを読み込んでいます…");
                                });
                            } else if let Some(question) = app.current_question() {
                                ui.label(RichText::new(question.question.as_str()).size(18.0));
                                if let Some(image) = app.current_image() {
                                    ui.add_space(8.0);
                                    if image.starts_with("http://") || image.starts_with("https://") {
                                        ui.hyperlink_to(format!("🖼 {}", question.image), image);
                                    } else {
                                        ui.label(RichText::new(format!("🖼 {image}")).weak());
                                    }
                                }
                            } else {
                                ui.label("このCSVには問題がありません。");
                            }
                        });

                    ui.add_space(12.0);

                    // ---------- OPCIONES ----------
                    let interactive = app.is_interactive();
                    match app.current_question().map(|q| q.kind()) {
                        Some(QuestionKind::TrueFalse) => {
                            ui.horizontal(|ui| {
                                ui.add_space(((panel_width - 2.0 * 96.0 - 16.0) / 2.0).max(0.0));
                                for label in TRUE_FALSE_LABELS {
                                    if big_choice_button(ui, label, 96.0) && interactive {
                                        answered = Some(label);
                                    }
                                    ui.add_space(16.0);
                                }
                            });
                        }
                        Some(QuestionKind::MultipleChoice) => {
                            for row in app.choice_rows() {
                                if choice_row(ui, &row, panel_width, interactive) {
                                    answered = Some(row.label);
                                }
                                ui.add_space(6.0);
                            }
                        }
                        None => {}
                    }

                    if app.session.is_complete() {
                        ui.add_space(12.0);
                        ui.label(RichText::new(app.score_text()).heading());
                    }
                });
            });
    });

    if let Some(label) = answered {
        app.answer(label);
    }
}
