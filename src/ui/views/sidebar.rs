use crate::app::ExamApp;
use crate::view_models::HistoryRow;
use egui::{Color32, Context, Grid, RichText, ScrollArea, SidePanel};

const CORRECT_COLOR: Color32 = Color32::from_rgb(126, 231, 135);
const WRONG_COLOR: Color32 = Color32::from_rgb(248, 81, 73);

/// Panel lateral con la puntuación y el historial revelado.
pub fn ui_sidebar(app: &mut ExamApp, ctx: &Context) {
    let rows: Vec<HistoryRow> = app.history_rows();
    let score_text = app.score_text();
    let mut clicked: Option<usize> = None;

    SidePanel::left("history_panel")
        .resizable(true)
        .default_width(300.0)
        .show_animated(ctx, app.sidebar_open, |ui| {
            ui.add_space(6.0);
            ui.heading("履歴とスコア");
            ui.add_space(6.0);
            ui.label(RichText::new(score_text.as_str()).strong());
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    Grid::new("history_grid")
                        .striped(true)
                        .num_columns(4)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("No");
                            ui.label("選択");
                            ui.label("判定");
                            ui.label("解答");
                            ui.end_row();

                            for row in &rows {
                                if ui
                                    .selectable_label(row.is_current, row.number.as_str())
                                    .on_hover_text("この問題を表示")
                                    .clicked()
                                {
                                    clicked = Some(row.index);
                                }
                                ui.label(row.selected.as_str());
                                match row.verdict {
                                    Some(true) => ui.colored_label(CORRECT_COLOR, row.verdict_label()),
                                    Some(false) => ui.colored_label(WRONG_COLOR, row.verdict_label()),
                                    None => ui.label(""),
                                };
                                ui.label(row.correct_answer.as_str());
                                ui.end_row();
                            }
                        });
                });
        });

    if let Some(index) = clicked {
        app.open_question(index);
    }
}
