// src/ui/helpers.rs
use crate::view_models::ChoiceRow;
use egui::{Button, Frame, Label, RichText, Sense, Ui, Vec2};

/// Botón grande de ○/×.
pub fn big_choice_button(ui: &mut Ui, label: &str, size: f32) -> bool {
    ui.add(Button::new(RichText::new(label).size(size * 0.5)).min_size(Vec2::splat(size)))
        .clicked()
}

/// Fila `[イ] texto` clicable en toda su anchura. Devuelve si se pulsó.
pub fn choice_row(ui: &mut Ui, row: &ChoiceRow, width: f32, enabled: bool) -> bool {
    let response = Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(width);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(row.chip()).strong().monospace());
                ui.add(Label::new(row.text.as_str()).wrap());
            });
        })
        .response
        .interact(Sense::click());

    enabled && response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}
