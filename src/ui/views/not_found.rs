use crate::app::ExamApp;
use crate::ui::layout::message_page;
use egui::{Color32, Context, RichText};

pub fn ui_not_found(app: &mut ExamApp, ctx: &Context, route: &str) {
    let message = RichText::new(format!("ページが見つかりません: {route}")).color(Color32::YELLOW);
    if message_page(ctx, "404", message, "目次へ戻る") {
        app.open_toc();
    }
}
