use crate::app::ExamApp;
use crate::toc::{CsvToc, TocEntry};
use crate::ui::layout::scroll_page;
use egui::{CollapsingHeader, Context, RichText, Ui};

pub fn ui_toc(app: &mut ExamApp, ctx: &Context) {
    let mut selected: Option<Vec<String>> = None;
    let mut rescan = false;

    scroll_page(ctx, 720.0, |ui| {
        ui.horizontal(|ui| {
            ui.heading("目次（CSV一覧）");
            if ui.small_button("⟳").on_hover_text("再読み込み").clicked() {
                rescan = true;
            }
        });
        ui.add_space(12.0);

        if app.toc.is_empty() {
            // Sin archivos no es un error: solo se avisa
            let csv_dir = app.config.csv_dir();
            ui.label(format!("{} にCSVファイルがありません。", csv_dir.display()));
            ui.label(
                RichText::new(format!(
                    "例: {} を作成してください。",
                    csv_dir.join("sample.csv").display()
                ))
                .weak(),
            );
            return;
        }

        toc_tree(ui, &app.toc, &mut selected);
    });

    if rescan {
        app.rescan();
    }
    if let Some(path) = selected {
        app.open_file(&path);
    }
}

fn toc_tree(ui: &mut Ui, toc: &CsvToc, selected: &mut Option<Vec<String>>) {
    for folder in &toc.folders {
        CollapsingHeader::new(format!("📁 {}", folder.name))
            .id_salt(folder.path.join("/"))
            .default_open(true)
            .show(ui, |ui| toc_entries(ui, &folder.entries, selected));
    }

    for file in &toc.root_files {
        if ui.link(file.name.as_str()).clicked() {
            *selected = Some(file.path.clone());
        }
    }
}

fn toc_entries(ui: &mut Ui, entries: &[TocEntry], selected: &mut Option<Vec<String>>) {
    for entry in entries {
        match entry {
            TocEntry::Folder(folder) => {
                CollapsingHeader::new(format!("📁 {}", folder.name))
                    .id_salt(folder.path.join("/"))
                    .default_open(true)
                    .show(ui, |ui| toc_entries(ui, &folder.entries, selected));
            }
            TocEntry::File(file) => {
                if ui.link(file.name.as_str()).clicked() {
                    *selected = Some(file.path.clone());
                }
            }
        }
    }
}
