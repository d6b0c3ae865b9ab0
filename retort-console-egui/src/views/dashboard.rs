//! Admin dashboard: scraping shortcuts plus the mounted format editor.

use eframe::egui;
use retort_editor::Editor;

use crate::{router::Router, session::Session, views::format_editor};

pub fn ui(ui: &mut egui::Ui, router: &mut Router, session: &Session, editor: &mut Editor) {
    ui.heading("Admin Dashboard");
    if let Some(name) = session.admin_name() {
        ui.label(format!("Welcome back, {name}."));
    }
    ui.horizontal(|ui| {
        if ui.button("Scraping configurator").clicked() {
            router.push("/admin/scraping/configurator");
        }
        if ui.button("Saved selectors").clicked() {
            router.push("/admin/scraping/selectors");
        }
        if ui.button("Scraping history").clicked() {
            router.push("/admin/scraping/history");
        }
    });
    ui.separator();

    format_editor::ui(ui, editor);
}
