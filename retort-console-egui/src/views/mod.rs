//! View panels, one module per routed screen.

pub mod dashboard;
pub mod format_editor;
pub mod home;
pub mod login;
pub mod scraping;

use eframe::egui;

use crate::{router::Router, session::Session};

/// Shared navigation strip: back, current path, quick links, session state.
pub fn nav_bar(ui: &mut egui::Ui, router: &mut Router, session: &mut Session) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(router.can_go_back(), egui::Button::new("←"))
            .clicked()
        {
            router.back();
        }
        ui.monospace(router.current().to_string());
        ui.separator();
        if ui.button("Home").clicked() {
            router.push("/");
        }
        if ui.button("Dashboard").clicked() {
            router.push("/admin/dashboard");
        }

        let admin = session.admin_name().map(str::to_string);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match admin {
                Some(name) => {
                    if ui.button("Sign out").clicked() {
                        session.sign_out();
                        router.replace("/");
                    }
                    ui.label(format!("signed in as {name}"));
                }
                None => {
                    ui.label("not signed in");
                }
            }
        });
    });
}
