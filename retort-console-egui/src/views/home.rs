//! Public landing screen.

use eframe::egui;

use crate::router::Router;

pub fn ui(ui: &mut egui::Ui, router: &mut Router) {
    ui.heading("retort");
    ui.label("Admin console for shaping the replies the chat assistant gives.");
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Open admin console").clicked() {
            router.push("/admin/dashboard");
        }
        if ui.button("Sign in").clicked() {
            router.push("/login");
        }
    });
}
