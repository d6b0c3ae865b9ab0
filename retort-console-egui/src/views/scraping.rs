//! Placeholder panels for the scraping subsystem's screens.
//!
//! The configurator, selector library, and history screens are owned by the
//! scraping subsystem; the console only routes to them.

use eframe::egui;

pub fn ui(ui: &mut egui::Ui, title: &str) {
    ui.heading(title);
    ui.label("This screen is provided by the scraping subsystem.");
}
