//! Login screen.
//!
//! Presence-only check: any non-empty credentials open a session. The real
//! credential exchange is the authentication collaborator's job.

use eframe::egui;

use crate::{router::Router, session::Session};

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

pub fn ui(ui: &mut egui::Ui, form: &mut LoginForm, session: &mut Session, router: &mut Router) {
    ui.heading("Sign in");
    ui.add_space(8.0);

    ui.label("Username");
    ui.add(egui::TextEdit::singleline(&mut form.username).desired_width(240.0));
    ui.label("Password");
    ui.add(
        egui::TextEdit::singleline(&mut form.password)
            .password(true)
            .desired_width(240.0),
    );

    if let Some(error) = &form.error {
        ui.colored_label(egui::Color32::RED, format!("⚠ {error}"));
    }

    if ui.button("Sign in").clicked() {
        if form.username.is_empty() || form.password.is_empty() {
            form.error = Some("Username and password are required".to_string());
        } else {
            session.sign_in(form.username.clone());
            form.password.clear();
            form.error = None;
            router.replace("/admin/dashboard");
        }
    }
}
