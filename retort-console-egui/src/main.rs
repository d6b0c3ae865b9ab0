//! retort console - routed, auth-gated admin shell around the
//! response-format editor.
//!
//! Every frame resolves the router's current path through the route table
//! and mounts the view the table selects; redirects apply replace-style so
//! a bounced-from path never lands in the back stack.

mod config;
mod router;
mod session;
mod views;

use config::ConsoleConfig;
use eframe::egui;
use retort_editor::Editor;
use retort_routes::{Resolution, RouteTable, View};
use router::Router;
use session::Session;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ConsoleConfig::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("retort - response format console")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "retort console",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if config.theme_dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(ConsoleApp::new()) as Box<dyn eframe::App>)
        }),
    )
}

/// Top-level console state: route table, navigation, session, and the
/// mounted editor.
struct ConsoleApp {
    table: RouteTable,
    router: Router,
    session: Session,
    editor: Editor,
    login: views::login::LoginForm,
}

impl ConsoleApp {
    fn new() -> Self {
        Self {
            table: RouteTable::standard(),
            router: Router::new(),
            session: Session::new(),
            editor: Editor::new(),
            login: views::login::LoginForm::default(),
        }
    }

    /// Resolve the current path to a terminal view, applying each redirect
    /// to the router replace-style.
    fn settle(&mut self) -> View {
        const MAX_HOPS: usize = 8;

        for _ in 0..MAX_HOPS {
            match self.table.resolve(self.router.current(), &self.session) {
                Some(Resolution::Render(view)) => return view,
                Some(Resolution::Redirect(to)) => self.router.replace(to),
                None => break,
            }
        }
        self.router.replace("/");
        View::Home
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.settle();

        egui::TopBottomPanel::top("console-nav").show(ctx, |ui| {
            views::nav_bar(ui, &mut self.router, &mut self.session);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match view {
                View::Home => views::home::ui(ui, &mut self.router),
                View::Login => {
                    views::login::ui(ui, &mut self.login, &mut self.session, &mut self.router)
                }
                View::Dashboard => {
                    views::dashboard::ui(ui, &mut self.router, &self.session, &mut self.editor)
                }
                View::ScrapingConfigurator => views::scraping::ui(ui, "Scraping Configurator"),
                View::SavedSelectors => views::scraping::ui(ui, "Saved Selectors"),
                View::ScrapingHistory => views::scraping::ui(ui, "Scraping History"),
            });
        });
    }
}
