use eframe::egui;

use crate::assets::AssetStore;
use crate::config::AppConfig;
use crate::screens::adoption::AdoptionScreen;
use crate::screens::create_account::CreateAccountScreen;
use crate::screens::dashboard::DashboardScreen;
use crate::screens::login::LoginScreen;
use crate::screens::{AppEvent, Dialog, DialogKind, Route};
use crate::ui::style;

/// The screen currently filling the window
enum Screen {
    Login(LoginScreen),
    CreateAccount(CreateAccountScreen),
    Dashboard(Box<DashboardScreen>),
    Adoption(AdoptionScreen),
}

/// How the user closed a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogChoice {
    Accept,
    Dismiss,
}

/// Main application state for PawTrack
pub struct PawTrackApp {
    config: AppConfig,
    assets: AssetStore,

    route: Route,
    screen: Screen,
    dialog: Option<Dialog>,

    // Window needs resizing/retitling for the current route
    viewport_dirty: bool,
    started: bool,
}

impl PawTrackApp {
    /// Creates the app on the login screen
    ///
    /// # Arguments
    /// * `config` - Loaded configuration
    pub fn new(config: AppConfig) -> Self {
        let assets = AssetStore::new(config.asset_dir.clone());
        Self {
            config,
            assets,
            route: Route::Login,
            screen: Screen::Login(LoginScreen::new()),
            dialog: None,
            viewport_dirty: false,
            started: false,
        }
    }

    /// Applies an event raised by a screen
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Navigate(route) => self.navigate(route),
            AppEvent::ShowDialog(dialog) => {
                tracing::debug!(title = %dialog.title, "dialog opened");
                self.dialog = Some(dialog);
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        tracing::info!(from = ?self.route, to = ?route, "navigating");

        self.screen = match &route {
            Route::Login => Screen::Login(LoginScreen::new()),
            Route::CreateAccount => {
                Screen::CreateAccount(CreateAccountScreen::new(self.config.username_min_length))
            }
            Route::Dashboard => {
                Screen::Dashboard(Box::new(DashboardScreen::new(chrono::Local::now().time())))
            }
            Route::Adoption { pet } => Screen::Adoption(AdoptionScreen::new(pet.as_deref())),
        };
        self.route = route;
        self.viewport_dirty = true;
    }

    fn resolve_dialog(&mut self, choice: DialogChoice) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        if let (DialogChoice::Accept, DialogKind::Confirm { on_yes }) = (choice, dialog.kind) {
            self.navigate(on_yes);
        }
    }

    /// Renders one frame
    ///
    /// # Arguments
    /// * `ctx` - The egui context
    pub fn render(&mut self, ctx: &egui::Context) {
        if !self.started {
            style::apply_style(ctx);
            self.started = true;
        }
        if !self.assets.is_loaded() {
            self.assets.load(ctx);
        }

        if self.viewport_dirty {
            let [width, height] = self.route.window_size();
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(width, height)));
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.route.title().to_string()));
            self.viewport_dirty = false;
        }

        let accept_input = self.dialog.is_none();
        let mut events = Vec::new();
        match &mut self.screen {
            Screen::Login(screen) => screen.show(ctx, &self.assets, &mut events),
            Screen::CreateAccount(screen) => screen.show(ctx, &self.assets, &mut events),
            Screen::Dashboard(screen) => screen.show(ctx, &self.assets, &mut events),
            Screen::Adoption(screen) => screen.show(ctx, accept_input, &mut events),
        }
        for event in events {
            self.handle_event(event);
        }

        if let Some(choice) = self.show_dialog(ctx) {
            self.resolve_dialog(choice);
        }
    }

    fn show_dialog(&self, ctx: &egui::Context) -> Option<DialogChoice> {
        let dialog = self.dialog.as_ref()?;
        let mut choice = None;

        let response = egui::Modal::new(egui::Id::new("paw_track_dialog")).show(ctx, |ui| {
            ui.set_width(340.0);
            let title = egui::RichText::new(&dialog.title).strong().size(18.0);
            let title = match dialog.kind {
                DialogKind::Error => title.color(style::RED),
                _ => title,
            };
            ui.label(title);
            ui.add_space(8.0);
            ui.label(&dialog.message);
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match dialog.kind {
                    DialogKind::Confirm { .. } => {
                        if ui.button("No").clicked() {
                            choice = Some(DialogChoice::Dismiss);
                        }
                        if ui.button("Yes").clicked() {
                            choice = Some(DialogChoice::Accept);
                        }
                    }
                    DialogKind::Info | DialogKind::Error => {
                        if ui.button("OK").clicked() {
                            choice = Some(DialogChoice::Dismiss);
                        }
                    }
                }
            });
        });

        if choice.is_none() && response.should_close() {
            choice = Some(DialogChoice::Dismiss);
        }
        choice
    }
}

impl eframe::App for PawTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}
