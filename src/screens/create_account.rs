use eframe::egui::{self, RichText};

use super::{AppEvent, Route};
use crate::assets::{AssetId, AssetStore};
use crate::ui::{self, style, Fallback};
use crate::validation::{self, AccountErrors, AccountForm};

/// Seconds between a successful sign-up and the switch to the dashboard
pub const SUCCESS_DELAY: f64 = 2.0;

const ABOUT_TEXT: &str = "The PawPatrol System is a digital platform created to support the adoption \
of pets that have been abandoned or surrendered by their owners. Its main goal is to provide a safe \
and reliable way for these animals to find a new family that will love and care for them.";

const HOW_IT_WORKS: [(&str, &str); 5] = [
    (
        "Pet Registration",
        "Shelters, rescuers, or former owners can register pets in the system by providing details \
such as age, breed, health status, and personality.",
    ),
    (
        "Pet Listings",
        "All registered animals are displayed with photos and descriptions so adopters can easily browse.",
    ),
    (
        "Adoption Application",
        "Interested adopters can submit an adoption request directly through the system.",
    ),
    (
        "Screening Process",
        "The system ensures that pets are matched with responsible owners by checking applications.",
    ),
    (
        "Final Adoption",
        "Once approved, the adopter can officially welcome the pet into their home.",
    ),
];

/// Sign-up form with per-field validation
#[derive(Debug)]
pub struct CreateAccountScreen {
    form: AccountForm,
    errors: AccountErrors,
    success_at: Option<f64>,
    min_username_length: usize,
}

impl CreateAccountScreen {
    pub fn new(min_username_length: usize) -> Self {
        Self {
            form: AccountForm::default(),
            errors: AccountErrors::default(),
            success_at: None,
            min_username_length,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.success_at.is_some()
    }

    /// Validates every field at once; returns true when the account is accepted
    pub fn submit(&mut self, now: f64) -> bool {
        self.errors = validation::validate_account(&self.form, self.min_username_length);
        if !self.errors.is_empty() {
            tracing::debug!("account form rejected");
            self.success_at = None;
            return false;
        }

        tracing::info!(username = self.form.username.trim(), "account created");
        self.success_at = Some(now);
        true
    }

    /// Route to follow once the success message has been shown long enough
    pub fn pending_route(&self, now: f64) -> Option<Route> {
        match self.success_at {
            Some(at) if now - at >= SUCCESS_DELAY => Some(Route::Dashboard),
            _ => None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, assets: &AssetStore, events: &mut Vec<AppEvent>) {
        let now = ctx.input(|i| i.time);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(style::SLATE).inner_margin(egui::Margin::same(24)))
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    columns[0].vertical_centered(|ui| self.form_panel(ui, now, events));
                    columns[1].vertical(|ui| info_panel(ui, assets));
                });
            });

        if let Some(route) = self.pending_route(now) {
            events.push(AppEvent::Navigate(route));
        } else if self.succeeded() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn form_panel(&mut self, ui: &mut egui::Ui, now: f64, events: &mut Vec<AppEvent>) {
        ui::rounded_panel(style::GLASS, 32).show(ui, |ui| {
            ui.set_width(400.0);
            ui.set_min_height(570.0);

            ui.label(
                RichText::new("CREATE ACCOUNT")
                    .strong()
                    .size(22.0)
                    .color(egui::Color32::WHITE),
            );
            ui.add_space(8.0);

            let errors = self.errors.clone();
            let form = &mut self.form;
            labeled(ui, "FULL NAME:", &mut form.full_name, false, errors.full_name.as_deref());
            labeled(ui, "USERNAME:", &mut form.username, false, errors.username.as_deref());
            labeled(ui, "PASSWORD:", &mut form.password, true, errors.password.as_deref());
            labeled(
                ui,
                "REPEAT PASSWORD:",
                &mut form.repeat_password,
                true,
                errors.repeat_password.as_deref(),
            );
            labeled(
                ui,
                "CONTACT NUMBER:",
                &mut form.contact_number,
                false,
                errors.contact_number.as_deref(),
            );
            labeled(ui, "EMAIL:", &mut form.email, false, errors.email.as_deref());

            if self.succeeded() {
                ui.label(
                    RichText::new("Account created successfully!")
                        .strong()
                        .color(style::SUCCESS),
                );
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let size = egui::vec2(120.0, 40.0);
                if ui::rounded_button(ui, "SUBMIT", style::GREEN, style::GREEN_HOVER, size).clicked()
                    && !self.succeeded()
                {
                    self.submit(now);
                }
                if ui::rounded_button(ui, "BACK", style::RED, style::RED_HOVER, size).clicked() {
                    events.push(AppEvent::Navigate(Route::Login));
                }
            });
        });
    }
}

fn labeled(ui: &mut egui::Ui, caption: &str, value: &mut String, password: bool, error: Option<&str>) {
    ui::field_caption(ui, caption, style::LIGHT_TEXT);
    ui::pill_input(ui, value, "", password, style::INPUT_FILL);
    ui::error_label(ui, error);
}

fn info_panel(ui: &mut egui::Ui, assets: &AssetStore) {
    ui::rounded_panel(style::GLASS, 32).show(ui, |ui| {
        let width = ui.available_width();
        ui.set_width(width);
        ui::asset_image(
            ui,
            assets,
            AssetId::Dog,
            egui::vec2(width, 150.0),
            24,
            Fallback::text("Find a Friend"),
        );
        ui.add_space(16.0);
        ui.label(RichText::new(ABOUT_TEXT).size(14.0).color(style::LIGHT_TEXT));
    });

    ui.add_space(16.0);
    ui::rounded_panel(style::GLASS, 32).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new("How the System Works:")
                .strong()
                .size(20.0)
                .color(egui::Color32::WHITE),
        );
        for (n, (title, body)) in HOW_IT_WORKS.iter().enumerate() {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{}. {} - {}", n + 1, title, body))
                    .size(14.0)
                    .color(style::LIGHT_TEXT),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(screen: &mut CreateAccountScreen) {
        let form = &mut screen.form;
        form.full_name = "Paul Pasumala".to_string();
        form.username = "paul".to_string();
        form.password = "secret123".to_string();
        form.repeat_password = "secret123".to_string();
        form.contact_number = "09123456789".to_string();
        form.email = "paul@example.com".to_string();
    }

    #[test]
    fn test_empty_submit_flags_every_field() {
        let mut screen = CreateAccountScreen::new(3);
        assert!(!screen.submit(0.0));
        let errors = &screen.errors;
        assert!(errors.full_name.is_some());
        assert!(errors.username.is_some());
        assert!(errors.password.is_some());
        assert!(errors.contact_number.is_some());
        assert!(errors.email.is_some());
        assert_eq!(screen.pending_route(10.0), None);
    }

    #[test]
    fn test_success_waits_before_dashboard() {
        let mut screen = CreateAccountScreen::new(3);
        filled(&mut screen);
        assert!(screen.submit(5.0));
        assert!(screen.errors.is_empty());
        assert_eq!(screen.pending_route(6.5), None);
        assert_eq!(screen.pending_route(7.0), Some(Route::Dashboard));
    }

    #[test]
    fn test_min_username_length_is_configurable() {
        let mut screen = CreateAccountScreen::new(8);
        filled(&mut screen);
        assert!(!screen.submit(0.0));
        assert!(screen.errors.username.is_some());
    }

    #[test]
    fn test_fixing_errors_clears_them() {
        let mut screen = CreateAccountScreen::new(3);
        screen.submit(0.0);
        filled(&mut screen);
        assert!(screen.submit(1.0));
        assert_eq!(screen.errors, AccountErrors::default());
    }

    #[test]
    fn test_renders_headless() {
        let ctx = egui::Context::default();
        let assets = AssetStore::new("does-not-exist");
        let mut screen = CreateAccountScreen::new(3);
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            screen.show(ctx, &assets, &mut events)
        });
        assert!(events.is_empty());
    }
}
