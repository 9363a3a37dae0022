use eframe::egui::{self, Color32, RichText};

use super::{AppEvent, Dialog, Route};
use crate::assets::{AssetId, AssetStore};
use crate::ui::{self, style, Fallback};
use crate::validation;

const DESCRIPTION: &str = "The PawPatrol System is a digital platform designed to help abandoned and \
surrendered pets find new, loving homes. It connects individuals who can no longer care for their \
pets with responsible adopters who are ready to welcome them as part of their family. Through the \
system, users can view available pets, learn about their background and needs, and apply for adoption.";

/// Login form state
#[derive(Debug, Default)]
pub struct LoginScreen {
    username: String,
    password: String,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the credentials and reports the outcome
    pub fn submit(&self, events: &mut Vec<AppEvent>) {
        match validation::validate_login(&self.username, &self.password) {
            Ok(()) => {
                tracing::info!(username = self.username.trim(), "signed in");
                events.push(AppEvent::Navigate(Route::Dashboard));
            }
            Err(message) => {
                events.push(AppEvent::ShowDialog(Dialog::error("Login Error", message)));
            }
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, assets: &AssetStore, events: &mut Vec<AppEvent>) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(style::SLATE))
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    columns[0].vertical_centered(|ui| {
                        ui.add_space(30.0);
                        self.login_card(ui, assets, events);
                    });
                    columns[1].vertical_centered(|ui| {
                        ui.add_space(30.0);
                        info_card(ui, assets);
                    });
                });
            });
    }

    fn login_card(&mut self, ui: &mut egui::Ui, assets: &AssetStore, events: &mut Vec<AppEvent>) {
        ui::rounded_panel(Color32::WHITE, 40).show(ui, |ui| {
            ui.set_width(330.0);
            ui.set_min_height(450.0);

            ui.vertical_centered(|ui| {
                ui::asset_image(
                    ui,
                    assets,
                    AssetId::Logo,
                    egui::vec2(150.0, 150.0),
                    30,
                    Fallback::text("Image not found"),
                );
            });
            ui.add_space(14.0);

            ui::field_caption(ui, "USERNAME:", style::TEXT);
            ui::pill_input(ui, &mut self.username, "Enter your username", false, style::INPUT_FILL);

            ui::field_caption(ui, "PASSWORD:", style::TEXT);
            let password = ui::pill_input(
                ui,
                &mut self.password,
                "Enter your password",
                true,
                style::INPUT_FILL,
            );
            let enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(14.0);
            let width = ui.available_width();
            let login = ui::rounded_button(
                ui,
                "LOGIN",
                style::SLATE,
                style::SLATE_HOVER,
                egui::vec2(width, 45.0),
            );
            if login.clicked() || enter {
                self.submit(events);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.link(RichText::new("CREATE ACCOUNT").size(12.0)).clicked() {
                    events.push(AppEvent::Navigate(Route::CreateAccount));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.link(RichText::new("FORGOT PASSWORD").size(12.0)).clicked() {
                        events.push(AppEvent::ShowDialog(Dialog::info(
                            "Feature Not Available",
                            "Forgot password functionality not implemented yet.",
                        )));
                    }
                });
            });

            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("WATERMARK").size(10.0).color(style::PLACEHOLDER));
            });
        });
    }
}

fn info_card(ui: &mut egui::Ui, assets: &AssetStore) {
    ui::rounded_panel(Color32::WHITE, 40).show(ui, |ui| {
        ui.set_width(330.0);
        ui.set_min_height(450.0);

        ui::asset_image(
            ui,
            assets,
            AssetId::Dog,
            egui::vec2(330.0, 220.0),
            20,
            Fallback::text("Image not found"),
        );
        ui.add_space(10.0);
        ui.label(RichText::new("Description:").strong().size(14.0).color(style::TEXT));
        ui.label(RichText::new(DESCRIPTION).size(12.0).color(style::TEXT));
    });
}
