use eframe::egui::{self, Color32, RichText};

use super::{AppEvent, Dialog, Route};
use crate::assets::AssetStore;
use crate::pets::PetRecord;
use crate::ui::{self, style, Fallback};

const COLUMNS: usize = 3;
const CARD_GAP: f32 = 20.0;
const IMAGE_SIZE: egui::Vec2 = egui::vec2(250.0, 200.0);

/// Pets whose name contains `query`, ignoring case; a blank query keeps all
pub fn filter_pets<'a>(pets: &'a [PetRecord], query: &str) -> Vec<&'a PetRecord> {
    let query = query.trim().to_lowercase();
    pets.iter()
        .filter(|pet| query.is_empty() || pet.name.to_lowercase().contains(&query))
        .collect()
}

/// What pressing "Adopt" on a card does
pub fn adopt_event(pet: &PetRecord) -> AppEvent {
    if pet.status.is_adoptable() {
        AppEvent::Navigate(Route::Adoption {
            pet: Some(pet.name.to_string()),
        })
    } else {
        AppEvent::ShowDialog(Dialog::info(
            "Adopt",
            format!("{} has already been adopted.", pet.name),
        ))
    }
}

/// Draws the pet cards in rows of three
pub fn show_grid(
    ui: &mut egui::Ui,
    pets: &[&PetRecord],
    assets: &AssetStore,
    events: &mut Vec<AppEvent>,
) {
    egui::ScrollArea::vertical()
        .id_salt("pet_grid")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("pet_cards")
                .spacing(egui::vec2(CARD_GAP, CARD_GAP))
                .show(ui, |ui| {
                    for (i, pet) in pets.iter().enumerate() {
                        pet_card(ui, pet, assets, events);
                        if (i + 1) % COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}

fn pet_card(ui: &mut egui::Ui, pet: &PetRecord, assets: &AssetStore, events: &mut Vec<AppEvent>) {
    ui::rounded_panel(Color32::WHITE, 15).show(ui, |ui| {
        ui.set_width(IMAGE_SIZE.x);
        ui.vertical_centered(|ui| {
            ui::asset_image(
                ui,
                assets,
                pet.image,
                IMAGE_SIZE,
                15,
                Fallback::glyph("🐾", 100.0),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(pet.name)
                    .strong()
                    .size(20.0)
                    .color(style::DARK_TEXT),
            );
            ui.label(
                RichText::new(pet.status.label())
                    .italics()
                    .color(pet.status.color()),
            );
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let size = egui::vec2(110.0, 34.0);
                if ui::rounded_button(ui, "View", style::SLATE, style::SLATE_HOVER, size).clicked() {
                    events.push(AppEvent::ShowDialog(Dialog::info(
                        "View",
                        format!("Displaying details for {}", pet.name),
                    )));
                }
                if ui::rounded_button(ui, "Adopt", style::TEAL, style::SLATE_HOVER, size).clicked() {
                    tracing::debug!(pet = pet.name, "adopt pressed");
                    events.push(adopt_event(pet));
                }
            });
        });
    });
}
