use chrono::NaiveTime;
use eframe::egui::{self, RichText};

use super::about;
use super::pets;
use super::vet::VetPanel;
use super::{AppEvent, Dialog, Route};
use crate::assets::{AssetId, AssetStore};
use crate::pets::{sample_pets, PetRecord};
use crate::ui::{self, style, Fallback};

/// Card shown in the main area of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Paws,
    Vet,
    Support,
    Contact,
    About,
}

impl DashboardPanel {
    pub const ALL: [DashboardPanel; 5] = [
        DashboardPanel::Paws,
        DashboardPanel::Vet,
        DashboardPanel::Support,
        DashboardPanel::Contact,
        DashboardPanel::About,
    ];

    /// Sidebar button caption
    pub fn caption(self) -> &'static str {
        match self {
            DashboardPanel::Paws => "🐾 Paw",
            DashboardPanel::Vet => "📜 Vet",
            DashboardPanel::Support => "🛠️ Support",
            DashboardPanel::Contact => "📞 Contact",
            DashboardPanel::About => "About Us !",
        }
    }
}

/// Dashboard shell: sidebar, header and the selected panel
pub struct DashboardScreen {
    panel: DashboardPanel,
    search: String,
    filter: String,
    pets: Vec<PetRecord>,
    vet: VetPanel,
}

impl DashboardScreen {
    pub fn new(now: NaiveTime) -> Self {
        Self {
            panel: DashboardPanel::Paws,
            search: String::new(),
            filter: String::new(),
            pets: sample_pets(),
            vet: VetPanel::new(now),
        }
    }

    pub fn select(&mut self, panel: DashboardPanel) {
        if self.panel != panel {
            tracing::debug!(?panel, "dashboard panel selected");
        }
        self.panel = panel;
    }

    /// Pets currently shown in the grid
    pub fn visible_pets(&self) -> Vec<&PetRecord> {
        pets::filter_pets(&self.pets, &self.filter)
    }

    /// Applies the header search query to the pet grid
    ///
    /// A blank query clears the filter. A query matching no pet leaves the
    /// grid as it was and returns a dialog for the user.
    pub fn apply_search(&mut self, query: &str) -> Option<AppEvent> {
        let query = query.trim();
        if query.is_empty() {
            self.filter.clear();
            return None;
        }

        if pets::filter_pets(&self.pets, query).is_empty() {
            tracing::debug!(query, "search matched no pets");
            return Some(AppEvent::ShowDialog(Dialog::info(
                "Search",
                format!("No pets match \"{}\".", query),
            )));
        }

        self.filter = query.to_string();
        self.select(DashboardPanel::Paws);
        None
    }

    pub fn show(&mut self, ctx: &egui::Context, assets: &AssetStore, events: &mut Vec<AppEvent>) {
        egui::SidePanel::left("sidebar")
            .exact_width(250.0)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(style::SIDEBAR)
                    .inner_margin(egui::Margin::symmetric(20, 30)),
            )
            .show(ctx, |ui| self.sidebar(ui, assets));

        egui::TopBottomPanel::top("header")
            .exact_height(60.0)
            .frame(
                egui::Frame::new()
                    .fill(style::HEADER)
                    .inner_margin(egui::Margin::symmetric(20, 12))
                    .stroke(egui::Stroke::new(1.0, style::BORDER)),
            )
            .show(ctx, |ui| self.header(ui, events));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(style::MAIN_BACKGROUND)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| match self.panel {
                DashboardPanel::Paws => pets::show_grid(ui, &self.visible_pets(), assets, events),
                DashboardPanel::Vet => self.vet.show(ui, events),
                DashboardPanel::Support => placeholder(ui, "Support Center"),
                DashboardPanel::Contact => placeholder(ui, "Contact Us"),
                DashboardPanel::About => about::show_about(ui, assets),
            });
    }

    fn sidebar(&mut self, ui: &mut egui::Ui, assets: &AssetStore) {
        ui.vertical_centered(|ui| {
            ui::asset_image(
                ui,
                assets,
                AssetId::Logo,
                egui::vec2(120.0, 120.0),
                0,
                Fallback {
                    text: "PawTrack Logo",
                    size: 24.0,
                    color: style::SIDEBAR_TEXT,
                },
            );
        });
        ui.add_space(40.0);

        for panel in DashboardPanel::ALL {
            let button = egui::Button::new(
                RichText::new(panel.caption())
                    .size(18.0)
                    .color(style::SIDEBAR_TEXT),
            )
            .fill(style::SIDEBAR_BUTTON)
            .min_size(egui::vec2(ui.available_width(), 50.0));

            if ui.add(button).clicked() {
                self.select(panel);
            }
            ui.add_space(10.0);
        }
    }

    fn header(&mut self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("🔍").size(16.0));
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search)
                    .hint_text("Search paws, licenses, or contacts...")
                    .desired_width(300.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                let query = self.search.clone();
                if let Some(event) = self.apply_search(&query) {
                    events.push(event);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui::rounded_button(
                    ui,
                    "🚪 Logout",
                    style::LOGOUT,
                    style::RED_HOVER,
                    egui::vec2(100.0, 35.0),
                )
                .clicked()
                {
                    events.push(AppEvent::ShowDialog(Dialog::confirm(
                        "Confirm Logout",
                        "Are you sure you want to logout?",
                        Route::Login,
                    )));
                }
            });
        });
    }
}

fn placeholder(ui: &mut egui::Ui, title: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new(title)
                .strong()
                .size(32.0)
                .color(style::DARK_TEXT),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> DashboardScreen {
        DashboardScreen::new(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
    }

    #[test]
    fn test_starts_on_paws_with_every_pet() {
        let screen = dashboard();
        assert_eq!(screen.panel, DashboardPanel::Paws);
        assert_eq!(screen.visible_pets().len(), 9);
    }

    #[test]
    fn test_search_filters_and_switches_panel() {
        let mut screen = dashboard();
        screen.select(DashboardPanel::Vet);

        assert_eq!(screen.apply_search("  lu "), None);
        assert_eq!(screen.panel, DashboardPanel::Paws);
        assert_eq!(screen.filter, "lu");
        let names: Vec<_> = screen.visible_pets().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Lucy"]);

        assert_eq!(screen.apply_search(""), None);
        assert_eq!(screen.visible_pets().len(), 9);
    }

    #[test]
    fn test_search_without_match_keeps_grid() {
        let mut screen = dashboard();
        screen.apply_search("max");
        screen.select(DashboardPanel::Contact);

        let event = screen.apply_search("Garfield");
        assert_eq!(
            event,
            Some(AppEvent::ShowDialog(Dialog::info(
                "Search",
                "No pets match \"Garfield\"."
            )))
        );
        assert_eq!(screen.filter, "max");
        assert_eq!(screen.panel, DashboardPanel::Contact);
    }

    #[test]
    fn test_sidebar_captions() {
        let captions: Vec<_> = DashboardPanel::ALL.iter().map(|p| p.caption()).collect();
        assert_eq!(
            captions,
            vec!["🐾 Paw", "📜 Vet", "🛠️ Support", "📞 Contact", "About Us !"]
        );
    }

    #[test]
    fn test_every_panel_renders_headless() {
        let ctx = egui::Context::default();
        let assets = AssetStore::new("does-not-exist");
        let mut screen = dashboard();
        let mut events = Vec::new();

        for panel in DashboardPanel::ALL {
            screen.select(panel);
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                screen.show(ctx, &assets, &mut events);
            });
        }
        assert!(events.is_empty());
    }
}
