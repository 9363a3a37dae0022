use eframe::egui::{self, Color32, RichText};

use crate::assets::{AssetId, AssetStore};
use crate::ui::{self, style, Fallback};

const PORTRAIT_SIZE: egui::Vec2 = egui::vec2(180.0, 180.0);

/// One person on the About Us page
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub bio: &'static str,
    pub portrait: AssetId,
    /// Portrait on the right instead of the left
    pub reversed: bool,
}

pub fn team() -> [TeamMember; 5] {
    const fn member(name: &'static str, bio: &'static str, reversed: bool) -> TeamMember {
        TeamMember {
            name,
            bio,
            portrait: AssetId::TeamPortrait,
            reversed,
        }
    }

    [
        member(
            "JULIAN AGUSTINO",
            "Julian is a passionate software developer with expertise in Java and UI design. He \
             loves creating user-friendly applications and has a keen eye for detail. His \
             dedication to clean code and excellent user experience makes him a valuable team member.",
            false,
        ),
        member(
            "RODMARK BAUTISTA",
            "Rodmark is a skilled developer specializing in backend systems and database \
             management. He has extensive experience in building robust and scalable applications. \
             His problem-solving skills and technical expertise drive innovative solutions.",
            true,
        ),
        member(
            "MARLON LOZANO",
            "Maria is a creative designer and front-end developer who brings visual concepts to \
             life. She specializes in user interface design and has a talent for creating engaging \
             user experiences that are both beautiful and functional.",
            false,
        ),
        member(
            "PAUL PASUMALA",
            "Carlos is a full-stack developer with strong leadership skills. He has experience in \
             project management and team coordination. His ability to bridge technical and \
             business requirements makes him an excellent team lead.",
            true,
        ),
        member(
            "ACZEL DAYRIT",
            "Ana is a quality assurance specialist who ensures our applications meet the highest \
             standards. Her attention to detail and systematic testing approach helps deliver \
             bug-free software that users can rely on.",
            false,
        ),
    ]
}

pub fn show_about(ui: &mut egui::Ui, assets: &AssetStore) {
    egui::Frame::new()
        .fill(style::ABOUT_BACKGROUND)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("about_us")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for member in team() {
                        person_panel(ui, &member, assets);
                        ui.add_space(20.0);
                    }
                });
        });
}

fn person_panel(ui: &mut egui::Ui, member: &TeamMember, assets: &AssetStore) {
    let layout = if member.reversed {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    };

    ui.with_layout(layout, |ui| {
        ui::asset_image(
            ui,
            assets,
            member.portrait,
            PORTRAIT_SIZE,
            10,
            Fallback::text("Image not found at path"),
        );
        ui.add_space(20.0);
        ui.vertical(|ui| {
            ui.set_max_width(ui.available_width().min(700.0));
            ui.label(
                RichText::new(member.name)
                    .strong()
                    .size(22.0)
                    .color(Color32::WHITE),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(member.bio).size(14.0).color(Color32::WHITE));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_alternates_sides() {
        let team = team();
        let names: Vec<_> = team.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "JULIAN AGUSTINO",
                "RODMARK BAUTISTA",
                "MARLON LOZANO",
                "PAUL PASUMALA",
                "ACZEL DAYRIT"
            ]
        );
        let sides: Vec<_> = team.iter().map(|m| m.reversed).collect();
        assert_eq!(sides, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_bios_are_single_spaced() {
        for member in team() {
            assert!(!member.bio.contains("  "), "{}", member.name);
            assert!(member.bio.ends_with('.'));
        }
    }

    #[test]
    fn test_renders_headless() {
        let ctx = egui::Context::default();
        let assets = AssetStore::new("does-not-exist");
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| show_about(ui, &assets));
        });
    }
}
