use eframe::egui::Color32;
use std::fmt;
use std::str::FromStr;

use crate::assets::AssetId;

/// Adoption status of a listed pet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetStatus {
    Available,
    Adopted,
    InFoster,
}

impl PetStatus {
    /// Label shown on the pet card
    pub fn label(self) -> &'static str {
        match self {
            PetStatus::Available => "Available",
            PetStatus::Adopted => "Adopted",
            PetStatus::InFoster => "In Foster",
        }
    }

    /// Colour of the status label
    pub fn color(self) -> Color32 {
        match self {
            PetStatus::Available => Color32::from_rgb(40, 167, 69),
            PetStatus::Adopted => Color32::from_rgb(220, 53, 69),
            PetStatus::InFoster => Color32::from_rgb(255, 193, 7),
        }
    }

    /// Whether the pet can still be taken through the adoption form
    pub fn is_adoptable(self) -> bool {
        !matches!(self, PetStatus::Adopted)
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(PetStatus::Available),
            "adopted" => Ok(PetStatus::Adopted),
            "in foster" => Ok(PetStatus::InFoster),
            other => Err(format!("unknown pet status: {}", other)),
        }
    }
}

/// A pet shown in the management grid
#[derive(Debug, Clone, PartialEq)]
pub struct PetRecord {
    pub name: &'static str,
    pub status: PetStatus,
    pub image: AssetId,
}

impl PetRecord {
    const fn new(name: &'static str, status: PetStatus) -> Self {
        Self {
            name,
            status,
            image: AssetId::Dog,
        }
    }
}

/// The fixed list of pets shown in the grid
pub fn sample_pets() -> Vec<PetRecord> {
    use PetStatus::*;

    vec![
        PetRecord::new("Paul", Available),
        PetRecord::new("Lucy", Adopted),
        PetRecord::new("Max", Available),
        PetRecord::new("Daisy", Available),
        PetRecord::new("Charlie", InFoster),
        PetRecord::new("Sadie", Available),
        PetRecord::new("Rocky", Adopted),
        PetRecord::new("Molly", Available),
        PetRecord::new("Zoe", Available),
    ]
}
