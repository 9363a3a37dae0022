//! Bundled image assets.
//!
//! Images are read from the configured asset directory and decoded in
//! parallel. A failed image is kept as a `Missing` slot with its reason so the
//! screens can draw placeholder text in its place.

use eframe::egui;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PawTrackError, Result};

/// Images the application knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Logo,
    Dog,
    TeamPortrait,
}

impl AssetId {
    pub const ALL: [AssetId; 3] = [AssetId::Logo, AssetId::Dog, AssetId::TeamPortrait];

    /// File name inside the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            AssetId::Logo => "PawTrack.png",
            AssetId::Dog => "DOG.png",
            AssetId::TeamPortrait => "team.jpeg",
        }
    }
}

/// Load state of a single asset
pub enum AssetSlot {
    Loaded(egui::TextureHandle),
    Missing(String),
}

/// Holds the textures for every bundled image
pub struct AssetStore {
    asset_dir: PathBuf,
    slots: HashMap<AssetId, AssetSlot>,
    loaded: bool,
}

impl AssetStore {
    /// Creates an empty store; nothing is read until [`AssetStore::load`]
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            slots: HashMap::new(),
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Decodes every asset and uploads the results as textures
    ///
    /// Decoding runs on the rayon pool; texture upload stays on the calling
    /// (UI) thread.
    pub fn load(&mut self, ctx: &egui::Context) {
        for (id, result) in decode_all(&self.asset_dir) {
            let slot = match result {
                Ok(image) => {
                    tracing::debug!(
                        asset = id.file_name(),
                        width = image.size[0],
                        height = image.size[1],
                        "image loaded"
                    );
                    AssetSlot::Loaded(ctx.load_texture(
                        id.file_name(),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    tracing::warn!(asset = id.file_name(), "could not load image: {}", e);
                    AssetSlot::Missing(e.to_string())
                }
            };
            self.slots.insert(id, slot);
        }
        self.loaded = true;
    }

    /// The texture for `id`, if it loaded
    pub fn texture(&self, id: AssetId) -> Option<&egui::TextureHandle> {
        match self.slots.get(&id) {
            Some(AssetSlot::Loaded(texture)) => Some(texture),
            _ => None,
        }
    }

    /// Why `id` failed to load, if it did
    pub fn missing_reason(&self, id: AssetId) -> Option<&str> {
        match self.slots.get(&id) {
            Some(AssetSlot::Missing(reason)) => Some(reason),
            _ => None,
        }
    }
}

/// Decodes every known asset in `dir` in parallel
pub fn decode_all(dir: &Path) -> Vec<(AssetId, Result<egui::ColorImage>)> {
    AssetId::ALL
        .as_slice()
        .par_iter()
        .map(|&id| (id, decode_image(&dir.join(id.file_name()))))
        .collect()
}

/// Reads and decodes a single image file into RGBA pixels
pub fn decode_image(path: &Path) -> Result<egui::ColorImage> {
    let bytes = fs::read(path).map_err(|source| PawTrackError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| PawTrackError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Decodes a user-picked image and uploads it as a texture
pub fn load_texture_from_path(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle> {
    let image = decode_image(path)?;
    let name = path.to_string_lossy().into_owned();
    Ok(ctx.load_texture(name, image, egui::TextureOptions::LINEAR))
}

/// Places an image inside `bounds` keeping its aspect ratio
///
/// The image is scaled to touch the bounds on one axis and centered on the
/// other. Returns `None` when either size is empty.
pub fn fit_contain(image_size: egui::Vec2, bounds: egui::Rect) -> Option<egui::Rect> {
    let (bw, bh) = (bounds.width(), bounds.height());
    if bw <= 0.0 || bh <= 0.0 || image_size.x <= 0.0 || image_size.y <= 0.0 {
        return None;
    }

    let image_aspect = image_size.x / image_size.y;
    let bounds_aspect = bw / bh;

    let size = if image_aspect > bounds_aspect {
        // Wider than the bounds: full width
        egui::vec2(bw, bw / image_aspect)
    } else {
        egui::vec2(bh * image_aspect, bh)
    };

    Some(egui::Rect::from_center_size(bounds.center(), size))
}
