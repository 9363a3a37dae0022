use eframe::egui::{self, Color32, CornerRadius, FontId, Margin, Sense};

use crate::assets::{self, AssetId, AssetStore};

/// What to draw in place of an image that failed to load
pub struct Fallback<'a> {
    pub text: &'a str,
    pub size: f32,
    pub color: Color32,
}

impl<'a> Fallback<'a> {
    pub fn text(text: &'a str) -> Self {
        Self {
            text,
            size: 14.0,
            color: style::PLACEHOLDER,
        }
    }

    pub fn glyph(text: &'a str, size: f32) -> Self {
        Self {
            text,
            size,
            color: Color32::from_rgb(230, 230, 230),
        }
    }
}

/// A filled frame with rounded corners
pub fn rounded_panel(fill: Color32, radius: u8) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(radius))
        .inner_margin(Margin::same(24))
}

/// A custom-painted button that darkens on hover
///
/// # Arguments
/// * `ui` - The egui UI to render to
/// * `text` - Button caption
/// * `fill` - Resting background colour
/// * `hover_fill` - Background colour while hovered
/// * `size` - Exact size of the button
pub fn rounded_button(
    ui: &mut egui::Ui,
    text: &str,
    fill: Color32,
    hover_fill: Color32,
    size: egui::Vec2,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let color = if response.hovered() { hover_fill } else { fill };
        let painter = ui.painter();
        painter.rect_filled(rect, CornerRadius::same(10), color);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            FontId::proportional(14.0),
            Color32::WHITE,
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// A pill-shaped single line input with hint text
pub fn pill_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    password: bool,
    fill: Color32,
) -> egui::Response {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(22))
        .inner_margin(Margin::symmetric(18, 12))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(egui::RichText::new(hint).italics().color(style::PLACEHOLDER))
                    .password(password)
                    .frame(false)
                    .text_color(style::INPUT_TEXT)
                    .font(FontId::proportional(14.0))
                    .desired_width(f32::INFINITY),
            )
        })
        .inner
}

/// Draws a texture scaled to fit `size` with rounded corners
///
/// When the texture is missing the fallback text is centered in the same
/// area instead.
pub fn rounded_image(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    size: egui::Vec2,
    radius: u8,
    fallback: Fallback<'_>,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    match texture {
        Some(texture) => {
            if let Some(fitted) = assets::fit_contain(texture.size_vec2(), rect) {
                egui::Image::from_texture(texture)
                    .corner_radius(CornerRadius::same(radius))
                    .paint_at(ui, fitted);
            }
        }
        None => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                fallback.text,
                FontId::proportional(fallback.size),
                fallback.color,
            );
        }
    }
    response
}

/// [`rounded_image`] for a bundled asset; hovering a missing one shows why
pub fn asset_image(
    ui: &mut egui::Ui,
    assets: &AssetStore,
    id: AssetId,
    size: egui::Vec2,
    radius: u8,
    fallback: Fallback<'_>,
) -> egui::Response {
    let response = rounded_image(ui, assets.texture(id), size, radius, fallback);
    match assets.missing_reason(id) {
        Some(reason) => response.on_hover_text(reason),
        None => response,
    }
}

/// Inline validation message; reserves its line even when empty
pub fn error_label(ui: &mut egui::Ui, message: Option<&str>) {
    ui.label(
        egui::RichText::new(message.unwrap_or(" "))
            .size(12.0)
            .color(style::ERROR),
    );
}

/// Bold uppercase caption above an input
pub fn field_caption(ui: &mut egui::Ui, text: &str, color: Color32) {
    ui.label(egui::RichText::new(text).strong().size(12.0).color(color));
}

/// Colours and global styling
pub mod style {
    use eframe::egui::{self, Color32};

    pub const SLATE: Color32 = Color32::from_rgb(30, 41, 59);
    pub const SLATE_HOVER: Color32 = Color32::from_rgb(55, 65, 81);
    pub const TEXT: Color32 = Color32::from_rgb(55, 65, 81);
    pub const LIGHT_TEXT: Color32 = Color32::from_rgb(209, 213, 219);
    pub const PLACEHOLDER: Color32 = Color32::from_rgb(156, 163, 175);
    pub const INPUT_FILL: Color32 = Color32::from_rgb(229, 231, 235);
    pub const INPUT_TEXT: Color32 = Color32::from_rgb(30, 41, 59);
    pub const GLASS: Color32 = Color32::from_rgba_premultiplied(15, 15, 15, 15);

    pub const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
    pub const GREEN_HOVER: Color32 = Color32::from_rgb(21, 128, 61);
    pub const RED: Color32 = Color32::from_rgb(220, 38, 38);
    pub const RED_HOVER: Color32 = Color32::from_rgb(185, 28, 28);
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
    pub const SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);

    pub const SIDEBAR: Color32 = Color32::from_rgb(34, 40, 49);
    pub const SIDEBAR_BUTTON: Color32 = Color32::from_rgb(57, 62, 70);
    pub const SIDEBAR_TEXT: Color32 = Color32::from_rgb(238, 238, 238);
    pub const MAIN_BACKGROUND: Color32 = Color32::from_rgb(245, 245, 245);
    pub const HEADER: Color32 = Color32::from_rgb(248, 249, 250);
    pub const LOGOUT: Color32 = Color32::from_rgb(220, 53, 69);
    pub const TEAL: Color32 = Color32::from_rgb(23, 162, 184);

    pub const SECTION: Color32 = Color32::from_rgb(243, 244, 246);
    pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
    pub const DARK_TEXT: Color32 = Color32::from_rgb(17, 24, 39);
    pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
    pub const GRAY_BUTTON: Color32 = Color32::from_rgb(209, 213, 219);

    pub const ABOUT_BACKGROUND: Color32 = Color32::from_rgb(128, 128, 128);

    /// Applies the light theme and spacing used by every screen
    ///
    /// # Arguments
    /// * `ctx` - The egui context
    pub fn apply_style(ctx: &egui::Context) {
        ctx.set_theme(egui::Theme::Light);
        ctx.style_mut_of(egui::Theme::Light, |style| {
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
            style.spacing.button_padding = egui::vec2(10.0, 6.0);
            style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(220, 220, 250);
            style.visuals.widgets.active.bg_fill = Color32::from_rgb(200, 200, 250);
        });
    }
}
