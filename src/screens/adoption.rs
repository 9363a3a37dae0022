use std::path::Path;
use std::time::Duration;

use eframe::egui::{self, pos2, Color32, CornerRadius, FontId, Rect, Stroke, StrokeKind};

use super::{AppEvent, Dialog, Route};
use crate::assets;
use crate::forms::adoption::{
    self, AdoptionCanvas, AdoptionField, CanvasButton, CanvasElement, BLINK_INTERVAL, CANVAS_SIZE,
};

const HEADER: Color32 = Color32::from_rgb(0x34, 0x3a, 0x40);
const BACK: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);
const SUBMIT: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45);
const UPLOAD: Color32 = Color32::from_rgb(0x6c, 0x75, 0x7d);
const SECTION_FILL: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
const SECTION_BORDER: Color32 = Color32::from_rgb(0xe9, 0xec, 0xef);
const LABEL: Color32 = Color32::from_rgb(0x6c, 0x75, 0x7d);
const INPUT_TEXT: Color32 = Color32::from_rgb(0x49, 0x50, 0x57);
const ACTIVE_BORDER: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff);
const IDLE_BORDER: Color32 = Color32::from_rgb(0xce, 0xd4, 0xda);
const PLACEHOLDER: Color32 = Color32::from_rgb(0xad, 0xb5, 0xbd);

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "png", "gif", "jpeg"];

/// Full-window adoption intake form drawn on a fixed canvas
pub struct AdoptionScreen {
    canvas: AdoptionCanvas,
}

impl AdoptionScreen {
    pub fn new(pet: Option<&str>) -> Self {
        let canvas = match pet {
            Some(name) => AdoptionCanvas::for_pet(name),
            None => AdoptionCanvas::new(),
        };
        Self { canvas }
    }

    /// Routes keyboard events to the focused input
    pub fn handle_input(&mut self, events: &[egui::Event]) {
        for event in events {
            match event {
                egui::Event::Text(text) => self.canvas.type_text(text),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.canvas.backspace(),
                _ => {}
            }
        }
    }

    /// Clicks at a canvas position; returns what the app should do about it
    pub fn click(&mut self, ctx: &egui::Context, point: egui::Pos2) -> Option<AppEvent> {
        match self.canvas.click(point)? {
            CanvasButton::Back => Some(back_event()),
            CanvasButton::Submit => Some(self.submit()),
            CanvasButton::Upload => self.upload(ctx),
        }
    }

    /// Logs the form contents
    pub fn submit(&self) -> AppEvent {
        match self.canvas.state().to_json() {
            Ok(json) => tracing::info!(form = %json, "adoption form submitted"),
            Err(err) => tracing::error!(error = %err, "failed to serialize adoption form"),
        }
        AppEvent::ShowDialog(Dialog::info(
            "Message",
            "Form data has been logged to the console.",
        ))
    }

    fn upload(&mut self, ctx: &egui::Context) -> Option<AppEvent> {
        let path = rfd::FileDialog::new()
            .add_filter("Image Files", &IMAGE_EXTENSIONS)
            .pick_file()?;
        self.load_pet_image(ctx, &path)
    }

    /// Shows the image at `path` in the photo area, or an error dialog
    fn load_pet_image(&mut self, ctx: &egui::Context, path: &Path) -> Option<AppEvent> {
        match assets::load_texture_from_path(ctx, path) {
            Ok(texture) => {
                tracing::info!(path = %path.display(), "pet image loaded");
                self.canvas.set_pet_image(texture);
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "pet image rejected");
                Some(AppEvent::ShowDialog(Dialog::error(
                    "Image Error",
                    "Error loading image.",
                )))
            }
        }
    }

    /// Draws the canvas; keyboard input is ignored while `accept_input` is false
    pub fn show(&mut self, ctx: &egui::Context, accept_input: bool, events: &mut Vec<AppEvent>) {
        let now = ctx.input(|i| i.time);
        self.canvas.tick(now);
        ctx.request_repaint_after(Duration::from_secs_f64(BLINK_INTERVAL));

        if accept_input {
            let input = ctx.input(|i| i.events.clone());
            self.handle_input(&input);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(Color32::WHITE))
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .id_salt("adoption_canvas")
                    .show(ui, |ui| {
                        let (rect, response) =
                            ui.allocate_exact_size(CANVAS_SIZE, egui::Sense::click());
                        let origin = rect.min.to_vec2();

                        if accept_input && response.clicked() {
                            if let Some(pos) = response.interact_pointer_pos() {
                                if let Some(event) = self.click(ctx, pos - origin) {
                                    events.push(event);
                                }
                            }
                        }

                        let painter = ui.painter_at(rect);
                        paint_canvas(&painter, origin, &self.canvas);
                    });
            });
    }
}

fn back_event() -> AppEvent {
    AppEvent::ShowDialog(Dialog::confirm(
        "Confirm Back",
        "Are you sure you want to go back? Any unsaved changes will be lost.",
        Route::Dashboard,
    ))
}

fn paint_canvas(painter: &egui::Painter, origin: egui::Vec2, canvas: &AdoptionCanvas) {
    let at = |r: Rect| r.translate(origin);

    painter.rect_filled(
        at(Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(CANVAS_SIZE.x, 70.0))),
        CornerRadius::ZERO,
        HEADER,
    );
    painter.text(
        pos2(30.0, 45.0) + origin,
        egui::Align2::LEFT_BOTTOM,
        "NEW ADOPTION",
        FontId::proportional(28.0),
        Color32::WHITE,
    );

    for (bounds, title) in adoption::sections() {
        let bounds = at(bounds);
        painter.rect(
            bounds,
            CornerRadius::same(8),
            SECTION_FILL,
            Stroke::new(1.0, SECTION_BORDER),
            StrokeKind::Inside,
        );
        if let Some(title) = title {
            painter.text(
                bounds.min + egui::vec2(20.0, 35.0),
                egui::Align2::LEFT_BOTTOM,
                title,
                FontId::proportional(22.0),
                HEADER,
            );
            let y = bounds.min.y + 45.0;
            painter.line_segment(
                [pos2(bounds.min.x + 20.0, y), pos2(bounds.max.x - 20.0, y)],
                Stroke::new(2.0, SECTION_BORDER),
            );
        }
    }

    paint_pet_image(painter, at(adoption::image_placeholder()), canvas);

    for (element, bounds) in canvas.elements() {
        let bounds = at(*bounds);
        match *element {
            CanvasElement::Button(button) => paint_button(painter, bounds, button),
            CanvasElement::Input(field) => paint_input(painter, bounds, field, canvas),
        }
    }
}

fn paint_pet_image(painter: &egui::Painter, bounds: Rect, canvas: &AdoptionCanvas) {
    match canvas.pet_image() {
        Some(texture) => {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), bounds, uv, Color32::WHITE);
        }
        None => {
            painter.text(
                bounds.center(),
                egui::Align2::CENTER_CENTER,
                "🐕",
                FontId::proportional(80.0),
                PLACEHOLDER,
            );
        }
    }

    let outline = [
        bounds.left_top(),
        bounds.right_top(),
        bounds.right_bottom(),
        bounds.left_bottom(),
        bounds.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(
        &outline,
        Stroke::new(1.0, PLACEHOLDER),
        6.0,
        6.0,
    ));
}

fn paint_button(painter: &egui::Painter, bounds: Rect, button: CanvasButton) {
    let (text, fill) = match button {
        CanvasButton::Back => ("BACK", BACK),
        CanvasButton::Submit => ("SUBMIT", SUBMIT),
        CanvasButton::Upload => ("UPLOAD IMAGE", UPLOAD),
    };
    painter.rect_filled(bounds, CornerRadius::same(5), fill);
    painter.text(
        bounds.center(),
        egui::Align2::CENTER_CENTER,
        text,
        FontId::proportional(16.0),
        Color32::WHITE,
    );
}

fn paint_input(painter: &egui::Painter, bounds: Rect, field: AdoptionField, canvas: &AdoptionCanvas) {
    painter.text(
        pos2(bounds.min.x, bounds.min.y - 8.0),
        egui::Align2::LEFT_BOTTOM,
        field.label(),
        FontId::proportional(14.0),
        LABEL,
    );

    let active = canvas.active() == Some(field);
    let stroke = if active {
        Stroke::new(2.0, ACTIVE_BORDER)
    } else {
        Stroke::new(1.0, IDLE_BORDER)
    };
    painter.rect(
        bounds,
        CornerRadius::same(5),
        Color32::WHITE,
        stroke,
        StrokeKind::Inside,
    );

    let text_rect = adoption::text_clip_rect(bounds);
    let galley = painter.layout_no_wrap(
        canvas.value(field).to_owned(),
        FontId::proportional(16.0),
        INPUT_TEXT,
    );
    let text_width = galley.size().x;
    let text_pos = pos2(text_rect.min.x, bounds.center().y - galley.size().y / 2.0);
    painter
        .with_clip_rect(text_rect.intersect(painter.clip_rect()))
        .galley(text_pos, galley, INPUT_TEXT);

    if active && canvas.caret_shown() {
        let x = adoption::caret_x(bounds, text_width);
        painter.line_segment(
            [pos2(x, bounds.min.y + 8.0), pos2(x, bounds.max.y - 8.0)],
            Stroke::new(1.0, Color32::BLACK),
        );
    }
}
