use eframe::egui::{self, pos2, vec2, Pos2, Rect};

use super::FormState;

/// Size of the adoption canvas in points
pub const CANVAS_SIZE: egui::Vec2 = vec2(1200.0, 900.0);

/// Interval between cursor blink toggles, in seconds
pub const BLINK_INTERVAL: f64 = 0.5;

/// Text inputs on the adoption canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdoptionField {
    DogName,
    OwnerLastname,
    ContactNumber,
    OwnerAge,
    OwnerFirstname,
    OwnerMiddlename,
    OwnerSex,
    OwnerAddress,
    PetColor,
    VetInfo,
    PetAge,
    PetBreed,
    PetSex,
    ReasonForAdopt,
    PetStatus,
}

impl AdoptionField {
    pub const ALL: [AdoptionField; 15] = [
        AdoptionField::DogName,
        AdoptionField::OwnerLastname,
        AdoptionField::ContactNumber,
        AdoptionField::OwnerAge,
        AdoptionField::OwnerFirstname,
        AdoptionField::OwnerMiddlename,
        AdoptionField::OwnerSex,
        AdoptionField::OwnerAddress,
        AdoptionField::PetColor,
        AdoptionField::VetInfo,
        AdoptionField::PetAge,
        AdoptionField::PetBreed,
        AdoptionField::PetSex,
        AdoptionField::ReasonForAdopt,
        AdoptionField::PetStatus,
    ];

    /// Key of the field in the submitted form
    pub fn key(self) -> &'static str {
        match self {
            AdoptionField::DogName => "dogName",
            AdoptionField::OwnerLastname => "ownerLastname",
            AdoptionField::ContactNumber => "contactNumber",
            AdoptionField::OwnerAge => "ownerAge",
            AdoptionField::OwnerFirstname => "ownerFirstname",
            AdoptionField::OwnerMiddlename => "ownerMiddlename",
            AdoptionField::OwnerSex => "ownerSex",
            AdoptionField::OwnerAddress => "ownerAddress",
            AdoptionField::PetColor => "petColor",
            AdoptionField::VetInfo => "vetInfo",
            AdoptionField::PetAge => "petAge",
            AdoptionField::PetBreed => "petBreed",
            AdoptionField::PetSex => "petSex",
            AdoptionField::ReasonForAdopt => "reasonForAdopt",
            AdoptionField::PetStatus => "petStatus",
        }
    }

    /// Caption drawn above the input box
    pub fn label(self) -> &'static str {
        match self {
            AdoptionField::DogName => "NAME OF DOG",
            AdoptionField::OwnerLastname => "LASTNAME",
            AdoptionField::ContactNumber => "CONTACT NUMBER",
            AdoptionField::OwnerAge | AdoptionField::PetAge => "AGE",
            AdoptionField::OwnerFirstname => "FIRST NAME",
            AdoptionField::OwnerMiddlename => "MIDDLE NAME",
            AdoptionField::OwnerSex | AdoptionField::PetSex => "SEX",
            AdoptionField::OwnerAddress => "ADDRESS",
            AdoptionField::PetColor => "PET COLOR",
            AdoptionField::VetInfo => "VET INFO (INJECTION ON RABIES)",
            AdoptionField::PetBreed => "PET BREED",
            AdoptionField::ReasonForAdopt => "REASON FOR ADOPT",
            AdoptionField::PetStatus => "STATUS OF PET",
        }
    }
}

/// Painted buttons on the adoption canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasButton {
    Back,
    Submit,
    Upload,
}

/// Anything on the canvas that reacts to a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasElement {
    Button(CanvasButton),
    Input(AdoptionField),
}

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_min_size(pos2(x, y), vec2(w, h))
}

/// Hit-test rectangles in canvas coordinates, in paint order
pub fn layout() -> Vec<(CanvasElement, Rect)> {
    use AdoptionField::*;
    use CanvasElement::{Button, Input};

    vec![
        (Button(CanvasButton::Back), rect(930.0, 15.0, 110.0, 40.0)),
        (Button(CanvasButton::Submit), rect(1060.0, 15.0, 110.0, 40.0)),
        (Input(DogName), rect(865.0, 340.0, 280.0, 40.0)),
        (Button(CanvasButton::Upload), rect(865.0, 400.0, 280.0, 45.0)),
        (Input(OwnerLastname), rect(50.0, 170.0, 230.0, 40.0)),
        (Input(ContactNumber), rect(300.0, 170.0, 230.0, 40.0)),
        (Input(OwnerAge), rect(550.0, 170.0, 230.0, 40.0)),
        (Input(OwnerFirstname), rect(50.0, 250.0, 230.0, 40.0)),
        (Input(OwnerMiddlename), rect(300.0, 250.0, 230.0, 40.0)),
        (Input(OwnerSex), rect(550.0, 250.0, 230.0, 40.0)),
        (Input(OwnerAddress), rect(50.0, 330.0, 730.0, 90.0)),
        (Input(PetColor), rect(50.0, 550.0, 230.0, 40.0)),
        (Input(VetInfo), rect(300.0, 550.0, 480.0, 40.0)),
        (Input(PetAge), rect(50.0, 630.0, 230.0, 40.0)),
        (Input(PetBreed), rect(300.0, 630.0, 230.0, 40.0)),
        (Input(PetSex), rect(550.0, 630.0, 230.0, 40.0)),
        (Input(ReasonForAdopt), rect(50.0, 710.0, 480.0, 90.0)),
        (Input(PetStatus), rect(550.0, 710.0, 230.0, 40.0)),
    ]
}

/// Section backgrounds: bounds and optional title
pub fn sections() -> [(Rect, Option<&'static str>); 3] {
    [
        (rect(30.0, 100.0, 780.0, 350.0), Some("OWNER INFORMATION")),
        (rect(30.0, 480.0, 780.0, 390.0), Some("PET INFORMATION")),
        (rect(840.0, 100.0, 330.0, 440.0), None),
    ]
}

/// Area where the pet photo (or its placeholder) is drawn
pub fn image_placeholder() -> Rect {
    rect(865.0, 120.0, 280.0, 200.0)
}

/// Gap between an input's border and its text
pub const TEXT_PADDING: f32 = 10.0;

/// Area an input's text is clipped to
pub fn text_clip_rect(bounds: Rect) -> Rect {
    Rect::from_min_max(
        pos2(bounds.min.x + TEXT_PADDING, bounds.min.y),
        pos2(bounds.max.x - TEXT_PADDING, bounds.max.y),
    )
}

/// Horizontal caret position after `text_width` points of text
pub fn caret_x(bounds: Rect, text_width: f32) -> f32 {
    bounds.min.x + TEXT_PADDING + text_width
}

/// State of the hand-drawn adoption intake form
pub struct AdoptionCanvas {
    state: FormState,
    elements: Vec<(CanvasElement, Rect)>,
    active: Option<AdoptionField>,
    cursor_visible: bool,
    last_blink: f64,
    pet_image: Option<egui::TextureHandle>,
}

impl AdoptionCanvas {
    pub fn new() -> Self {
        let keys: Vec<&'static str> = AdoptionField::ALL.iter().map(|f| f.key()).collect();
        Self {
            state: FormState::with_fields(&keys),
            elements: layout(),
            active: None,
            cursor_visible: true,
            last_blink: 0.0,
            pet_image: None,
        }
    }

    /// Opens the form with the dog's name already filled in
    pub fn for_pet(name: &str) -> Self {
        let mut canvas = Self::new();
        canvas.state.set(AdoptionField::DogName.key(), name);
        canvas
    }

    /// Handles a click at `point` (canvas coordinates)
    ///
    /// Focuses the clicked input, or clears focus when the click missed every
    /// input. Returns the button that was hit, if any.
    pub fn click(&mut self, point: Pos2) -> Option<CanvasButton> {
        let mut focused = None;
        let mut pressed = None;

        for (element, bounds) in &self.elements {
            if !bounds.contains(point) {
                continue;
            }
            match *element {
                CanvasElement::Input(field) => focused = Some(field),
                CanvasElement::Button(button) => pressed = Some(button),
            }
        }

        self.active = focused;
        pressed
    }

    /// Appends typed text to the focused input
    pub fn type_text(&mut self, text: &str) {
        if let Some(field) = self.active {
            self.state.push_text(field.key(), text);
        }
    }

    /// Deletes the last character of the focused input
    pub fn backspace(&mut self) {
        if let Some(field) = self.active {
            self.state.backspace(field.key());
        }
    }

    /// Advances the cursor blink; returns true when visibility changed
    pub fn tick(&mut self, now: f64) -> bool {
        if now - self.last_blink >= BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.last_blink = now;
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<AdoptionField> {
        self.active
    }

    /// Whether the caret should be drawn this frame
    pub fn caret_shown(&self) -> bool {
        self.active.is_some() && self.cursor_visible
    }

    pub fn value(&self, field: AdoptionField) -> &str {
        self.state.get(field.key())
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn elements(&self) -> &[(CanvasElement, Rect)] {
        &self.elements
    }

    pub fn pet_image(&self) -> Option<&egui::TextureHandle> {
        self.pet_image.as_ref()
    }

    pub fn set_pet_image(&mut self, texture: egui::TextureHandle) {
        self.pet_image = Some(texture);
    }
}

impl Default for AdoptionCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(target: CanvasElement) -> Pos2 {
        layout()
            .into_iter()
            .find(|(element, _)| *element == target)
            .map(|(_, bounds)| bounds.center())
            .unwrap()
    }

    #[test]
    fn test_layout_covers_every_field() {
        let elements = layout();
        assert_eq!(elements.len(), 18);
        for field in AdoptionField::ALL {
            assert!(elements
                .iter()
                .any(|(e, _)| *e == CanvasElement::Input(field)));
        }
    }

    #[test]
    fn test_elements_fit_the_canvas() {
        let canvas = Rect::from_min_size(Pos2::ZERO, CANVAS_SIZE);
        for (_, bounds) in layout() {
            assert!(canvas.contains_rect(bounds));
        }
    }

    #[test]
    fn test_click_focuses_input() {
        let mut canvas = AdoptionCanvas::new();
        let pressed = canvas.click(center_of(CanvasElement::Input(AdoptionField::PetBreed)));
        assert_eq!(pressed, None);
        assert_eq!(canvas.active(), Some(AdoptionField::PetBreed));
    }

    #[test]
    fn test_click_outside_clears_focus() {
        let mut canvas = AdoptionCanvas::new();
        canvas.click(center_of(CanvasElement::Input(AdoptionField::OwnerAge)));
        canvas.click(pos2(5.0, 890.0));
        assert_eq!(canvas.active(), None);
    }

    #[test]
    fn test_click_button_returns_it_and_drops_focus() {
        let mut canvas = AdoptionCanvas::new();
        canvas.click(center_of(CanvasElement::Input(AdoptionField::OwnerAge)));

        let pressed = canvas.click(center_of(CanvasElement::Button(CanvasButton::Submit)));
        assert_eq!(pressed, Some(CanvasButton::Submit));
        assert_eq!(canvas.active(), None);

        let pressed = canvas.click(center_of(CanvasElement::Button(CanvasButton::Upload)));
        assert_eq!(pressed, Some(CanvasButton::Upload));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut canvas = AdoptionCanvas::new();
        canvas.type_text("ignored");
        assert!(AdoptionField::ALL.iter().all(|&f| canvas.value(f).is_empty()));

        canvas.click(center_of(CanvasElement::Input(AdoptionField::PetColor)));
        canvas.type_text("Brow");
        canvas.type_text("nn");
        canvas.backspace();
        assert_eq!(canvas.value(AdoptionField::PetColor), "Brown");
        assert_eq!(canvas.value(AdoptionField::PetAge), "");
    }

    #[test]
    fn test_text_clip_rect_is_padded() {
        let bounds = rect(30.0, 150.0, 350.0, 40.0);
        let clip = text_clip_rect(bounds);
        assert_eq!(clip.min, pos2(40.0, 150.0));
        assert_eq!(clip.max, pos2(370.0, 190.0));
        assert_eq!(clip.width(), bounds.width() - 2.0 * TEXT_PADDING);
    }

    #[test]
    fn test_caret_follows_text_width() {
        let bounds = rect(30.0, 150.0, 350.0, 40.0);
        assert_eq!(caret_x(bounds, 0.0), 40.0);
        assert_eq!(caret_x(bounds, 57.5), 97.5);
    }

    #[test]
    fn test_for_pet_prefills_name() {
        let canvas = AdoptionCanvas::for_pet("Charlie");
        assert_eq!(canvas.value(AdoptionField::DogName), "Charlie");
        assert_eq!(canvas.state().fields.len(), 15);
    }

    #[test]
    fn test_blink() {
        let mut canvas = AdoptionCanvas::new();
        assert!(!canvas.caret_shown());

        canvas.click(center_of(CanvasElement::Input(AdoptionField::VetInfo)));
        assert!(canvas.caret_shown());

        assert!(!canvas.tick(0.2));
        assert!(canvas.caret_shown());
        assert!(canvas.tick(0.5));
        assert!(!canvas.caret_shown());
        assert!(!canvas.tick(0.9));
        assert!(canvas.tick(1.0));
        assert!(canvas.caret_shown());
    }
}
