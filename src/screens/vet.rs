use chrono::NaiveTime;
use eframe::egui::text::{CCursor, CCursorRange};
use eframe::egui::{self, Color32, RichText};

use super::{AppEvent, Dialog};
use crate::appointment::{self, AppointmentForm, BookedAppointment, GENDERS, VETS};
use crate::ui::{self, style};

/// Vet appointment panel: the booking form plus the featured vet card
#[derive(Debug)]
pub struct VetPanel {
    form: AppointmentForm,
    show_more_vets: bool,
}

impl VetPanel {
    pub fn new(now: NaiveTime) -> Self {
        Self {
            form: AppointmentForm::new(now),
            show_more_vets: false,
        }
    }

    pub fn toggle_more_vets(&mut self) {
        self.show_more_vets = !self.show_more_vets;
    }

    /// Books the appointment, reporting the outcome as a dialog
    pub fn book(&mut self) -> AppEvent {
        self.form.normalize();
        match self.form.book() {
            Ok(booked) => {
                log_booking(&booked);
                AppEvent::ShowDialog(Dialog::info(
                    "Appointment Booked!",
                    appointment::BOOKED_MESSAGE,
                ))
            }
            Err(err) => {
                tracing::warn!(error = %err, "appointment rejected");
                AppEvent::ShowDialog(Dialog::error("Invalid Appointment", err.to_string()))
            }
        }
    }

    pub fn clear(&mut self, now: NaiveTime) {
        self.form.clear(now);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        egui::ScrollArea::vertical()
            .id_salt("vet_form")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Vet Appointment")
                        .strong()
                        .size(36.0)
                        .color(style::DARK_TEXT),
                );
                ui.add_space(12.0);

                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(560.0);
                        self.pet_details(ui);
                        ui.add_space(16.0);
                        self.appointment_details(ui);
                        ui.add_space(16.0);
                        self.actions(ui, events);
                    });
                    ui.add_space(24.0);
                    ui.vertical(|ui| {
                        ui.set_width(300.0);
                        self.vet_card(ui);
                    });
                });
            });
    }

    fn pet_details(&mut self, ui: &mut egui::Ui) {
        section(ui, "Pet Details", |ui| {
            let form = &mut self.form;
            egui::Grid::new("pet_details")
                .num_columns(2)
                .spacing(egui::vec2(16.0, 10.0))
                .show(ui, |ui| {
                    text_row(ui, "Pet ID", &mut form.pet_id);
                    text_row(ui, "Owner Name", &mut form.owner_name);
                    text_row(ui, "Pet Name", &mut form.pet_name);
                    text_row(ui, "Pet Type", &mut form.pet_type);
                    text_row(ui, "Age/Breed", &mut form.age_breed);

                    caption(ui, "Gender");
                    egui::ComboBox::from_id_salt("gender")
                        .width(260.0)
                        .selected_text(form.gender_name())
                        .show_ui(ui, |ui| {
                            for (i, gender) in GENDERS.iter().enumerate() {
                                ui.selectable_value(&mut form.gender, i, *gender);
                            }
                        });
                    ui.end_row();

                    text_row(ui, "Pet Weight (kg)", &mut form.pet_weight);
                    masked_row(
                        ui,
                        "Last Vaccination 💉",
                        &mut form.last_vaccination,
                        appointment::DATE_MASK,
                        "YYYY-MM-DD",
                    );
                    text_row(ui, "Emergency Contact", &mut form.emergency_contact);

                    caption(ui, "Medical History");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.medical_history)
                            .desired_rows(3)
                            .desired_width(260.0),
                    );
                    ui.end_row();

                    caption(ui, "Known Allergies");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.allergies)
                            .desired_rows(2)
                            .desired_width(260.0),
                    );
                    ui.end_row();
                });
        });
    }

    fn appointment_details(&mut self, ui: &mut egui::Ui) {
        section(ui, "Appointment Details", |ui| {
            let form = &mut self.form;
            egui::Grid::new("appointment_details")
                .num_columns(2)
                .spacing(egui::vec2(16.0, 10.0))
                .show(ui, |ui| {
                    caption(ui, "Select Vet");
                    egui::ComboBox::from_id_salt("vet")
                        .width(260.0)
                        .selected_text(form.vet_name())
                        .show_ui(ui, |ui| {
                            for (i, vet) in VETS.iter().enumerate() {
                                ui.selectable_value(&mut form.vet, i, *vet);
                            }
                        });
                    ui.end_row();

                    masked_row(ui, "Date 📅", &mut form.date, appointment::DATE_MASK, "YYYY-MM-DD");

                    caption(ui, "Time 🕒");
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut form.time.hour).range(1..=12));
                        ui.label(":");
                        ui.add(
                            egui::DragValue::new(&mut form.time.minute)
                                .range(0..=59)
                                .custom_formatter(|n, _| format!("{:02}", n as u32)),
                        );
                        egui::ComboBox::from_id_salt("meridiem")
                            .width(60.0)
                            .selected_text(if form.time.pm { "PM" } else { "AM" })
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut form.time.pm, false, "AM");
                                ui.selectable_value(&mut form.time.pm, true, "PM");
                            });
                    });
                    ui.end_row();

                    masked_row(
                        ui,
                        "Contact Number",
                        &mut form.contact_number,
                        appointment::CONTACT_MASK,
                        appointment::CONTACT_MASK,
                    );
                });
        });
    }

    fn actions(&mut self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.horizontal(|ui| {
            let size = egui::vec2(180.0, 42.0);
            if ui::rounded_button(ui, "Book Appointment", style::BLUE, style::SLATE_HOVER, size)
                .clicked()
            {
                events.push(self.book());
            }

            let clear = egui::Button::new(RichText::new("Clear Form").color(style::DARK_TEXT))
                .fill(style::GRAY_BUTTON)
                .corner_radius(egui::CornerRadius::same(10))
                .min_size(size);
            if ui.add(clear).clicked() {
                self.clear(chrono::Local::now().time());
            }
        });
    }

    fn vet_card(&mut self, ui: &mut egui::Ui) {
        let vet = appointment::featured_vet();
        ui::rounded_panel(Color32::WHITE, 15)
            .stroke(egui::Stroke::new(1.0, style::BORDER))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(vet.name).strong().size(18.0).color(style::DARK_TEXT));
                ui.label(format!("Contact: {}", vet.phone));
                ui.label(format!("Email: {}", vet.email));
                ui.add_space(6.0);
                ui.label(RichText::new(vet.clinic).strong());
                ui.label(RichText::new(vet.address).color(style::TEXT));
            });

        ui.add_space(12.0);
        egui::Frame::new()
            .fill(style::SECTION)
            .corner_radius(egui::CornerRadius::same(15))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.set_height(160.0);
            });

        ui.add_space(12.0);
        let label = if self.show_more_vets {
            "Hide Vets ▲"
        } else {
            "View More Vets ▼"
        };
        if ui.button(label).clicked() {
            self.toggle_more_vets();
        }
        if self.show_more_vets {
            for vet in VETS.iter().skip(1) {
                ui.label(RichText::new(*vet).color(style::TEXT));
            }
        }
    }
}

fn log_booking(booked: &BookedAppointment) {
    tracing::info!(
        vet = booked.vet,
        last_vaccination = ?booked.last_vaccination,
        "appointment booked: {}",
        booked.summary()
    );
}

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui::rounded_panel(style::SECTION, 15)
        .stroke(egui::Stroke::new(1.0, style::BORDER))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(20.0).color(style::DARK_TEXT));
            ui.add_space(8.0);
            add_contents(ui);
        });
}

fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().color(style::TEXT));
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    caption(ui, label);
    ui.add(egui::TextEdit::singleline(value).desired_width(260.0));
    ui.end_row();
}

/// Text row whose value is re-masked after every edit
///
/// Inserting separators shifts the text under egui's cursor, so the cursor
/// is moved to the end whenever the mask changes the value.
fn masked_row(ui: &mut egui::Ui, label: &str, value: &mut String, mask: &str, hint: &str) {
    caption(ui, label);
    let mut output = egui::TextEdit::singleline(value)
        .hint_text(hint)
        .desired_width(260.0)
        .show(ui);

    if output.response.changed() {
        let masked = appointment::apply_mask(mask, value);
        if masked != *value {
            *value = masked;
            let end = CCursor::new(value.chars().count());
            output
                .state
                .cursor
                .set_char_range(Some(CCursorRange::one(end)));
            output.state.store(ui.ctx(), output.response.id);
        }
    }
    ui.end_row();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::DialogKind;

    fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_book_valid_form_shows_confirmation() {
        let mut panel = VetPanel::new(nine());
        panel.form.pet_name = "Max".to_string();
        panel.form.date = "20251103".to_string();

        let event = panel.book();
        assert_eq!(
            event,
            AppEvent::ShowDialog(Dialog::info(
                "Appointment Booked!",
                appointment::BOOKED_MESSAGE
            ))
        );
        assert_eq!(panel.form.date, "2025-11-03");
    }

    #[test]
    fn test_book_invalid_date_shows_error() {
        let mut panel = VetPanel::new(nine());
        panel.form.date = "2025-02-31".to_string();
        match panel.book() {
            AppEvent::ShowDialog(dialog) => {
                assert_eq!(dialog.kind, DialogKind::Error);
                assert_eq!(dialog.message, "Date must be a valid date (YYYY-MM-DD)");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_clear_and_vet_list_toggle() {
        let mut panel = VetPanel::new(nine());
        panel.form.owner_name = "Ana".to_string();
        panel.clear(nine());
        assert_eq!(panel.form, AppointmentForm::new(nine()));

        assert!(!panel.show_more_vets);
        panel.toggle_more_vets();
        assert!(panel.show_more_vets);
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Focuses a lone masked row, then types `digits` one frame at a time
    fn type_into_masked_row(mask: &str, digits: &str) -> String {
        let ctx = egui::Context::default();
        let mut value = String::new();
        let frame = |events: Vec<egui::Event>, value: &mut String| {
            let input = egui::RawInput {
                events,
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    egui::Grid::new("masked").show(ui, |ui| {
                        masked_row(ui, "Field", value, mask, mask);
                    });
                });
            });
        };

        frame(Vec::new(), &mut value);
        frame(vec![key(egui::Key::Tab)], &mut value);
        frame(Vec::new(), &mut value);
        for digit in digits.chars() {
            frame(vec![egui::Event::Text(digit.to_string())], &mut value);
        }
        value
    }

    #[test]
    fn test_date_typed_digit_by_digit() {
        assert_eq!(
            type_into_masked_row(appointment::DATE_MASK, "20251103"),
            "2025-11-03"
        );
    }

    #[test]
    fn test_contact_typed_digit_by_digit() {
        assert_eq!(
            type_into_masked_row(appointment::CONTACT_MASK, "15551234567"),
            "+1-555-123-4567"
        );
    }

    #[test]
    fn test_renders_headless() {
        let ctx = egui::Context::default();
        let mut panel = VetPanel::new(nine());
        let mut events = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| panel.show(ui, &mut events));
        });
        assert!(events.is_empty());
    }
}
