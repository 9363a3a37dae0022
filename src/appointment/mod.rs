use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::{PawTrackError, Result};

/// Input mask for date fields
pub const DATE_MASK: &str = "####-##-##";

/// Input mask for the appointment contact number
pub const CONTACT_MASK: &str = "+#-###-###-####";

pub const GENDERS: [&str; 4] = ["Male", "Female", "Neutered Male", "Spayed Female"];

pub const VETS: [&str; 3] = [
    "Dr. Marlon Paul Agustino",
    "Dr. Anna Kendrick",
    "Dr. Peter Jones",
];

/// Message shown after a successful booking
pub const BOOKED_MESSAGE: &str = "Your appointment has been successfully scheduled.";

/// Contact card shown next to the form
#[derive(Debug, Clone, PartialEq)]
pub struct VetContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub clinic: &'static str,
    pub address: &'static str,
}

pub fn featured_vet() -> VetContact {
    VetContact {
        name: "Dr. Marlon Paul Agustino",
        phone: "0912-345-6789",
        email: "Dr.MpA@vetelinnic.com",
        clinic: "Happy Paws Veterinary Center",
        address: "Brgy. San Isidro, Quezon City",
    }
}

/// Fits the digits of `input` into `mask`, where `#` stands for one digit
///
/// Literal mask characters are only emitted once a digit follows them, so a
/// partially typed value never ends in a separator. Extra digits are dropped.
pub fn apply_mask(mask: &str, input: &str) -> String {
    let mut digits = input.chars().filter(|c| c.is_ascii_digit()).peekable();
    let mut out = String::with_capacity(mask.len());
    let mut pending = String::new();

    for m in mask.chars() {
        if digits.peek().is_none() {
            break;
        }
        if m == '#' {
            out.push_str(&pending);
            pending.clear();
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            pending.push(m);
        }
    }
    out
}

/// Parses a masked `YYYY-MM-DD` value; an empty field is not an error
pub fn parse_masked_date(value: &str, field: &'static str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| PawTrackError::InvalidDate { field })
}

/// Time picker value on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// 1..=12
    pub hour: u32,
    /// 0..=59
    pub minute: u32,
    pub pm: bool,
}

impl ClockTime {
    pub fn from_naive(time: NaiveTime) -> Self {
        let (pm, hour) = time.hour12();
        Self {
            hour,
            minute: time.minute(),
            pm,
        }
    }

    pub fn to_naive(self) -> NaiveTime {
        let hour = self.hour.clamp(1, 12) % 12 + if self.pm { 12 } else { 0 };
        NaiveTime::from_hms_opt(hour, self.minute.min(59), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Values of the vet-appointment form
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentForm {
    pub pet_id: String,
    pub owner_name: String,
    pub pet_name: String,
    pub pet_type: String,
    pub age_breed: String,
    pub gender: usize,
    pub pet_weight: String,
    pub last_vaccination: String,
    pub emergency_contact: String,
    pub medical_history: String,
    pub allergies: String,
    pub vet: usize,
    pub date: String,
    pub time: ClockTime,
    pub contact_number: String,
}

/// A booking accepted by [`AppointmentForm::book`]
#[derive(Debug, Clone, PartialEq)]
pub struct BookedAppointment {
    pub pet_name: String,
    pub vet: &'static str,
    pub date: Option<NaiveDate>,
    pub time: NaiveTime,
    pub last_vaccination: Option<NaiveDate>,
}

impl AppointmentForm {
    /// Creates an empty form with the time picker set to `now`
    pub fn new(now: NaiveTime) -> Self {
        Self {
            pet_id: String::new(),
            owner_name: String::new(),
            pet_name: String::new(),
            pet_type: String::new(),
            age_breed: String::new(),
            gender: 0,
            pet_weight: String::new(),
            last_vaccination: String::new(),
            emergency_contact: String::new(),
            medical_history: String::new(),
            allergies: String::new(),
            vet: 0,
            date: String::new(),
            time: ClockTime::from_naive(now),
            contact_number: String::new(),
        }
    }

    /// Resets every field; the time picker goes back to `now`
    pub fn clear(&mut self, now: NaiveTime) {
        *self = Self::new(now);
    }

    pub fn vet_name(&self) -> &'static str {
        VETS.get(self.vet).copied().unwrap_or(VETS[0])
    }

    pub fn gender_name(&self) -> &'static str {
        GENDERS.get(self.gender).copied().unwrap_or(GENDERS[0])
    }

    /// Re-applies the input masks after an edit
    pub fn normalize(&mut self) {
        self.date = apply_mask(DATE_MASK, &self.date);
        self.last_vaccination = apply_mask(DATE_MASK, &self.last_vaccination);
        self.contact_number = apply_mask(CONTACT_MASK, &self.contact_number);
    }

    /// Accepts the booking when every filled-in date is a real date
    pub fn book(&self) -> Result<BookedAppointment> {
        let date = parse_masked_date(&self.date, "Date")?;
        let last_vaccination = parse_masked_date(&self.last_vaccination, "Last Vaccination")?;

        Ok(BookedAppointment {
            pet_name: self.pet_name.trim().to_string(),
            vet: self.vet_name(),
            date,
            time: self.time.to_naive(),
            last_vaccination,
        })
    }
}

impl BookedAppointment {
    /// One-line description used in logs
    pub fn summary(&self) -> String {
        let pet = if self.pet_name.is_empty() {
            "unnamed pet"
        } else {
            self.pet_name.as_str()
        };
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unscheduled date".to_string());
        format!(
            "{} with {} on {} at {}",
            pet,
            self.vet,
            date,
            self.time.format("%I:%M %p")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nine_thirty() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 30, 15).unwrap()
    }

    #[test]
    fn test_apply_date_mask() {
        assert_eq!(apply_mask(DATE_MASK, ""), "");
        assert_eq!(apply_mask(DATE_MASK, "2025"), "2025");
        assert_eq!(apply_mask(DATE_MASK, "20251"), "2025-1");
        assert_eq!(apply_mask(DATE_MASK, "2025-10-16"), "2025-10-16");
        assert_eq!(apply_mask(DATE_MASK, "2025/10/16 extra 99"), "2025-10-16");
    }

    #[test]
    fn test_apply_contact_mask() {
        assert_eq!(apply_mask(CONTACT_MASK, "6"), "+6");
        assert_eq!(apply_mask(CONTACT_MASK, "63912"), "+6-391-2");
        assert_eq!(apply_mask(CONTACT_MASK, "63 912 345 6789"), "+6-391-234-5678");
    }

    #[test]
    fn test_parse_masked_date() {
        assert_eq!(parse_masked_date("  ", "Date").unwrap(), None);
        assert_eq!(
            parse_masked_date("2025-02-28", "Date").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert!(matches!(
            parse_masked_date("2025-02-30", "Date"),
            Err(PawTrackError::InvalidDate { field: "Date" })
        ));
        assert!(parse_masked_date("2025-1", "Date").is_err());
    }

    #[test]
    fn test_clock_time_conversion() {
        let t = ClockTime::from_naive(NaiveTime::from_hms_opt(0, 5, 0).unwrap());
        assert_eq!(t, ClockTime { hour: 12, minute: 5, pm: false });
        assert_eq!(t.to_naive(), NaiveTime::from_hms_opt(0, 5, 0).unwrap());

        let t = ClockTime::from_naive(NaiveTime::from_hms_opt(15, 45, 0).unwrap());
        assert_eq!(t, ClockTime { hour: 3, minute: 45, pm: true });
        assert_eq!(t.to_naive(), NaiveTime::from_hms_opt(15, 45, 0).unwrap());

        let noon = ClockTime { hour: 12, minute: 0, pm: true };
        assert_eq!(noon.to_naive(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_book_valid_form() {
        let mut form = AppointmentForm::new(nine_thirty());
        form.pet_name = " Max ".to_string();
        form.vet = 2;
        form.date = "2025-11-03".to_string();

        let booked = form.book().unwrap();
        assert_eq!(booked.pet_name, "Max");
        assert_eq!(booked.vet, "Dr. Peter Jones");
        assert_eq!(booked.date, NaiveDate::from_ymd_opt(2025, 11, 3));
        assert_eq!(booked.last_vaccination, None);
        assert_eq!(
            booked.summary(),
            "Max with Dr. Peter Jones on 2025-11-03 at 09:30 AM"
        );
    }

    #[test]
    fn test_book_rejects_bad_vaccination_date() {
        let mut form = AppointmentForm::new(nine_thirty());
        form.last_vaccination = "2024-13-01".to_string();
        let err = form.book().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Last Vaccination must be a valid date (YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = AppointmentForm::new(nine_thirty());
        form.pet_id = "P-1".to_string();
        form.medical_history = "Allergic to chicken".to_string();
        form.gender = 3;
        form.vet = 1;
        form.contact_number = "+6-391".to_string();

        let later = NaiveTime::from_hms_opt(16, 10, 0).unwrap();
        form.clear(later);
        assert_eq!(form, AppointmentForm::new(later));
        assert_eq!(form.gender_name(), "Male");
        assert_eq!(form.vet_name(), "Dr. Marlon Paul Agustino");
        assert_eq!(form.time, ClockTime { hour: 4, minute: 10, pm: true });
    }

    #[test]
    fn test_normalize_applies_masks() {
        let mut form = AppointmentForm::new(nine_thirty());
        form.date = "20251103".to_string();
        form.contact_number = "639123456789".to_string();
        form.normalize();
        assert_eq!(form.date, "2025-11-03");
        assert_eq!(form.contact_number, "+6-391-234-5678");
    }

    #[test]
    fn test_featured_vet() {
        let vet = featured_vet();
        assert_eq!(vet.name, VETS[0]);
        assert_eq!(vet.clinic, "Happy Paws Veterinary Center");
    }
}
