//! Top-level screens and the events they send back to the app.
//!
//! Screens never switch themselves; they push an [`AppEvent`] and the app
//! decides what happens next.

pub mod about;
pub mod adoption;
pub mod create_account;
pub mod dashboard;
pub mod login;
pub mod pets;
pub mod vet;

/// Where the user asked to go
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    CreateAccount,
    Dashboard,
    /// Adoption form, optionally pre-filled for a listed pet
    Adoption { pet: Option<String> },
}

impl Route {
    /// Window title while the route is shown
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "PawTrack Login",
            Route::CreateAccount => "PawTrack - Create Account",
            Route::Dashboard => "Dashboard",
            Route::Adoption { .. } => "Adoption Form",
        }
    }

    /// Window inner size while the route is shown
    pub fn window_size(&self) -> [f32; 2] {
        match self {
            Route::Login => [950.0, 600.0],
            Route::CreateAccount => [1100.0, 760.0],
            Route::Dashboard => [1200.0, 800.0],
            Route::Adoption { .. } => [1200.0, 900.0],
        }
    }
}

/// Kind of modal dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DialogKind {
    Info,
    Error,
    /// Yes/No question; "Yes" follows the route
    Confirm { on_yes: Route },
}

/// A modal message waiting for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Info,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Error,
        }
    }

    pub fn confirm(title: impl Into<String>, message: impl Into<String>, on_yes: Route) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Confirm { on_yes },
        }
    }
}

/// Something a screen wants the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Navigate(Route),
    ShowDialog(Dialog),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_have_distinct_sizes() {
        assert_eq!(Route::Login.window_size(), [950.0, 600.0]);
        assert_eq!(
            Route::Adoption { pet: None }.window_size(),
            [1200.0, 900.0]
        );
        assert_eq!(Route::Dashboard.title(), "Dashboard");
    }

    #[test]
    fn test_dialog_constructors() {
        let d = Dialog::confirm("Confirm Logout", "Are you sure?", Route::Login);
        assert_eq!(d.kind, DialogKind::Confirm { on_yes: Route::Login });
        assert_eq!(Dialog::error("Login Error", "x").kind, DialogKind::Error);
        assert_eq!(Dialog::info("Search", "y").title, "Search");
    }
}
