pub mod adoption;

use serde::Serialize;
use std::collections::BTreeMap;

/// Free-text values of an open form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    fields: BTreeMap<&'static str, String>,
}

impl FormState {
    /// Creates a form with every field present and empty
    pub fn with_fields(keys: &[&'static str]) -> Self {
        Self {
            fields: keys.iter().map(|&k| (k, String::new())).collect(),
        }
    }

    /// Value of `key`; unknown keys read as empty
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.fields.insert(key, value.into());
    }

    /// Appends the printable characters of `text` to `key`
    pub fn push_text(&mut self, key: &'static str, text: &str) {
        let value = self.fields.entry(key).or_default();
        value.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Removes the last character of `key`, if any
    pub fn backspace(&mut self, key: &'static str) {
        if let Some(value) = self.fields.get_mut(key) {
            value.pop();
        }
    }

    /// JSON rendering used when a form is logged on submit
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
