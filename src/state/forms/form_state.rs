//! Sign-up form state: values, errors and keyboard focus

use super::field::{Field, FormData};
use super::validation::ErrorMap;

/// Number of focus stops: three inputs plus the submit button
const FOCUS_STOPS: usize = 4;

/// Index of the submit button in the focus order
const SUBMIT_FOCUS: usize = 3;

/// Owns the values being typed and the errors from the last submit
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub data: FormData,
    pub errors: ErrorMap,
    /// Focus stop (0=Name, 1=Phone, 2=Email, 3=Submit)
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field. Errors are left alone until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value.into());
    }

    /// Restore the empty form and clear all errors
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors.clear();
        self.active_field_index = 0;
    }

    /// Field under keyboard focus, `None` when the submit button is focused
    pub fn active_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_FOCUS
    }

    pub fn focus(&mut self, field: Field) {
        self.active_field_index = field.index();
    }

    pub fn focus_submit(&mut self) {
        self.active_field_index = SUBMIT_FOCUS;
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % FOCUS_STOPS;
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = FOCUS_STOPS - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            let mut value = self.data.get(field).to_owned();
            value.push(c);
            self.set_field(field, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            let mut value = self.data.get(field).to_owned();
            if value.pop().is_some() {
                self.set_field(field, value);
            }
        }
    }

    /// Inline message for a field, if the last submit rejected it
    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(ToString::to_string)
    }

    /// A label floats into the border once the field is focused or holds text
    pub fn is_label_floating(&self, field: Field) -> bool {
        self.active_field() == Some(field) || !self.data.get(field).is_empty()
    }
}
