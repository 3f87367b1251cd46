// File: src/field_state.rs
// Purpose: Per-field value, validity and error display state

use contact_form_validation::{FieldName, ValidationResult};

/// Border color cue shown on an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderCue {
    #[default]
    Neutral,
    Invalid,
}

impl BorderCue {
    pub fn color(self) -> &'static str {
        match self {
            BorderCue::Neutral => "#e1e5e9",
            BorderCue::Invalid => "#e74c3c",
        }
    }
}

/// State of one form field
///
/// The error text is non-empty iff the field is marked invalid. Fields start
/// out valid with no error shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    valid: bool,
    error: String,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldState {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            valid: true,
            error: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn border(&self) -> BorderCue {
        if self.valid {
            BorderCue::Neutral
        } else {
            BorderCue::Invalid
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Record a validation outcome for display
    pub fn apply(&mut self, result: &ValidationResult) {
        if result.valid {
            self.clear_error();
        } else {
            self.valid = false;
            self.error.clone_from(&result.message);
        }
    }

    pub fn clear_error(&mut self) {
        self.valid = true;
        self.error.clear();
    }

    /// Empty the value and drop any error
    pub fn reset(&mut self) {
        self.value.clear();
        self.clear_error();
    }
}

/// The three fields of the form, indexed by [`FieldName`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    fields: [FieldState; 3],
}

impl Default for FieldSet {
    fn default() -> Self {
        Self {
            fields: [FieldState::new(), FieldState::new(), FieldState::new()],
        }
    }
}

impl FieldSet {
    pub fn get(&self, name: FieldName) -> &FieldState {
        &self.fields[name.index()]
    }

    pub fn get_mut(&mut self, name: FieldName) -> &mut FieldState {
        &mut self.fields[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldState)> {
        FieldName::ALL.into_iter().zip(self.fields.iter())
    }

    pub fn clear_errors(&mut self) {
        self.fields.iter_mut().for_each(FieldState::clear_error);
    }

    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(FieldState::reset);
    }

    /// Number of fields currently showing an error
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.valid).count()
    }
}
