//! Contact Form Validation
//!
//! Pure field rules for the contact form. Used by the controller on blur and
//! on submit, and exported to JavaScript by the WASM bindings so both sides
//! run the same checks.

pub mod field;
pub mod result;
pub mod rules;
pub mod string;

pub use field::{FieldName, UnknownField};
pub use result::ValidationResult;
pub use rules::validate;
pub use string::{js_length, js_trim};
