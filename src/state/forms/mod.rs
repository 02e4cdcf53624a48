//! Form domain layer
//!
//! Sign-up values, focus handling and validation.

mod field;
mod form_state;
mod validation;

pub use field::{Field, FormData};
pub use form_state::SignupForm;
pub use validation::validate;
#[cfg(test)]
pub use validation::FieldError;
