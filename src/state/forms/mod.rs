//! Form domain layer
//!
//! Field values, step definitions, validators and the store that ties them
//! together for the booking form.

mod field;
mod form_state;
mod steps;
mod validation;

pub use field::{Field, FieldValue, FormData, RequestType};
pub use form_state::{Form, FormError, FormStore, StepTransition};
pub use steps::{Step, TOTAL_STEPS};
pub use validation::{validate, FieldError, ValidationState};
