//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields a contact carries:
//! its name, phone numbers and birthday. These value objects provide
//! validation at construction time and prevent invalid data from being
//! represented in the system.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::ValidatedField;
pub use name::ContactName;
pub use phone::PhoneNumber;
