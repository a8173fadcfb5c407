//! Contact Book - an interactive, single-user contact directory.
//!
//! Stores names, phone numbers and birthdays, persists them between sessions
//! and reports whose birthday is coming up, moving weekend birthdays to the
//! following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record and the address book with its birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **storage**: Whole-book snapshot persistence
//! - **commands**: Command parsing, dispatch and reply rendering
//! - **session**: The interactive read-dispatch-save loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use commands::{Command, Dispatcher, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidatedField, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Contact, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use storage::{BookStore, JsonFileStore, MemoryStore};
