//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book and contact operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Record not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Old phone number not found.")]
    PhoneNotFound(String),

    /// A contact with this name already exists
    #[error("Record with this name already exists.")]
    DuplicateContact(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON for the expected shape
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot parsed but violates an address book invariant
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),

    /// The snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    /// A thread panicked while holding the in-memory store
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors produced while parsing or executing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// An argument failed validation before reaching the book
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Not enough positional arguments; carries the usage hint
    #[error("{0}")]
    MissingArguments(&'static str),

    /// The first token is not a known command
    #[error("Invalid command.")]
    UnknownCommand(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
