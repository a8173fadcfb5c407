//! Contact model representing a person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, an ordered list of phone numbers and an optional birthday.
///
/// The name is fixed at construction and identifies the contact inside an
/// [`AddressBook`](super::AddressBook). Phone numbers may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been recorded.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were dropped.
    ///
    /// Removing a number the contact does not have is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        tracing::debug!(contact = %self.name, phone = %phone, removed, "Phone removed");
        removed
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `new` is not a valid phone number
    /// - `BookError::PhoneNotFound` if `old` matches no stored phone; an
    ///   invalid `old` can never match and is reported the same way
    ///
    /// The contact is left untouched on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let target =
            PhoneNumber::new(old).map_err(|_| BookError::PhoneNotFound(old.to_string()))?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| **p == target)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;

        tracing::debug!(contact = %self.name, old = %old, new = %new, "Phone edited");
        Ok(())
    }

    /// The first stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday, replacing any previous value.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        tracing::debug!(contact = %self.name, birthday = %birthday, "Birthday set");
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, Phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
