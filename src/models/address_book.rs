//! The address book: a name-keyed collection of contacts.

use super::contact::Contact;
use crate::domain::birthday::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Default look-ahead window for [`AddressBook::upcoming_birthdays`], in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls within the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The day to send congratulations; weekend birthdays move to Monday
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// Name-keyed collection of contacts.
///
/// At most one contact exists per name. Iteration, rendering and the
/// birthday query all follow insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    contacts: HashMap<String, Contact>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from contacts in order, enforcing name uniqueness.
    pub fn from_contacts<I>(contacts: I) -> BookResult<Self>
    where
        I: IntoIterator<Item = Contact>,
    {
        let mut book = Self::new();
        for contact in contacts {
            book.add_record(contact)?;
        }
        Ok(book)
    }

    /// Take ownership of `contact`, keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateContact` if the name is already taken;
    /// the stored contact is not touched.
    pub fn add_record(&mut self, contact: Contact) -> BookResult<()> {
        let name = contact.name().as_str().to_string();
        if self.contacts.contains_key(&name) {
            return Err(BookError::DuplicateContact(name));
        }

        tracing::debug!(contact = %name, "Record added");
        self.order.push(name.clone());
        self.contacts.insert(name, contact);
        Ok(())
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Look up a contact by exact name for mutation.
    ///
    /// The name itself cannot be changed through the returned reference.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    /// Whether a contact with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Remove and return the contact stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such contact.
    pub fn delete(&mut self, name: &str) -> BookResult<Contact> {
        let contact = self
            .contacts
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);

        tracing::debug!(contact = %name, "Record deleted");
        Ok(contact)
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.order.iter().filter_map(|name| self.contacts.get(name))
    }

    /// Contacts whose next birthday is within `days` days of `today`, inclusive.
    ///
    /// Each birthday is projected onto `today`'s year, or onto the next year
    /// if that date has already passed. A projection landing on Saturday or
    /// Sunday is congratulated on the following Monday. February 29 projects
    /// onto February 28 in non-leap years.
    ///
    /// The result depends only on the book contents and `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;

                let mut next = birthday.anniversary_in(today.year());
                if next < today {
                    next = birthday.anniversary_in(today.year() + 1);
                }

                let until = (next - today).num_days();
                if until < 0 || until > i64::from(days) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: contact.name().as_str().to_string(),
                    congratulation_date: congratulation_date(next),
                })
            })
            .collect();

        tracing::debug!(
            today = %today,
            days,
            matches = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }

    /// [`upcoming_birthdays`](Self::upcoming_birthdays) relative to the local date.
    pub fn upcoming_birthdays_from_today(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), days)
    }
}

/// Move a weekend date forward to Monday; weekdays are returned unchanged.
fn congratulation_date(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days(7 - weekday)
    } else {
        date
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, contact) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", contact)?;
        }
        Ok(())
    }
}
