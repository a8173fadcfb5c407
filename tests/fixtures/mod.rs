//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable contacts, books and dates.

use chrono::NaiveDate;
use contact_book::{AddressBook, Contact};

/// Build a calendar date from day, month, year (the book's own field order).
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a contact with the given phones and no birthday.
#[allow(dead_code)]
pub fn sample_contact(name: &str, phones: &[&str]) -> Contact {
    let mut contact = Contact::new(name).expect("valid fixture name");
    for phone in phones {
        contact.add_phone(phone).expect("valid fixture phone");
    }
    contact
}

/// Create a contact with a birthday and no phones.
#[allow(dead_code)]
pub fn contact_born(name: &str, birthday: &str) -> Contact {
    let mut contact = Contact::new(name).expect("valid fixture name");
    contact.add_birthday(birthday).expect("valid fixture birthday");
    contact
}

/// A small book covering phones, duplicates and birthdays.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut alice = sample_contact("Alice", &["0501234567", "0671234567"]);
    alice.add_birthday("05.11.1990").expect("valid fixture birthday");

    let bob = sample_contact("Bob", &["0931112233", "0931112233"]);

    let mut carl = sample_contact("Carl", &[]);
    carl.add_birthday("29.02.1996").expect("valid fixture birthday");

    AddressBook::from_contacts([alice, bob, carl]).expect("unique fixture names")
}
