//! Executing parsed commands against an address book.

use super::parser::Command;
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Contact, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use chrono::{Local, NaiveDate};

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading
    Reply(String),

    /// Print the message, save and stop
    Exit(String),
}

impl Outcome {
    /// The text to show the user.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Reply(msg) | Outcome::Exit(msg) => msg,
        }
    }
}

/// Routes command lines to address book operations and renders the result.
pub struct Dispatcher {
    birthday_window_days: u32,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl Dispatcher {
    /// Create a dispatcher using the local date for birthday queries.
    pub fn new(birthday_window_days: u32) -> Self {
        Self {
            birthday_window_days,
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the source of "today" used by the `birthdays` command.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// Parse and run one line. Blank lines yield `None`.
    ///
    /// Every failure is rendered to reply text here and nowhere else.
    pub fn dispatch(&self, book: &mut AddressBook, line: &str) -> Option<Outcome> {
        let result = Command::parse(line)
            .and_then(|command| command.map(|c| self.execute(book, c)).transpose());

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(error = ?err, input = %line.trim(), "Command failed");
                Some(Outcome::Reply(render_error(&err)))
            }
        }
    }

    /// Run a parsed command.
    pub fn execute(&self, book: &mut AddressBook, command: Command) -> CommandResult<Outcome> {
        tracing::debug!(?command, "Executing command");

        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => add_contact(book, &name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                // Argument format is reported before the contact lookup
                PhoneNumber::new(&old_phone)?;
                PhoneNumber::new(&new_phone)?;
                contact_mut(book, &name)?.edit_phone(&old_phone, &new_phone)?;
                "Number was edited".to_string()
            }
            Command::Phone { name } => show_phones(contact(book, &name)?),
            Command::All => {
                if book.is_empty() {
                    "Contact book is empty".to_string()
                } else {
                    book.to_string()
                }
            }
            Command::AddBirthday { name, birthday } => {
                Birthday::new(&birthday)?;
                contact_mut(book, &name)?.add_birthday(&birthday)?;
                "Birthday added".to_string()
            }
            Command::ShowBirthday { name } => match contact(book, &name)?.birthday() {
                Some(birthday) => birthday.to_string(),
                None => format!("Birthday of {} is not indicated in contact book", name),
            },
            Command::Birthdays => self.birthdays(book),
            Command::Delete { name } => {
                book.delete(&name)?;
                "Contact deleted".to_string()
            }
            Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
        };

        Ok(Outcome::Reply(reply))
    }

    fn birthdays(&self, book: &AddressBook) -> String {
        let upcoming = book.upcoming_birthdays((self.today)(), self.birthday_window_days);
        if upcoming.is_empty() {
            return "No upcoming birthdays".to_string();
        }
        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}

fn contact<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Contact> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Contact> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    // Validate up front so a bad phone never leaves a bare contact behind.
    PhoneNumber::new(phone)?;

    if let Some(existing) = book.find_mut(name) {
        existing.add_phone(phone)?;
        return Ok("New phone added to contact".to_string());
    }

    let mut contact = Contact::new(name)?;
    contact.add_phone(phone)?;
    book.add_record(contact)?;
    Ok("Contact added".to_string())
}

fn show_phones(contact: &Contact) -> String {
    if contact.phones().is_empty() {
        return format!("{} has no phone numbers", contact.name());
    }
    contact
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

/// User-facing text for a failed command.
pub fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::Book(BookError::ContactNotFound(name)) => {
            format!("There is no {} in contact book.", name)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(dispatcher: &Dispatcher, book: &mut AddressBook, line: &str) -> String {
        dispatcher
            .dispatch(book, line)
            .map(|o| o.message().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_then_append() {
        let dispatcher = Dispatcher::default();
        let mut book = AddressBook::new();
        assert_eq!(reply(&dispatcher, &mut book, "add Alice 0501234567"), "Contact added");
        assert_eq!(
            reply(&dispatcher, &mut book, "add Alice 0671234567"),
            "New phone added to contact"
        );
        assert_eq!(
            reply(&dispatcher, &mut book, "phone Alice"),
            "0501234567; 0671234567"
        );
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let dispatcher = Dispatcher::default();
        let mut book = AddressBook::new();
        assert_eq!(
            reply(&dispatcher, &mut book, "add Alice 123"),
            "Phone number must consist of 10 digits."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_missing_contact_message() {
        let dispatcher = Dispatcher::default();
        let mut book = AddressBook::new();
        for line in [
            "phone Ghost",
            "change Ghost 1111111111 2222222222",
            "add-birthday Ghost 01.01.2000",
            "show-birthday Ghost",
            "delete Ghost",
        ] {
            assert_eq!(
                reply(&dispatcher, &mut book, line),
                "There is no Ghost in contact book.",
                "line: {}",
                line
            );
        }
    }

    #[test]
    fn test_bad_arguments_reported_before_lookup() {
        let dispatcher = Dispatcher::default();
        let mut book = AddressBook::new();
        reply(&dispatcher, &mut book, "add Alice 0501234567");

        for line in ["change Ghost 123 2222222222", "change Ghost 1111111111 22"] {
            assert_eq!(
                reply(&dispatcher, &mut book, line),
                "Phone number must consist of 10 digits.",
                "line: {}",
                line
            );
        }
        assert_eq!(
            reply(&dispatcher, &mut book, "change Alice 123 2222222222"),
            "Phone number must consist of 10 digits."
        );
        assert_eq!(
            reply(&dispatcher, &mut book, "add-birthday Ghost 1990-01-01"),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            reply(&dispatcher, &mut book, "phone Alice"),
            "0501234567"
        );
    }

    #[test]
    fn test_blank_line_has_no_outcome() {
        let dispatcher = Dispatcher::default();
        let mut book = AddressBook::new();
        assert_eq!(dispatcher.dispatch(&mut book, "   "), None);
    }

    #[test]
    fn test_exit_outcome() {
        let dispatcher = Dispatcher::default();
        let mut book = AddressBook::new();
        assert_eq!(
            dispatcher.dispatch(&mut book, "exit"),
            Some(Outcome::Exit("Good bye!".to_string()))
        );
    }

    #[test]
    fn test_birthdays_uses_clock() {
        let dispatcher =
            Dispatcher::new(7).with_clock(|| NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        let mut book = AddressBook::new();
        assert_eq!(reply(&dispatcher, &mut book, "birthdays"), "No upcoming birthdays");

        reply(&dispatcher, &mut book, "add Carl 0501234567");
        reply(&dispatcher, &mut book, "add-birthday Carl 16.03.1990");
        assert_eq!(reply(&dispatcher, &mut book, "birthdays"), "Carl: 18.03.2024");
    }

    #[test]
    fn test_render_error_passthrough() {
        assert_eq!(
            render_error(&CommandError::MissingArguments("Give me name please.")),
            "Give me name please."
        );
        assert_eq!(
            render_error(&CommandError::Book(BookError::PhoneNotFound(
                "1".to_string()
            ))),
            "Old phone number not found."
        );
    }
}
