//! Turning a raw input line into a [`Command`].

use crate::error::{CommandError, CommandResult};

const USAGE_NAME_PHONE: &str = "Give me name and phone please.";
const USAGE_CHANGE: &str = "Give me name, old phone and new phone please.";
const USAGE_NAME: &str = "Give me name please.";
const USAGE_NAME_BIRTHDAY: &str = "Give me name and birthday please.";

/// A parsed command with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,

    /// `add <name> <phone>`: create the contact or append a phone to it
    Add { name: String, phone: String },

    /// `change <name> <old> <new>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// `phone <name>`
    Phone { name: String },

    /// `all`
    All,

    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, birthday: String },

    /// `show-birthday <name>`
    ShowBirthday { name: String },

    /// `birthdays`
    Birthdays,

    /// `delete <name>`
    Delete { name: String },

    /// `close` or `exit`
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The first whitespace-separated token names the command and is matched
    /// case-insensitively; the remaining tokens are positional arguments.
    /// Surplus arguments are ignored. Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// - `CommandError::UnknownCommand` for an unrecognized command name
    /// - `CommandError::MissingArguments` when required arguments are absent
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match head.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take::<2>(&args, USAGE_NAME_PHONE)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = take::<3>(&args, USAGE_CHANGE)?;
                Command::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take::<1>(&args, USAGE_NAME)?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = take::<2>(&args, USAGE_NAME_BIRTHDAY)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take::<1>(&args, USAGE_NAME)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "delete" => {
                let [name] = take::<1>(&args, USAGE_NAME)?;
                Command::Delete { name }
            }
            "close" | "exit" => Command::Exit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// The first `N` arguments, or the usage hint if there are fewer.
fn take<const N: usize>(args: &[&str], usage: &'static str) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments(usage));
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
