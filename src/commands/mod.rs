//! Line-oriented command layer.
//!
//! Parses whitespace-separated input lines into commands, runs them against
//! an [`AddressBook`](crate::models::AddressBook) and turns every result or
//! error into reply text in one place.

mod dispatcher;
mod parser;

pub use dispatcher::{render_error, Dispatcher, Outcome};
pub use parser::Command;
