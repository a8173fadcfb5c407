use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage for a whole address book.
///
/// Implementations persist every contact with its name, phones in order and
/// optional birthday, and load them back without loss. A store that has never
/// been saved to loads as an empty book.
pub trait BookStore {
    /// Load the last saved book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
