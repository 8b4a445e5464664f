//! Repository layer for in-memory state
//!
//! All mutable state lives in one [`LibraryState`] behind a single process-wide
//! mutex. The per-domain repositories share clones of the same handle, and
//! compound lending transitions run through [`Repository::transaction`] so the
//! catalog and the ledger can never be observed mid-transition: no caller sees
//! a decremented copy count without its ledger entry, or vice versa.

pub mod books;
pub mod loans;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::{AppError, AppResult},
    models::{book::Book, loan::BorrowRecord},
};

/// Shared handle to the library state
pub(crate) type SharedState = Arc<Mutex<LibraryState>>;

/// The whole in-memory library: the book catalog and the loan ledger.
///
/// Both collections are insertion-ordered. Books are always located by
/// scanning for a matching id — an id is never used as a position index.
/// The ledger's order is meaningful only as the tie-break when several
/// records match a (book_id, user_id) pair: the oldest one is removed first.
#[derive(Debug, Default)]
pub struct LibraryState {
    pub books: Vec<Book>,
    pub loans: Vec<BorrowRecord>,
}

impl LibraryState {
    fn book_position(&self, id: i32) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Look up a book by id
    pub fn get_book(&self, id: i32) -> AppResult<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Add a new book; ids must be unique
    pub fn add_book(&mut self, book: Book) -> AppResult<Book> {
        if self.book_position(book.id).is_some() {
            return Err(AppError::Conflict(format!(
                "Book with id {} already exists",
                book.id
            )));
        }
        self.books.push(book.clone());
        Ok(book)
    }

    /// Replace the full record matched by `id`. The stored id always follows
    /// the path id, regardless of what the payload carries.
    pub fn update_book(&mut self, id: i32, mut book: Book) -> AppResult<Book> {
        let pos = self
            .book_position(id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        book.id = id;
        self.books[pos] = book.clone();
        Ok(book)
    }

    /// Remove and return the book matched by `id`
    pub fn delete_book(&mut self, id: i32) -> AppResult<Book> {
        let pos = self
            .book_position(id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        Ok(self.books.remove(pos))
    }

    /// Atomically apply `delta` to a book's available-copy counter.
    /// Fails without touching the counter if the result would be negative.
    pub fn adjust_copies(&mut self, id: i32, delta: i32) -> AppResult<&Book> {
        let pos = self
            .book_position(id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        let book = &mut self.books[pos];
        book.available_copies = book.available_copies.checked_add_signed(delta).ok_or_else(|| {
            AppError::Invalid(format!(
                "Adjusting copies of book {} by {} would make the count negative",
                id, delta
            ))
        })?;
        Ok(&self.books[pos])
    }

    /// Append an outstanding loan record to the ledger
    pub fn append_loan(&mut self, record: BorrowRecord) {
        self.loans.push(record);
    }

    /// Remove and return the first ledger entry matching (book_id, user_id)
    pub fn take_loan(&mut self, book_id: i32, user_id: &str) -> AppResult<BorrowRecord> {
        let pos = self
            .loans
            .iter()
            .position(|l| l.book_id == book_id && l.user_id == user_id)
            .ok_or_else(|| {
                AppError::LoanNotFound(format!(
                    "No outstanding loan of book {} for user '{}'",
                    book_id, user_id
                ))
            })?;
        Ok(self.loans.remove(pos))
    }
}

/// Lock the shared state, surfacing poisoning as an internal error
pub(crate) fn lock(state: &SharedState) -> AppResult<MutexGuard<'_, LibraryState>> {
    state
        .lock()
        .map_err(|_| AppError::Internal("library state lock poisoned".to_string()))
}

/// Main repository struct holding the shared in-memory state
#[derive(Clone)]
pub struct Repository {
    state: SharedState,
    pub books: books::BooksRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create a repository over a fresh, empty library state
    pub fn new() -> Self {
        let state: SharedState = Arc::new(Mutex::new(LibraryState::default()));
        Self {
            books: books::BooksRepository::new(state.clone()),
            loans: loans::LoansRepository::new(state.clone()),
            state,
        }
    }

    /// Run `f` under a single lock acquisition.
    ///
    /// Multi-step transitions (borrow, return) go through here so the whole
    /// sequence is one atomic unit with respect to every other caller.
    pub fn transaction<T>(&self, f: impl FnOnce(&mut LibraryState) -> AppResult<T>) -> AppResult<T> {
        let mut state = lock(&self.state)?;
        f(&mut state)
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
