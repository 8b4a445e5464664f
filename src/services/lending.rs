//! Lending service: the borrow/return state machine
//!
//! Each transition runs inside a single [`Repository::transaction`] closure,
//! so the counter decrement and the ledger append (and, on return, the ledger
//! removal and the counter increment) form one atomic unit. Other callers
//! never observe the state between the two steps.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::loan::BorrowRecord,
    repository::Repository,
};

/// Outcome of a borrow or return transition: the title involved and the
/// book's updated availability. Carries enough for the transport layer to
/// build its response without re-reading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub book_title: String,
    pub available_copies: u32,
}

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow one copy of a book for a user.
    ///
    /// Fails with NotFound if the book is absent and with Unavailable if no
    /// copies are left; both leave the state untouched. On success the copy
    /// counter is decremented and a ledger entry appended in one step.
    pub fn borrow(&self, book_id: i32, user_id: &str) -> AppResult<LoanReceipt> {
        let receipt = self.repository.transaction(|state| {
            let book = state.get_book(book_id)?;
            if book.available_copies == 0 {
                return Err(AppError::Unavailable(format!(
                    "No copies of '{}' available",
                    book.title
                )));
            }
            let title = book.title.clone();

            let available_copies = state.adjust_copies(book_id, -1)?.available_copies;
            state.append_loan(BorrowRecord {
                book_id,
                user_id: user_id.to_string(),
                book_title: title.clone(),
                borrowed_at: Utc::now(),
            });

            Ok(LoanReceipt {
                book_title: title,
                available_copies,
            })
        })?;

        tracing::info!(
            "Lending: book {} borrowed by '{}' ({} copies left)",
            book_id,
            user_id,
            receipt.available_copies
        );
        Ok(receipt)
    }

    /// Return a borrowed copy.
    ///
    /// Removes the oldest matching ledger entry and increments the copy
    /// counter in one step. If the book was deleted from the catalog while on
    /// loan, the ledger entry stays removed and the inconsistency is surfaced
    /// as an error rather than papered over.
    pub fn return_book(&self, book_id: i32, user_id: &str) -> AppResult<LoanReceipt> {
        let receipt = self.repository.transaction(|state| {
            let record = state.take_loan(book_id, user_id)?;

            match state.adjust_copies(book_id, 1) {
                Ok(book) => Ok(LoanReceipt {
                    book_title: record.book_title,
                    available_copies: book.available_copies,
                }),
                Err(AppError::NotFound(_)) => Err(AppError::NotFound(format!(
                    "Book {} was removed from the catalog while on loan; the loan record has been closed",
                    book_id
                ))),
                Err(e) => Err(e),
            }
        })?;

        tracing::info!(
            "Lending: book {} returned by '{}' ({} copies available)",
            book_id,
            user_id,
            receipt.available_copies
        );
        Ok(receipt)
    }

    /// All outstanding loans in insertion order
    pub fn outstanding(&self) -> AppResult<Vec<BorrowRecord>> {
        self.repository.loans.list()
    }
}
