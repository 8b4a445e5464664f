//! Loans repository: the outstanding-loan ledger

use crate::{error::AppResult, models::loan::BorrowRecord};

use super::{lock, SharedState};

#[derive(Clone)]
pub struct LoansRepository {
    state: SharedState,
}

impl LoansRepository {
    pub(crate) fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Append a new outstanding loan entry
    pub fn append(&self, record: BorrowRecord) -> AppResult<()> {
        let mut state = lock(&self.state)?;
        state.append_loan(record);
        Ok(())
    }

    /// Remove and return the first entry matching (book_id, user_id),
    /// scanning in insertion order
    pub fn find_and_remove(&self, book_id: i32, user_id: &str) -> AppResult<BorrowRecord> {
        let mut state = lock(&self.state)?;
        state.take_loan(book_id, user_id)
    }

    /// All outstanding loans in insertion order
    pub fn list(&self) -> AppResult<Vec<BorrowRecord>> {
        let state = lock(&self.state)?;
        Ok(state.loans.clone())
    }

    /// Count outstanding loans
    pub fn count(&self) -> AppResult<usize> {
        let state = lock(&self.state)?;
        Ok(state.loans.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Repository;
    use crate::error::AppError;
    use crate::models::loan::BorrowRecord;
    use chrono::Utc;

    fn record(book_id: i32, user_id: &str, title: &str) -> BorrowRecord {
        BorrowRecord {
            book_id,
            user_id: user_id.to_string(),
            book_title: title.to_string(),
            borrowed_at: Utc::now(),
        }
    }

    #[test]
    fn find_and_remove_takes_the_oldest_matching_entry() {
        let repo = Repository::new();
        repo.loans.append(record(1, "u1", "first")).unwrap();
        repo.loans.append(record(1, "u1", "second")).unwrap();

        let removed = repo.loans.find_and_remove(1, "u1").unwrap();
        assert_eq!(removed.book_title, "first");

        let remaining = repo.loans.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].book_title, "second");
    }

    #[test]
    fn find_and_remove_matches_on_both_book_and_user() {
        let repo = Repository::new();
        repo.loans.append(record(1, "u1", "a")).unwrap();
        repo.loans.append(record(2, "u2", "b")).unwrap();

        let err = repo.loans.find_and_remove(1, "u2").unwrap_err();
        assert!(matches!(err, AppError::LoanNotFound(_)));
        assert_eq!(repo.loans.count().unwrap(), 2);
    }

    #[test]
    fn find_and_remove_on_empty_ledger_is_not_found() {
        let repo = Repository::new();
        let err = repo.loans.find_and_remove(7, "nobody").unwrap_err();
        assert!(matches!(err, AppError::LoanNotFound(_)));
    }
}
