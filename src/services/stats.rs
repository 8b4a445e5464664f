//! Statistics service

use crate::{
    api::stats::{BookStats, LoanStats, StatsResponse},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Snapshot of catalog and loan counters, taken under one lock so the
    /// numbers are mutually consistent.
    pub fn get_stats(&self) -> AppResult<StatsResponse> {
        self.repository.transaction(|state| {
            let copies_available: u64 = state
                .books
                .iter()
                .map(|b| u64::from(b.available_copies))
                .sum();
            let active_loans = state.loans.len() as u64;

            Ok(StatsResponse {
                books: BookStats {
                    titles: state.books.len() as u64,
                    total_copies: copies_available + active_loans,
                    copies_available,
                },
                loans: LoanStats {
                    active: active_loans,
                },
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Book;
    use crate::services::lending::LendingService;

    #[test]
    fn counters_reflect_borrows() {
        let repo = Repository::new();
        repo.books
            .create(Book {
                id: 1,
                title: "Design Patterns".to_string(),
                author: "Erich Gamma".to_string(),
                available_copies: 3,
            })
            .unwrap();

        let lending = LendingService::new(repo.clone());
        lending.borrow(1, "u1").unwrap();

        let stats = StatsService::new(repo).get_stats().unwrap();
        assert_eq!(stats.books.titles, 1);
        assert_eq!(stats.books.copies_available, 2);
        assert_eq!(stats.books.total_copies, 3);
        assert_eq!(stats.loans.active, 1);
    }
}
