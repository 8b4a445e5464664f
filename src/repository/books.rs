//! Books repository: the catalog store

use crate::{error::AppResult, models::book::Book};

use super::{lock, SharedState};

#[derive(Clone)]
pub struct BooksRepository {
    state: SharedState,
}

impl BooksRepository {
    pub(crate) fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// All books in insertion order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        let state = lock(&self.state)?;
        Ok(state.books.clone())
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let state = lock(&self.state)?;
        Ok(state.get_book(id)?.clone())
    }

    /// Create a new book; fails with Conflict if the id is already taken
    pub fn create(&self, book: Book) -> AppResult<Book> {
        let mut state = lock(&self.state)?;
        state.add_book(book)
    }

    /// Replace the record matched by `id`; the path id wins over the payload id
    pub fn update(&self, id: i32, book: Book) -> AppResult<Book> {
        let mut state = lock(&self.state)?;
        state.update_book(id, book)
    }

    /// Remove and return the record matched by `id`
    pub fn delete(&self, id: i32) -> AppResult<Book> {
        let mut state = lock(&self.state)?;
        state.delete_book(id)
    }

    /// Atomically apply `delta` (±1) to a book's available-copy counter
    pub fn adjust_copies(&self, id: i32, delta: i32) -> AppResult<Book> {
        let mut state = lock(&self.state)?;
        let book = state.adjust_copies(id, delta)?;
        Ok(book.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Repository;
    use crate::error::AppError;
    use crate::models::book::Book;

    fn book(id: i32, copies: u32) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            author: "Test Author".to_string(),
            available_copies: copies,
        }
    }

    #[test]
    fn create_rejects_duplicate_id_and_leaves_catalog_unchanged() {
        let repo = Repository::new();
        repo.books.create(book(1, 4)).unwrap();

        let err = repo.books.create(book(1, 9)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let books = repo.books.list().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].available_copies, 4);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let repo = Repository::new();
        for id in [3, 1, 2] {
            repo.books.create(book(id, 1)).unwrap();
        }
        let ids: Vec<i32> = repo.books.list().unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn update_forces_id_from_path() {
        let repo = Repository::new();
        repo.books.create(book(5, 2)).unwrap();

        // Payload claims a different id; the path id must win.
        let updated = repo.books.update(5, book(99, 7)).unwrap();
        assert_eq!(updated.id, 5);
        assert_eq!(updated.available_copies, 7);
        assert!(repo.books.get_by_id(5).is_ok());
        assert!(matches!(
            repo.books.get_by_id(99).unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let repo = Repository::new();
        let err = repo.books.update(42, book(42, 1)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn delete_locates_records_by_id_not_by_position() {
        let repo = Repository::new();
        // Ids far beyond any valid index; an index-as-id lookup would panic
        // or remove the wrong record.
        repo.books.create(book(10, 1)).unwrap();
        repo.books.create(book(20, 1)).unwrap();

        let removed = repo.books.delete(20).unwrap();
        assert_eq!(removed.id, 20);

        let remaining: Vec<i32> = repo.books.list().unwrap().iter().map(|b| b.id).collect();
        assert_eq!(remaining, vec![10]);
    }

    #[test]
    fn delete_missing_id_leaves_catalog_unchanged() {
        let repo = Repository::new();
        repo.books.create(book(1, 1)).unwrap();

        let err = repo.books.delete(99).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.books.list().unwrap().len(), 1);
    }

    #[test]
    fn adjust_copies_never_goes_negative() {
        let repo = Repository::new();
        repo.books.create(book(1, 1)).unwrap();

        assert_eq!(repo.books.adjust_copies(1, -1).unwrap().available_copies, 0);

        let err = repo.books.adjust_copies(1, -1).unwrap_err();
        assert!(matches!(err, AppError::Invalid(_)));
        // The failed decrement must not have touched the counter.
        assert_eq!(repo.books.get_by_id(1).unwrap().available_copies, 0);

        assert_eq!(repo.books.adjust_copies(1, 1).unwrap().available_copies, 1);
    }
}
