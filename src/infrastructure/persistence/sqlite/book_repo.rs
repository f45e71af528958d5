//! SQLite Book Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    BookRecord, BookRepositoryPort, NewBookRecord, NewReviewRecord, RepositoryError, ReviewRecord,
};
use crate::domain::book::{BookId, ReviewId};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    genre: String,
    created_at: String,
}

impl TryFrom<BookRow> for BookRecord {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(BookRecord {
            id: BookId::new(row.id),
            title: row.title,
            author: row.author,
            genre: row.genre,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

#[derive(FromRow)]
struct ReviewRow {
    id: i64,
    book_id: i64,
    reviewer: String,
    comment: String,
    rating: i64,
    created_at: String,
}

impl TryFrom<ReviewRow> for ReviewRecord {
    type Error = RepositoryError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(ReviewRecord {
            id: ReviewId::new(row.id),
            book_id: BookId::new(row.book_id),
            reviewer: row.reviewer,
            comment: row.comment,
            rating: row.rating,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn save_book(&self, book: &NewBookRecord) -> Result<BookRecord, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, genre, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(BookRecord {
            id: BookId::new(result.last_insert_rowid()),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            created_at: book.created_at,
        })
    }

    async fn find_book_by_id(&self, id: BookId) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, title, author, genre, created_at FROM books WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(BookRecord::try_from).transpose()
    }

    async fn find_all_books(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, title, author, genre, created_at FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(BookRecord::try_from).collect()
    }

    async fn delete_book_by_id(&self, id: BookId) -> Result<(), RepositoryError> {
        // 使用事务确保原子性
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        // 删除关联的 reviews（外键 ON DELETE CASCADE 之外显式删除）
        let removed = sqlx::query("DELETE FROM reviews WHERE book_id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?
            .rows_affected();

        // 删除 book
        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        tracing::debug!(book_id = %id, reviews = removed, "Book row deleted with reviews");

        Ok(())
    }

    async fn exists_book_by_id(&self, id: BookId) -> Result<bool, RepositoryError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(exists != 0)
    }

    async fn save_review(&self, review: &NewReviewRecord) -> Result<ReviewRecord, RepositoryError> {
        // 所属书籍已不存在时由外键约束拒绝
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (book_id, reviewer, comment, rating, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.book_id.value())
        .bind(&review.reviewer)
        .bind(&review.comment)
        .bind(review.rating)
        .bind(review.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(ReviewRecord {
            id: ReviewId::new(result.last_insert_rowid()),
            book_id: review.book_id,
            reviewer: review.reviewer.clone(),
            comment: review.comment.clone(),
            rating: review.rating,
            created_at: review.created_at,
        })
    }

    async fn find_reviews_by_book_id(
        &self,
        book_id: BookId,
    ) -> Result<Vec<ReviewRecord>, RepositoryError> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            "SELECT id, book_id, reviewer, comment, rating, created_at FROM reviews WHERE book_id = ? ORDER BY id",
        )
        .bind(book_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(ReviewRecord::try_from).collect()
    }
}
