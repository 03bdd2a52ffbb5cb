#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
