use super::{dto::Ticket, error::Error};
use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Append-only store of issued tickets.
/// No update or delete is ever exposed.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket.
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation]
    /// when a ticket with the same id already exists
    ///
    async fn insert(
        &self,
        id: Uuid,
        vatin: &str,
        first_name: &str,
        last_name: &str,
        created_at: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// Counts tickets issued for the given vatin.
    /// Always reads the currently persisted count.
    ///
    async fn count_by_vatin(&self, vatin: &str) -> Result<i64, Error>;

    ///
    /// Counts all issued tickets.
    ///
    async fn count_all(&self) -> Result<i64, Error>;

    ///
    /// Finds one ticket by its id.
    ///
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, Error>;
}
