use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Issues a new ticket: validates the request, enforces the
    /// per-vatin quota, persists the ticket and publishes its QR code
    /// for the landing page poller.
    ///
    /// The lookup url embedded in the code points at the given host.
    ///
    /// ### Returns
    /// [output::IssuedTicket] with the generated id and the QR code
    ///
    /// ### Errors
    /// - [Error::MissingField] / [Error::InvalidVatinFormat] /
    ///   [Error::InvalidNameFormat] when the request is malformed
    /// - [Error::QuotaExceeded] when the vatin already holds
    ///   the maximum number of tickets
    ///
    async fn issue_ticket(
        &self,
        request: input::TicketRequest,
        host: String,
    ) -> Result<output::IssuedTicket, Error>;

    ///
    /// Finds one issued ticket. Requires the authenticated principal
    /// requesting the detail view.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when no ticket has the id
    ///
    async fn find_ticket(&self, id: Uuid, user: User) -> Result<output::Ticket, Error>;

    ///
    /// Counts all tickets issued so far. Public display value.
    ///
    async fn count_tickets(&self) -> Result<output::TicketCount, Error>;
}
