use axum::async_trait;

///
/// Process-wide slot with the QR code of the most recently issued ticket.
///
/// The slot is shared between all users: concurrent issuers overwrite
/// each other's published code and the last writer wins. The landing page
/// polls it without authentication, so it is advisory display state,
/// never authoritative.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketBroadcastService: Send + Sync {
    ///
    /// Publishes the code, overwriting whatever was there.
    ///
    async fn publish(&self, qr_code: String);

    ///
    /// Empties the slot. Called on logout.
    ///
    async fn clear(&self);

    ///
    /// Non-destructive read of the last published code.
    ///
    async fn peek(&self) -> Option<String>;
}
