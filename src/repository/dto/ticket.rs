use time::OffsetDateTime;
use uuid::Uuid;

///
/// One issued admission ticket, exactly as persisted.
///
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub vatin: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime,
}
