use serde::Serialize;

#[derive(Serialize)]
pub struct TicketCount {
    pub count: i64,
}
