pub struct TicketsServiceConfig {
    pub max_tickets_per_vatin: i64,
}
