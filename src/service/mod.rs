pub mod ticket_broadcast_service;
pub mod tickets_service;
