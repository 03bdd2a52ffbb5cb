mod ticket_broadcast_service;
mod ticket_broadcast_service_impl;

pub use ticket_broadcast_service::*;
pub use ticket_broadcast_service_impl::*;
