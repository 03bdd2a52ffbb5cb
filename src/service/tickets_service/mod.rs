mod dto;
mod qr_code;
mod ticket_validation;
mod tickets_service;
mod tickets_service_impl;

pub use dto::*;
pub use tickets_service::*;
pub use tickets_service_impl::*;
