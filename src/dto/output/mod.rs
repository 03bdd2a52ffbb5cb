mod broadcast_code;
mod issued_ticket;
mod ticket;
mod ticket_count;

pub use broadcast_code::*;
pub use issued_ticket::*;
pub use ticket::*;
pub use ticket_count::*;
