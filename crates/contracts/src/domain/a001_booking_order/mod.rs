pub mod aggregate;

pub use aggregate::{BookedBy, BookedRoom, BookingOrderDto, BookingOrderListResponse};
