pub mod booking_status;

pub use booking_status::BookingStatus;
