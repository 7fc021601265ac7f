pub mod a001_booking_order;
