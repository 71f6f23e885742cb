//! `innkeep-bookings` — reservation domain: booking lifecycle + pricing.

pub mod booking;

pub use booking::{quote_total, Booking, BookingStatus};
