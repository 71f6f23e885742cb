//! `innkeep-guests` — guest directory domain.

pub mod guest;

pub use guest::{ContactInfo, Guest};
