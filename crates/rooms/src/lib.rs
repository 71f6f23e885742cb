//! `innkeep-rooms` — room catalog domain.

pub mod room;

pub use room::{Room, RoomStatus, RoomType};
