pub mod availability;
pub mod day;
pub mod musician;
pub mod piece;
pub mod time_slot;
