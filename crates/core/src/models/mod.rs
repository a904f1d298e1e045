pub mod availability;
pub mod selection;
pub mod time;
