pub mod availability;
pub mod selection;
