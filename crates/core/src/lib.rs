//! # Slotbook Core
//!
//! The availability slot engine behind the booking flow. It turns a
//! provider's daily open/close window into hourly start options, gates
//! calendar dates by the provider's working weekdays, and coordinates the
//! date → from-time → to-time selection a customer makes.
//!
//! Everything here is synchronous and free of I/O. Functions are pure apart
//! from the [`coordinator::SelectionCoordinator`], which transforms a
//! [`models::selection::SlotSelection`] value it is handed.

pub mod coordinator;
pub mod day_gate;
pub mod errors;
pub mod models;
pub mod slots;
