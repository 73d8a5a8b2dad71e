pub mod ledger;

pub use ledger::{Booking, BookingLedger};
