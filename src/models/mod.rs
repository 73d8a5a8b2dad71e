pub mod seat;
pub mod show;

pub use seat::{SeatFormatError, SeatLabel, SeatRangeError};
pub use show::{InvalidShowId, Show, ShowId, ShowStatus};
