use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::info;

use crate::error::{BookingError, CancelError, LedgerError, ShowNotFound};
use crate::models::{SeatLabel, SeatRangeError, Show, ShowId, ShowStatus};

/// Successful booking, its `Display` is the message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub show: ShowId,
    pub seat: String,
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket booked successfully for Show {}, Seat {}.", self.show, self.seat)
    }
}

// Один экран: вместимость не меняется, набор мест под своим замком
struct Screen {
    show: Show,
    booked: RwLock<Vec<String>>,
}

/// Реестр показов и забронированных мест.
///
/// Порядок показов фиксируется при создании и используется во всех выборках.
/// Проверка "место свободно" и запись выполняются под одним write-замком показа,
/// поэтому два параллельных запроса не могут занять одно место.
pub struct BookingLedger {
    screens: Vec<Screen>,
    index: HashMap<ShowId, usize>,
}

impl BookingLedger {
    pub fn new(shows: impl IntoIterator<Item = Show>) -> Result<Self, LedgerError> {
        let mut screens = Vec::new();
        let mut index = HashMap::new();

        for show in shows {
            if show.capacity == 0 {
                return Err(LedgerError::ZeroCapacity(show.id));
            }
            if index.insert(show.id, screens.len()).is_some() {
                return Err(LedgerError::DuplicateShow(show.id));
            }
            screens.push(Screen { show, booked: RwLock::new(Vec::new()) });
        }

        Ok(Self { screens, index })
    }

    fn screen(&self, show: ShowId) -> Option<&Screen> {
        self.index.get(&show).map(|&i| &self.screens[i])
    }

    /// Shows in registration order.
    pub fn shows(&self) -> impl Iterator<Item = &Show> + '_ {
        self.screens.iter().map(|screen| &screen.show)
    }

    pub fn status(&self, show: ShowId) -> Result<ShowStatus, ShowNotFound> {
        let screen = self.screen(show).ok_or(ShowNotFound)?;
        let booked = screen.booked.read().len();
        Ok(ShowStatus::new(&screen.show, booked))
    }

    /// Labels booked for a show, in the order they were booked.
    pub fn booked_seats(&self, show: ShowId) -> Result<Vec<String>, ShowNotFound> {
        let screen = self.screen(show).ok_or(ShowNotFound)?;
        Ok(screen.booked.read().clone())
    }

    /// Бронирует место. Проверки идут строго по порядку, первая неудачная
    /// определяет ошибку; состояние меняется только после всех проверок.
    pub fn book(&self, show: ShowId, seat: &str) -> Result<Booking, BookingError> {
        if seat.is_empty() {
            return Err(BookingError::MissingField);
        }
        let screen = self.screen(show).ok_or(BookingError::UnknownShow)?;

        let label = SeatLabel::parse(seat).map_err(|_| BookingError::InvalidFormat { show })?;
        label
            .check_bounds(screen.show.capacity)
            .map_err(|err| match err {
                SeatRangeError::Number { capacity } => BookingError::SeatNumberOutOfRange { show, capacity },
                SeatRangeError::Label { top_row } => BookingError::SeatLabelOutOfRange { show, top_row },
            })?;

        let mut booked = screen.booked.write();
        if booked.iter().any(|taken| taken == seat) {
            return Err(BookingError::AlreadyBooked { show, seat: seat.to_string() });
        }
        booked.push(seat.to_string());
        drop(booked);

        info!(show = %show, seat = %seat, "Seat booked");
        Ok(Booking { show, seat: seat.to_string() })
    }

    /// Снимает бронь. Формат метки не проверяется, ищется точное совпадение.
    pub fn cancel(&self, show: ShowId, seat: &str) -> Result<(), CancelError> {
        if seat.is_empty() {
            return Err(CancelError::MissingField);
        }
        let screen = self.screen(show).ok_or(CancelError::UnknownShow)?;

        let mut booked = screen.booked.write();
        let position = booked
            .iter()
            .position(|taken| taken == seat)
            .ok_or(CancelError::SeatNotFound)?;
        booked.remove(position);
        drop(booked);

        info!(show = %show, seat = %seat, "Booking canceled");
        Ok(())
    }

    fn has_free_seats(screen: &Screen) -> bool {
        screen.booked.read().len() < screen.show.capacity as usize
    }

    /// Shows whose booked count is still below capacity, in registration order.
    pub fn available_shows(&self) -> Vec<ShowId> {
        self.screens
            .iter()
            .filter(|screen| Self::has_free_seats(screen))
            .map(|screen| screen.show.id)
            .collect()
    }

    pub fn next_available_show(&self) -> Option<ShowId> {
        self.screens
            .iter()
            .find(|screen| Self::has_free_seats(screen))
            .map(|screen| screen.show.id)
    }
}
