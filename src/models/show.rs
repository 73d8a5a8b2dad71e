use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Идентификатор показа. На проводе всегда строка (`"1"`), внутри число.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShowId(u32);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid show id: {0:?}")]
pub struct InvalidShowId(pub String);

impl ShowId {
    pub const fn new(id: u32) -> Self {
        ShowId(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for ShowId {
    type Err = InvalidShowId;

    /// Accepts only canonical decimal text: `"01"`, `"+1"` or `" 1"` are not show ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(InvalidShowId(s.to_string()));
        }
        s.parse::<u32>()
            .map(ShowId)
            .map_err(|_| InvalidShowId(s.to_string()))
    }
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ShowId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A screen with a fixed seat capacity, registered once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Show {
    pub id: ShowId,
    pub capacity: u32,
}

impl Show {
    pub const fn new(id: u32, capacity: u32) -> Self {
        Show { id: ShowId::new(id), capacity }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowStatus {
    pub show: ShowId,
    pub seat_capacity: u32,
    pub booked_seats: usize,
    /// Может быть отрицательным: буквенные места не ограничены вместимостью.
    pub available_seats: i64,
}

impl ShowStatus {
    pub fn new(show: &Show, booked_seats: usize) -> Self {
        ShowStatus {
            show: show.id,
            seat_capacity: show.capacity,
            booked_seats,
            available_seats: i64::from(show.capacity) - booked_seats as i64,
        }
    }
}
