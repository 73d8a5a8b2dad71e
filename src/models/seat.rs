use std::fmt;
use thiserror::Error;

/// Самый большой номер места в ряду для буквенных меток (`A1`..`A99`).
pub const MAX_SEAT_IN_ROW: u8 = 99;

/// Seat label, either a plain seat number (`"17"`) or a row letter with a seat-in-row number (`"C12"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatLabel {
    /// Saturates at `u64::MAX` for very long digit strings, which then never fit any capacity.
    Numeric(u64),
    Alphabetic { row: char, number: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("seat label is neither a seat number nor a row letter followed by one or two digits")]
pub struct SeatFormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatRangeError {
    #[error("seat number must be between 1 and {capacity}")]
    Number { capacity: u32 },
    #[error("seat label must be between A1 and {top_row}99")]
    Label { top_row: char },
}

impl SeatLabel {
    /// Разбирает метку места. Формат строгий и регистрозависимый:
    /// `^[1-9][0-9]*$` для номера и `^[A-Z][0-9]{1,2}$` для ряда.
    pub fn parse(raw: &str) -> Result<Self, SeatFormatError> {
        let bytes = raw.as_bytes();
        match bytes {
            [first, rest @ ..] if (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit) => {
                let number = bytes.iter().fold(0u64, |acc, digit| {
                    acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
                });
                Ok(SeatLabel::Numeric(number))
            }
            [row, digits @ ..]
                if row.is_ascii_uppercase()
                    && (1..=2).contains(&digits.len())
                    && digits.iter().all(u8::is_ascii_digit) =>
            {
                let number = digits.iter().fold(0u8, |acc, digit| acc * 10 + (digit - b'0'));
                Ok(SeatLabel::Alphabetic { row: char::from(*row), number })
            }
            _ => Err(SeatFormatError),
        }
    }

    /// Zero-based row index, `'A'` is 0.
    pub fn row_index(&self) -> Option<u32> {
        match self {
            SeatLabel::Numeric(_) => None,
            SeatLabel::Alphabetic { row, .. } => Some(u32::from(*row) - u32::from('A')),
        }
    }

    /// Checks the label against the capacity of a screen.
    ///
    /// Rows are bounded by `capacity` itself, not by the alphabet, so for the
    /// regular 45/60/75 seat screens every row letter passes.
    pub fn check_bounds(&self, capacity: u32) -> Result<(), SeatRangeError> {
        match *self {
            SeatLabel::Numeric(number) => {
                if number < 1 || number > u64::from(capacity) {
                    return Err(SeatRangeError::Number { capacity });
                }
            }
            SeatLabel::Alphabetic { number, .. } => {
                let row_index = self.row_index().unwrap_or_default();
                if row_index >= capacity || number < 1 || number > MAX_SEAT_IN_ROW {
                    return Err(SeatRangeError::Label { top_row: top_row_letter(capacity) });
                }
            }
        }
        Ok(())
    }
}

/// Буква "последнего" ряда для сообщения об ошибке: код `65 + capacity - 1`.
/// При capacity > 26 это уже не латинская буква, сообщение воспроизводится как есть.
pub fn top_row_letter(capacity: u32) -> char {
    let code = 64u32.wrapping_add(capacity) & 0xFFFF;
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatLabel::Numeric(number) => write!(f, "{}", number),
            SeatLabel::Alphabetic { row, number } => write!(f, "{}{}", row, number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_labels() {
        assert_eq!(SeatLabel::parse("1"), Ok(SeatLabel::Numeric(1)));
        assert_eq!(SeatLabel::parse("45"), Ok(SeatLabel::Numeric(45)));
        assert_eq!(SeatLabel::parse("1000"), Ok(SeatLabel::Numeric(1000)));
    }

    #[test]
    fn parses_alphabetic_labels() {
        assert_eq!(SeatLabel::parse("A1"), Ok(SeatLabel::Alphabetic { row: 'A', number: 1 }));
        assert_eq!(SeatLabel::parse("Z99"), Ok(SeatLabel::Alphabetic { row: 'Z', number: 99 }));
        assert_eq!(SeatLabel::parse("B00"), Ok(SeatLabel::Alphabetic { row: 'B', number: 0 }));
    }

    #[test]
    fn rejects_malformed_labels() {
        for raw in ["", "0", "012", "a1", "A", "A100", "AB1", "1A", " 1", "1 ", "-3", "+3", "Ä1", "１"] {
            assert_eq!(SeatLabel::parse(raw), Err(SeatFormatError), "label {:?}", raw);
        }
    }

    #[test]
    fn huge_numbers_saturate_and_fail_range() {
        let label = SeatLabel::parse("99999999999999999999999999").unwrap();
        assert_eq!(label, SeatLabel::Numeric(u64::MAX));
        assert_eq!(label.check_bounds(45), Err(SeatRangeError::Number { capacity: 45 }));
    }

    #[test]
    fn numeric_bounds_follow_capacity() {
        assert!(SeatLabel::Numeric(1).check_bounds(45).is_ok());
        assert!(SeatLabel::Numeric(45).check_bounds(45).is_ok());
        assert_eq!(
            SeatLabel::Numeric(46).check_bounds(45),
            Err(SeatRangeError::Number { capacity: 45 })
        );
    }

    #[test]
    fn alphabetic_bounds_use_row_index_and_seat_number() {
        assert!(SeatLabel::parse("A1").unwrap().check_bounds(45).is_ok());
        assert!(SeatLabel::parse("Z99").unwrap().check_bounds(45).is_ok());
        assert_eq!(
            SeatLabel::parse("A0").unwrap().check_bounds(45),
            Err(SeatRangeError::Label { top_row: 'm' })
        );
        // ряд C имеет индекс 2, при вместимости 2 он уже вне зала
        assert!(SeatLabel::parse("B5").unwrap().check_bounds(2).is_ok());
        assert_eq!(
            SeatLabel::parse("C5").unwrap().check_bounds(2),
            Err(SeatRangeError::Label { top_row: 'B' })
        );
    }

    #[test]
    fn top_row_letter_is_not_clamped_to_the_alphabet() {
        assert_eq!(top_row_letter(1), 'A');
        assert_eq!(top_row_letter(26), 'Z');
        assert_eq!(top_row_letter(45), 'm');
        assert_eq!(top_row_letter(60), '|');
        assert_eq!(top_row_letter(75), '\u{8b}');
    }

    #[test]
    fn row_index_starts_at_a() {
        assert_eq!(SeatLabel::parse("A7").unwrap().row_index(), Some(0));
        assert_eq!(SeatLabel::parse("D7").unwrap().row_index(), Some(3));
        assert_eq!(SeatLabel::Numeric(7).row_index(), None);
    }
}
