use core::fmt;

/// Errors raised by [`BoundedCounter`](crate::counter::BoundedCounter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterError {
    ZeroLimit,
    OutOfRange { value: u8, limit: u8 },
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLimit => f.write_str("counter limit must be non-zero"),
            Self::OutOfRange { value, limit } => {
                write!(f, "value {value} outside counter range 0..{limit}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CounterError {}

/// Errors raised when setting the time or meridiem of a clock display.
///
/// The clock is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    Counter(CounterError),
    HourOutOfRange { hour: u8, min: u8, max: u8 },
    InvalidMeridiem,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counter(err) => write!(f, "counter error: {err}"),
            Self::HourOutOfRange { hour, min, max } => {
                write!(f, "hour {hour} outside range {min}..={max}")
            }
            Self::InvalidMeridiem => f.write_str("meridiem must be AM or PM"),
        }
    }
}

impl From<CounterError> for ClockError {
    fn from(err: CounterError) -> Self {
        Self::Counter(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Counter(err) => Some(err),
            _ => None,
        }
    }
}
