use crate::error::ClockError;
use core::fmt;

/// An hour on a 12-hour dial, always in `1..=12`.
///
/// Advancing past 12 goes straight to 1; there is no zero state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourOfHalfDay(u8);

impl HourOfHalfDay {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;
    pub const TWELVE: Self = Self(12);

    pub const fn new(hour: u8) -> Result<Self, ClockError> {
        if hour < Self::MIN || hour > Self::MAX {
            return Err(ClockError::HourOutOfRange {
                hour,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(hour))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Moves to the next hour and returns `true` if it is now 12.
    pub fn advance(&mut self) -> bool {
        self.0 = if self.0 == Self::MAX { Self::MIN } else { self.0 + 1 };
        self.0 == Self::MAX
    }
}

impl Default for HourOfHalfDay {
    fn default() -> Self {
        Self::TWELVE
    }
}

impl fmt::Display for HourOfHalfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::HourOfHalfDay;
    use crate::error::ClockError;

    #[test]
    fn rejects_zero_and_thirteen() {
        assert_eq!(
            HourOfHalfDay::new(0),
            Err(ClockError::HourOutOfRange {
                hour: 0,
                min: 1,
                max: 12
            })
        );
        assert!(HourOfHalfDay::new(13).is_err());
        assert_eq!(HourOfHalfDay::new(7).map(HourOfHalfDay::get), Ok(7));
    }

    #[test]
    fn advance_skips_zero() {
        let mut hour = HourOfHalfDay::TWELVE;
        assert!(!hour.advance());
        assert_eq!(hour.get(), 1);
    }

    #[test]
    fn advance_reports_reaching_twelve() {
        let mut hour = HourOfHalfDay::new(11).unwrap();
        assert!(hour.advance());
        assert_eq!(hour, HourOfHalfDay::TWELVE);
    }

    #[test]
    fn full_cycle_visits_each_hour_once() {
        let mut hour = HourOfHalfDay::TWELVE;
        let mut seen = [false; 13];
        for _ in 0..12 {
            hour.advance();
            assert!(!seen[hour.get() as usize]);
            seen[hour.get() as usize] = true;
        }
        assert_eq!(hour, HourOfHalfDay::TWELVE);
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn renders_zero_padded() {
        assert_eq!(HourOfHalfDay::new(3).unwrap().to_string(), "03");
    }
}
