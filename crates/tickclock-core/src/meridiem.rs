use crate::error::ClockError;
use core::fmt;
use core::str::FromStr;

/// The AM/PM half of a 12-hour day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl Meridiem {
    /// Meridiem for an internal 0..=23 hour.
    pub const fn from_hour(hour: u8) -> Self {
        if hour < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl FromStr for Meridiem {
    type Err = ClockError;

    /// Accepts `AM` or `PM` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AM") {
            Ok(Self::Am)
        } else if s.eq_ignore_ascii_case("PM") {
            Ok(Self::Pm)
        } else {
            Err(ClockError::InvalidMeridiem)
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
