use crate::error::CounterError;
use alloc::string::String;
use core::fmt;

/// A wrap-around integer counter over `0..limit`.
///
/// The limit is fixed at construction. The value starts at zero and only
/// changes through [`increment`](Self::increment) or a successful
/// [`set_value`](Self::set_value), so `value < limit` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundedCounter {
    value: u8,
    limit: u8,
}

impl BoundedCounter {
    /// Creates a counter at zero with the given modulus.
    pub const fn new(limit: u8) -> Result<Self, CounterError> {
        if limit == 0 {
            return Err(CounterError::ZeroLimit);
        }
        Ok(Self { value: 0, limit })
    }

    /// Advances by one, wrapping to zero at the limit.
    ///
    /// Returns `true` when the counter rolled over.
    pub fn increment(&mut self) -> bool {
        self.value = ((self.value as u16 + 1) % self.limit as u16) as u8;
        self.value == 0
    }

    /// Sets the value directly. Values outside `0..limit` are rejected and
    /// the counter keeps its current value.
    pub fn set_value(&mut self, value: u8) -> Result<(), CounterError> {
        if value >= self.limit {
            return Err(CounterError::OutOfRange {
                value,
                limit: self.limit,
            });
        }
        self.value = value;
        Ok(())
    }

    pub const fn value(self) -> u8 {
        self.value
    }

    pub const fn limit(self) -> u8 {
        self.limit
    }

    /// Renders the value zero-padded to two digits.
    pub fn display_value(self) -> String {
        alloc::format!("{:02}", self.value)
    }
}

/// Counter for a compile-time limit. Only used to build constants, where a
/// zero limit fails the build instead of panicking at runtime.
pub(crate) const fn fixed_counter(limit: u8) -> BoundedCounter {
    match BoundedCounter::new(limit) {
        Ok(counter) => counter,
        Err(_) => panic!("counter limit must be non-zero"),
    }
}

impl fmt::Display for BoundedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.value)
    }
}
