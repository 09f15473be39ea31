use crate::counter::{fixed_counter, BoundedCounter};
use crate::error::ClockError;
use crate::meridiem::Meridiem;
use alloc::string::String;
use core::fmt::Write;

const HOURS_PER_DAY: BoundedCounter = fixed_counter(24);
pub(crate) const MINUTES_PER_HOUR: BoundedCounter = fixed_counter(60);

/// Snapshot of a clock's `(hour, minute, meridiem)` state.
///
/// `hour` is the clock's internal hour representation: `0..=23` for
/// [`ClockDisplay`], `1..=12` for
/// [`MeridiemClockDisplay`](crate::meridiem_clock::MeridiemClockDisplay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

/// What changed during a single [`Clock::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub minute_rollover: bool,
    pub hour_rollover: bool,
    pub meridiem_changed: bool,
}

/// Minute-resolution clock driven by external ticks.
///
/// Implemented by [`ClockDisplay`] and
/// [`MeridiemClockDisplay`](crate::meridiem_clock::MeridiemClockDisplay) so
/// callers can drive either variant.
pub trait Clock {
    /// Advances the clock by one minute.
    fn tick(&mut self) -> Tick;

    /// Cached display string without the meridiem.
    fn time(&self) -> &str;

    fn meridiem(&self) -> Meridiem;

    fn state(&self) -> ClockState;

    /// Number of ticks after which the clock returns to the same state.
    fn cycle_ticks(&self) -> u32;

    /// Display string followed by the meridiem, e.g. `3:45AM`.
    fn labelled_display(&self) -> String {
        let mut out = String::from(self.time());
        out.push_str(self.meridiem().as_str());
        out
    }
}

/// American-style 12-hour clock display.
///
/// Hours are held internally as `0..=23` and mapped to `12, 1..=11` for
/// display. The display covers 12:00AM (midnight) to 11:59PM. The hour is
/// not zero-padded, so the display reads `H:MM` or `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    hours: BoundedCounter,
    minutes: BoundedCounter,
    meridiem: Meridiem,
    display: String,
}

impl ClockDisplay {
    /// A clock set to 12:00AM.
    pub fn new() -> Self {
        let mut clock = Self {
            hours: HOURS_PER_DAY,
            minutes: MINUTES_PER_HOUR,
            meridiem: Meridiem::Am,
            display: String::with_capacity(5),
        };
        clock.update_display();
        clock
    }

    /// A clock set to `hour` (`0..=23`) and `minute` (`0..=59`).
    pub fn with_time(hour: u8, minute: u8) -> Result<Self, ClockError> {
        let mut clock = Self::new();
        clock.set_time(hour, minute)?;
        Ok(clock)
    }

    /// Advances one minute.
    ///
    /// The meridiem is only re-evaluated when the hour rolls over to
    /// midnight (AM) or reaches noon (PM).
    pub fn tick(&mut self) -> Tick {
        let before = self.meridiem;
        let mut tick = Tick {
            minute_rollover: self.minutes.increment(),
            ..Tick::default()
        };
        if tick.minute_rollover {
            tick.hour_rollover = self.hours.increment();
            if tick.hour_rollover {
                self.meridiem = Meridiem::Am;
            } else if self.hours.value() == 12 {
                self.meridiem = Meridiem::Pm;
            }
        }
        tick.meridiem_changed = self.meridiem != before;
        self.update_display();
        tick
    }

    /// Sets the internal hour (`0..=23`) and minute (`0..=59`) and derives
    /// the meridiem from the hour. Nothing changes if either is out of range.
    pub fn set_time(&mut self, hour: u8, minute: u8) -> Result<(), ClockError> {
        let mut hours = self.hours;
        hours
            .set_value(hour)
            .map_err(|_| ClockError::HourOutOfRange {
                hour,
                min: 0,
                max: HOURS_PER_DAY.limit() - 1,
            })?;
        let mut minutes = self.minutes;
        minutes.set_value(minute)?;

        self.hours = hours;
        self.minutes = minutes;
        self.meridiem = Meridiem::from_hour(hour);
        self.update_display();
        Ok(())
    }

    /// Parses `AM`/`PM` in any case. Other input leaves the meridiem as is.
    ///
    /// This does not touch the hour, so the meridiem can be made to
    /// disagree with the internal hour until the next `set_time` or
    /// boundary tick.
    pub fn set_meridiem(&mut self, meridiem: &str) -> Result<(), ClockError> {
        self.meridiem = meridiem.parse()?;
        Ok(())
    }

    pub fn set_meridiem_value(&mut self, meridiem: Meridiem) {
        self.meridiem = meridiem;
    }

    pub fn time(&self) -> &str {
        &self.display
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Internal hour, `0..=23`.
    pub fn hour(&self) -> u8 {
        self.hours.value()
    }

    pub fn minute(&self) -> u8 {
        self.minutes.value()
    }

    /// Refreshes the display and returns it with the meridiem appended.
    pub fn internal_24h_display(&mut self) -> String {
        self.update_display();
        self.labelled_display()
    }

    fn update_display(&mut self) {
        let hour = match self.hours.value() {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        self.display.clear();
        let _ = write!(self.display, "{hour}:{}", self.minutes);
    }
}

impl Default for ClockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ClockDisplay {
    fn tick(&mut self) -> Tick {
        ClockDisplay::tick(self)
    }

    fn time(&self) -> &str {
        ClockDisplay::time(self)
    }

    fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    fn state(&self) -> ClockState {
        ClockState {
            hour: self.hours.value(),
            minute: self.minutes.value(),
            meridiem: self.meridiem,
        }
    }

    fn cycle_ticks(&self) -> u32 {
        HOURS_PER_DAY.limit() as u32 * MINUTES_PER_HOUR.limit() as u32
    }
}
