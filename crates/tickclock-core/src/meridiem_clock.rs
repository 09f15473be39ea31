use crate::clock::{Clock, ClockState, Tick, MINUTES_PER_HOUR};
use crate::counter::BoundedCounter;
use crate::error::ClockError;
use crate::hour::HourOfHalfDay;
use crate::meridiem::Meridiem;
use alloc::string::String;
use core::fmt::Write;

/// 12-hour clock display with an explicit meridiem.
///
/// The hour runs `12, 1, 2, ..., 11, 12` and the meridiem flips each time a
/// tick brings the hour to 12. Both fields render zero-padded as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeridiemClockDisplay {
    hours: HourOfHalfDay,
    minutes: BoundedCounter,
    meridiem: Meridiem,
    display: String,
}

impl MeridiemClockDisplay {
    /// A clock set to 12:00 AM.
    pub fn new() -> Self {
        let mut clock = Self {
            hours: HourOfHalfDay::TWELVE,
            minutes: MINUTES_PER_HOUR,
            meridiem: Meridiem::Am,
            display: String::with_capacity(5),
        };
        clock.update_display();
        clock
    }

    pub fn with_time(hour: u8, minute: u8, meridiem: Meridiem) -> Result<Self, ClockError> {
        let mut clock = Self::new();
        clock.set_time(hour, minute, meridiem)?;
        Ok(clock)
    }

    pub fn tick(&mut self) -> Tick {
        let mut tick = Tick {
            minute_rollover: self.minutes.increment(),
            ..Tick::default()
        };
        if tick.minute_rollover {
            let was_twelve = self.hours == HourOfHalfDay::TWELVE;
            if self.hours.advance() {
                self.meridiem = self.meridiem.flipped();
                tick.meridiem_changed = true;
            }
            tick.hour_rollover = was_twelve;
        }
        self.update_display();
        tick
    }

    /// Sets hour (`1..=12`), minute (`0..=59`) and meridiem together.
    /// Nothing changes if either number is out of range.
    pub fn set_time(&mut self, hour: u8, minute: u8, meridiem: Meridiem) -> Result<(), ClockError> {
        let hours = HourOfHalfDay::new(hour)?;
        let mut minutes = self.minutes;
        minutes.set_value(minute)?;

        self.hours = hours;
        self.minutes = minutes;
        self.meridiem = meridiem;
        self.update_display();
        Ok(())
    }

    /// Parses `AM`/`PM` in any case. Other input leaves the meridiem as is.
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

    /// Hour on the dial, `1..=12`.
    pub fn hour(&self) -> u8 {
        self.hours.get()
    }

    pub fn minute(&self) -> u8 {
        self.minutes.value()
    }

    /// Refreshes the display and returns it with the meridiem appended.
    pub fn internal_12h_display(&mut self) -> String {
        self.update_display();
        self.labelled_display()
    }

    fn update_display(&mut self) {
        self.display.clear();
        let _ = write!(self.display, "{}:{}", self.hours, self.minutes);
    }
}

impl Default for MeridiemClockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MeridiemClockDisplay {
    fn tick(&mut self) -> Tick {
        MeridiemClockDisplay::tick(self)
    }

    fn time(&self) -> &str {
        MeridiemClockDisplay::time(self)
    }

    fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    fn state(&self) -> ClockState {
        ClockState {
            hour: self.hours.get(),
            minute: self.minutes.value(),
            meridiem: self.meridiem,
        }
    }

    // The hour cycle is 720 ticks; the meridiem flip doubles it.
    fn cycle_ticks(&self) -> u32 {
        2 * HourOfHalfDay::MAX as u32 * MINUTES_PER_HOUR.limit() as u32
    }
}
