use clap::ValueEnum;
use tickclock_core::{
    Clock, ClockDisplay, ClockError, ClockState, Meridiem, MeridiemClockDisplay, Tick,
};

/// CLI-friendly selector for the clock display variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// 12-hour display over a 0-23 internal hour (`1:05PM`).
    American,
    /// 1-12 hour dial with explicit meridiem (`01:05PM`).
    Dial,
}

/// CLI-friendly meridiem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeridiemArg {
    Am,
    Pm,
}

impl MeridiemArg {
    /// Convert to the core [`Meridiem`] representation.
    pub const fn into_meridiem(self) -> Meridiem {
        match self {
            Self::Am => Meridiem::Am,
            Self::Pm => Meridiem::Pm,
        }
    }
}

/// Either clock variant behind one type, so binaries can pick at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantClock {
    American(ClockDisplay),
    Dial(MeridiemClockDisplay),
}

impl VariantClock {
    /// Builds a clock of `variant` at the given time.
    ///
    /// For [`VariantArg::American`] the hour is `0..=23` and the meridiem is
    /// derived from it unless `meridiem` overrides it. For
    /// [`VariantArg::Dial`] the hour is `1..=12` and the meridiem defaults
    /// to AM.
    pub fn build(
        variant: VariantArg,
        hour: u8,
        minute: u8,
        meridiem: Option<Meridiem>,
    ) -> Result<Self, ClockError> {
        match variant {
            VariantArg::American => {
                let mut clock = ClockDisplay::with_time(hour, minute)?;
                if let Some(meridiem) = meridiem {
                    clock.set_meridiem_value(meridiem);
                }
                Ok(Self::American(clock))
            }
            VariantArg::Dial => {
                let clock =
                    MeridiemClockDisplay::with_time(hour, minute, meridiem.unwrap_or_default())?;
                Ok(Self::Dial(clock))
            }
        }
    }

    pub fn set_time(&mut self, hour: u8, minute: u8) -> Result<(), ClockError> {
        match self {
            Self::American(clock) => clock.set_time(hour, minute),
            Self::Dial(clock) => {
                let meridiem = clock.meridiem();
                clock.set_time(hour, minute, meridiem)
            }
        }
    }

    pub fn set_meridiem(&mut self, meridiem: &str) -> Result<(), ClockError> {
        match self {
            Self::American(clock) => clock.set_meridiem(meridiem),
            Self::Dial(clock) => clock.set_meridiem(meridiem),
        }
    }
}

impl Clock for VariantClock {
    fn tick(&mut self) -> Tick {
        match self {
            Self::American(clock) => clock.tick(),
            Self::Dial(clock) => clock.tick(),
        }
    }

    fn time(&self) -> &str {
        match self {
            Self::American(clock) => clock.time(),
            Self::Dial(clock) => clock.time(),
        }
    }

    fn meridiem(&self) -> Meridiem {
        match self {
            Self::American(clock) => clock.meridiem(),
            Self::Dial(clock) => clock.meridiem(),
        }
    }

    fn state(&self) -> ClockState {
        match self {
            Self::American(clock) => clock.state(),
            Self::Dial(clock) => clock.state(),
        }
    }

    fn cycle_ticks(&self) -> u32 {
        match self {
            Self::American(clock) => clock.cycle_ticks(),
            Self::Dial(clock) => clock.cycle_ticks(),
        }
    }
}
