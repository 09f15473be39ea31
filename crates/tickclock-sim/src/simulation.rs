use crate::error::SimError;
use crate::event::events_for;
use crate::report::SimulationReport;
use tickclock_core::{Clock, ClockState, Tick};

/// Limits and recording options for a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Largest number of ticks a single run may request.
    pub max_ticks: u32,
    /// Collect [`TickEvent`](crate::TickEvent)s in the report.
    pub record_events: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_ticks: 1_000_000,
            record_events: true,
        }
    }
}

/// Drives a clock one tick at a time.
#[derive(Debug)]
pub struct Simulation<C: Clock> {
    clock: C,
    config: SimulationConfig,
    elapsed: u64,
}

impl<C: Clock> Simulation<C> {
    pub fn new(clock: C, config: SimulationConfig) -> Self {
        Self {
            clock,
            config,
            elapsed: 0,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Direct access for `set_time`/`set_meridiem` between runs.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn into_inner(self) -> C {
        self.clock
    }

    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Ticks applied across all runs so far.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Advances the clock by `ticks` minutes.
    pub fn run(&mut self, ticks: u32) -> Result<SimulationReport, SimError> {
        if ticks > self.config.max_ticks {
            return Err(SimError::TickLimitExceeded {
                requested: ticks,
                limit: self.config.max_ticks,
            });
        }
        let mut report = self.begin();
        for _ in 0..ticks {
            self.step(&mut report);
        }
        Ok(self.finish(report))
    }

    /// Advances the clock through exactly one period, which returns it to
    /// its starting state.
    pub fn run_cycle(&mut self) -> Result<SimulationReport, SimError> {
        self.run(self.clock.cycle_ticks())
    }

    /// Ticks until the clock reaches `target`.
    ///
    /// Gives up after one full cycle (or `max_ticks`, if smaller), by which
    /// point the clock has advanced that many ticks.
    pub fn run_until(&mut self, target: ClockState) -> Result<SimulationReport, SimError> {
        let limit = self.clock.cycle_ticks().min(self.config.max_ticks);
        let mut report = self.begin();
        while self.clock.state() != target {
            if report.ticks == limit {
                log::warn!("target {target:?} not reached within {limit} ticks");
                return Err(SimError::TargetUnreachable { limit });
            }
            self.step(&mut report);
        }
        Ok(self.finish(report))
    }

    fn begin(&self) -> SimulationReport {
        let start = self.clock.state();
        SimulationReport {
            start,
            end: start,
            start_display: self.clock.labelled_display(),
            end_display: String::new(),
            ticks: 0,
            events: Vec::new(),
        }
    }

    fn step(&mut self, report: &mut SimulationReport) {
        let before = self.clock.meridiem();
        let summary = self.clock.tick();
        report.ticks += 1;
        self.elapsed += 1;

        if summary == Tick::default() {
            return;
        }
        let state = self.clock.state();
        if summary.hour_rollover {
            log::debug!("tick {}: hour rollover to {state:?}", report.ticks);
        }
        if summary.meridiem_changed {
            log::debug!(
                "tick {}: meridiem {before} -> {}",
                report.ticks,
                state.meridiem
            );
        }
        if self.config.record_events {
            report
                .events
                .extend(events_for(report.ticks, summary, before, state));
        }
    }

    fn finish(&self, mut report: SimulationReport) -> SimulationReport {
        report.end = self.clock.state();
        report.end_display = self.clock.labelled_display();
        log::info!(
            "simulated {} ticks: {} -> {}",
            report.ticks,
            report.start_display,
            report.end_display
        );
        report
    }
}
