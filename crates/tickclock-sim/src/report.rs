use crate::event::{TickEvent, TickEventKind};
use tickclock_core::ClockState;

/// Outcome of a single simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationReport {
    pub start: ClockState,
    pub end: ClockState,
    pub start_display: String,
    pub end_display: String,
    pub ticks: u32,
    pub events: Vec<TickEvent>,
}

impl SimulationReport {
    pub fn meridiem_changes(&self) -> impl Iterator<Item = &TickEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, TickEventKind::MeridiemChanged { .. }))
    }

    pub fn hour_rollovers(&self) -> impl Iterator<Item = &TickEvent> {
        self.events
            .iter()
            .filter(|e| e.kind == TickEventKind::HourRollover)
    }

    /// True when the run ended in the state it started from.
    pub fn returned_to_start(&self) -> bool {
        self.start == self.end
    }
}
