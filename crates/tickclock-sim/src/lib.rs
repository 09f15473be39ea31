//! Deterministic tick-driven simulation for `tickclock` displays.
//!
//! A [`Simulation`] stands in for the external caller that would invoke
//! `tick` once per minute. It drives any [`tickclock_core::Clock`] for a
//! number of ticks, records rollovers and meridiem changes, and returns a
//! [`SimulationReport`].

pub mod error;
pub mod event;
pub mod report;
pub mod simulation;

pub use error::SimError;
pub use event::{TickEvent, TickEventKind};
pub use report::SimulationReport;
pub use simulation::{Simulation, SimulationConfig};
