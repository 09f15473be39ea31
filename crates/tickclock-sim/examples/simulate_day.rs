//! Simulate a day on both clock variants and print the transitions.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p tickclock-sim --example simulate_day

use tickclock_core::{ClockDisplay, MeridiemClockDisplay};
use tickclock_sim::{Simulation, SimulationConfig, TickEventKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut american = Simulation::new(ClockDisplay::new(), SimulationConfig::default());
    let report = american.run_cycle()?;
    for event in report.meridiem_changes() {
        println!("12h display: tick {} {:?}", event.tick, event.kind);
    }

    let mut dial = Simulation::new(MeridiemClockDisplay::new(), SimulationConfig::default());
    let report = dial.run(720)?;
    for event in report
        .events
        .iter()
        .filter(|e| e.kind == TickEventKind::MinuteRollover)
    {
        println!("dial: tick {} -> hour {}", event.tick, event.state.hour);
    }
    println!("dial ends at {}", report.end_display);
    Ok(())
}
