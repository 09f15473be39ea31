use clap::Parser;
use tickclock_sim::{Simulation, SimulationConfig, TickEventKind};
use tickclock_tools::{MeridiemArg, VariantArg, VariantClock};

#[derive(Parser, Debug)]
#[command(name = "clock-cycle")]
struct Args {
    #[arg(long, value_enum, default_value_t = VariantArg::American)]
    variant: VariantArg,
    /// Starting hour: 0-23 for `american`, 1-12 for `dial`.
    #[arg(long, default_value_t = 12)]
    hour: u8,
    #[arg(long, default_value_t = 0)]
    minute: u8,
    #[arg(long, value_enum)]
    meridiem: Option<MeridiemArg>,
    /// Ticks to run; a full cycle when omitted.
    #[arg(long)]
    ticks: Option<u32>,
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u32,
    /// Skip event recording.
    #[arg(long)]
    no_events: bool,
    /// Print the full report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let clock = VariantClock::build(
        args.variant,
        args.hour,
        args.minute,
        args.meridiem.map(MeridiemArg::into_meridiem),
    )?;
    let config = SimulationConfig {
        max_ticks: args.max_ticks,
        record_events: !args.no_events,
    };
    let mut sim = Simulation::new(clock, config);
    let report = match args.ticks {
        Some(ticks) => sim.run(ticks)?,
        None => sim.run_cycle()?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} -> {} after {} ticks",
        report.start_display, report.end_display, report.ticks
    );
    for event in report.meridiem_changes() {
        if let TickEventKind::MeridiemChanged { from, to } = event.kind {
            println!("  tick {:>5}: {from} -> {to}", event.tick);
        }
    }
    println!("  hour rollovers: {}", report.hour_rollovers().count());
    if report.returned_to_start() {
        println!("  returned to starting state");
    }
    Ok(())
}
