use clap::Parser;
use tickclock_core::Clock;
use tickclock_tools::{MeridiemArg, VariantArg, VariantClock};

#[derive(Parser, Debug)]
#[command(name = "clock-tick")]
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
    /// Number of one-minute ticks to apply.
    #[arg(long, default_value_t = 1)]
    ticks: u32,
    /// Append the meridiem to the printed time.
    #[arg(long)]
    labelled: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut clock = VariantClock::build(
        args.variant,
        args.hour,
        args.minute,
        args.meridiem.map(MeridiemArg::into_meridiem),
    )?;
    log::debug!("starting at {}", clock.labelled_display());
    for _ in 0..args.ticks {
        clock.tick();
    }
    if args.labelled {
        println!("{}", clock.labelled_display());
    } else {
        println!("{}", clock.time());
    }
    Ok(())
}
