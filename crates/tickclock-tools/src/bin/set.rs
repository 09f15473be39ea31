use clap::Parser;
use tickclock_core::Clock;
use tickclock_tools::{VariantArg, VariantClock};

#[derive(Parser, Debug)]
#[command(name = "clock-set")]
struct Args {
    #[arg(long, value_enum, default_value_t = VariantArg::American)]
    variant: VariantArg,
    /// Hour to set: 0-23 for `american`, 1-12 for `dial`.
    #[arg(long)]
    hour: u8,
    #[arg(long)]
    minute: u8,
    /// Meridiem text applied after the time, e.g. `pm`. Checked by the clock
    /// rather than by argument parsing.
    #[arg(long)]
    meridiem: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut clock = VariantClock::build(args.variant, 12, 0, None)?;
    if let Err(e) = clock.set_time(args.hour, args.minute) {
        log::error!("rejected time {}:{:02}: {e}", args.hour, args.minute);
        return Err(e.into());
    }
    if let Some(text) = args.meridiem.as_deref() {
        clock.set_meridiem(text)?;
    }
    println!("{}", clock.labelled_display());
    Ok(())
}
