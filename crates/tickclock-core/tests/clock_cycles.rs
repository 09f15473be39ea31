use proptest::prelude::*;
use tickclock_core::{Clock, ClockDisplay, ClockState, Meridiem, MeridiemClockDisplay};

fn advance<C: Clock>(clock: &mut C, ticks: u32) {
    for _ in 0..ticks {
        clock.tick();
    }
}

#[test]
fn american_clock_half_day_reaches_noon() {
    let mut clock = ClockDisplay::new();
    advance(&mut clock, 720);
    assert_eq!(clock.hour(), 12);
    assert_eq!(clock.meridiem(), Meridiem::Pm);
    assert_eq!(clock.time(), "12:00");
}

#[test]
fn american_clock_full_day_returns_to_midnight() {
    let mut clock = ClockDisplay::new();
    advance(&mut clock, 1440);
    assert_eq!(clock.meridiem(), Meridiem::Am);
    assert_eq!(clock.time(), "12:00");
    assert_eq!(clock.internal_24h_display(), "12:00AM");
}

#[test]
fn american_clock_afternoon_set_time() {
    let clock = ClockDisplay::with_time(13, 30).unwrap();
    assert_eq!(clock.time(), "1:30");
    assert_eq!(clock.meridiem(), Meridiem::Pm);
}

#[test]
fn american_clock_hour_is_not_padded() {
    let clock = ClockDisplay::with_time(1, 5).unwrap();
    assert_eq!(clock.time(), "1:05");
}

#[test]
fn meridiem_clock_first_hour() {
    let mut clock = MeridiemClockDisplay::new();
    clock.tick();
    assert_eq!(clock.time(), "12:01");
    assert_eq!(clock.meridiem(), Meridiem::Am);

    advance(&mut clock, 59);
    assert_eq!(clock.time(), "01:00");
    assert_eq!(clock.meridiem(), Meridiem::Am);
}

#[test]
fn meridiem_clock_half_day_visits_each_hour_once() {
    let mut clock = MeridiemClockDisplay::new();
    let mut hours = Vec::new();
    for _ in 0..720 {
        if clock.tick().minute_rollover {
            hours.push(clock.hour());
        }
    }
    assert_eq!(hours, (1..=12).collect::<Vec<u8>>());
    assert_eq!(clock.labelled_display(), "12:00PM");
}

#[test]
fn meridiem_clock_set_meridiem_cases() {
    let mut clock = MeridiemClockDisplay::new();
    clock.set_meridiem("pm").unwrap();
    assert_eq!(clock.meridiem(), Meridiem::Pm);
    clock.set_meridiem("AM").unwrap();
    clock.set_meridiem("PM").unwrap();
    assert_eq!(clock.meridiem(), Meridiem::Pm);
    assert!(clock.set_meridiem("foo").is_err());
    assert_eq!(clock.meridiem(), Meridiem::Pm);
}

#[cfg(feature = "serde")]
#[test]
fn state_serializes_with_upper_case_meridiem() {
    let clock = ClockDisplay::with_time(15, 45).unwrap();
    let json = serde_json::to_value(clock.state()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "hour": 15, "minute": 45, "meridiem": "PM" })
    );
    let back: ClockState = serde_json::from_value(json).unwrap();
    assert_eq!(back, clock.state());
}

#[derive(Debug, Clone)]
enum Op {
    Tick,
    SetTime(u8, u8),
    SetMeridiem(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Tick),
        1 => (any::<u8>(), any::<u8>()).prop_map(|(h, m)| Op::SetTime(h, m)),
        1 => prop_oneof![Just("am"), Just("PM"), Just("Pm"), Just("xx")]
            .prop_map(|s| Op::SetMeridiem(s.to_string())),
    ]
}

proptest! {
    #[test]
    fn american_clock_state_stays_in_range(ops in proptest::collection::vec(op(), 0..200)) {
        let mut clock = ClockDisplay::new();
        for op in ops {
            let before = clock.state();
            match op {
                Op::Tick => { clock.tick(); }
                Op::SetTime(h, m) => {
                    if clock.set_time(h, m).is_err() {
                        prop_assert_eq!(clock.state(), before);
                    }
                }
                Op::SetMeridiem(s) => {
                    if clock.set_meridiem(&s).is_err() {
                        prop_assert_eq!(clock.state(), before);
                    }
                }
            }
            prop_assert!(clock.hour() < 24);
            prop_assert!(clock.minute() < 60);
        }
    }

    #[test]
    fn meridiem_clock_hour_never_zero(ops in proptest::collection::vec(op(), 0..200)) {
        let mut clock = MeridiemClockDisplay::new();
        for op in ops {
            match op {
                Op::Tick => { clock.tick(); }
                Op::SetTime(h, m) => { let _ = clock.set_time(h, m, Meridiem::Am); }
                Op::SetMeridiem(s) => { let _ = clock.set_meridiem(&s); }
            }
            prop_assert!((1..=12).contains(&clock.hour()));
            prop_assert_eq!(clock.time().len(), 5);
        }
    }

    #[test]
    fn american_clock_cycles_with_full_day_period(hour in 0u8..24, minute in 0u8..60) {
        let mut clock = ClockDisplay::with_time(hour, minute).unwrap();
        let start = clock.state();
        let start_display = clock.time().to_string();
        let period = clock.cycle_ticks();
        advance(&mut clock, period);
        prop_assert_eq!(clock.state(), start);
        prop_assert_eq!(clock.time(), start_display.as_str());
    }

    #[test]
    fn meridiem_clock_cycles_with_full_day_period(hour in 1u8..=12, minute in 0u8..60, pm in any::<bool>()) {
        let meridiem = if pm { Meridiem::Pm } else { Meridiem::Am };
        let mut clock = MeridiemClockDisplay::with_time(hour, minute, meridiem).unwrap();
        let start: ClockState = clock.state();
        advance(&mut clock, 720);
        prop_assert_eq!(clock.state().hour, start.hour);
        prop_assert_eq!(clock.state().meridiem, meridiem.flipped());
        advance(&mut clock, 720);
        prop_assert_eq!(clock.state(), start);
    }
}
