use tickclock_core::{ClockState, Meridiem, Tick};

/// The kind of transition observed on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickEventKind {
    MinuteRollover,
    HourRollover,
    MeridiemChanged { from: Meridiem, to: Meridiem },
}

/// A transition recorded during a simulation run.
///
/// `tick` is 1-based within the run; `state` is the clock state right after
/// that tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickEvent {
    pub tick: u32,
    pub kind: TickEventKind,
    pub state: ClockState,
}

/// Expands a tick summary into events, in carry order.
pub(crate) fn events_for(
    tick: u32,
    summary: Tick,
    before: Meridiem,
    state: ClockState,
) -> impl Iterator<Item = TickEvent> {
    let minute = summary
        .minute_rollover
        .then_some(TickEventKind::MinuteRollover);
    let hour = summary.hour_rollover.then_some(TickEventKind::HourRollover);
    let meridiem = summary
        .meridiem_changed
        .then_some(TickEventKind::MeridiemChanged {
            from: before,
            to: state.meridiem,
        });

    [minute, hour, meridiem]
        .into_iter()
        .flatten()
        .map(move |kind| TickEvent { tick, kind, state })
}

#[cfg(test)]
mod tests {
    use super::{events_for, TickEventKind};
    use tickclock_core::{ClockState, Meridiem, Tick};

    #[test]
    fn quiet_tick_has_no_events() {
        let state = ClockState {
            hour: 3,
            minute: 4,
            meridiem: Meridiem::Am,
        };
        assert_eq!(events_for(1, Tick::default(), Meridiem::Am, state).count(), 0);
    }

    #[test]
    fn midnight_tick_emits_all_three_in_order() {
        let state = ClockState {
            hour: 0,
            minute: 0,
            meridiem: Meridiem::Am,
        };
        let summary = Tick {
            minute_rollover: true,
            hour_rollover: true,
            meridiem_changed: true,
        };
        let kinds: Vec<_> = events_for(9, summary, Meridiem::Pm, state)
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TickEventKind::MinuteRollover,
                TickEventKind::HourRollover,
                TickEventKind::MeridiemChanged {
                    from: Meridiem::Pm,
                    to: Meridiem::Am
                },
            ]
        );
    }
}
