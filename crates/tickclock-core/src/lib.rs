//! Minute-resolution digital clock display models.
//!
//! `tickclock-core` provides a wrap-around [`BoundedCounter`], a typed
//! [`Meridiem`], and two clock displays that advance one minute per
//! [`Clock::tick`]:
//!
//! - [`ClockDisplay`]: American 12-hour display over a 24-hour internal
//!   hour (`1:05`, `11:59`).
//! - [`MeridiemClockDisplay`]: 1–12 hour dial with an explicit meridiem
//!   (`01:05`, `11:59`).
//!
//! Setters validate their input and return an error without touching the
//! clock when it is out of range.
//!
//! # Feature flags
//!
//! - **`std`** (default): enables `std::error::Error` implementations.
//! - **`serde`**: derives `Serialize`/`Deserialize` on state types.
//! - **`defmt`**: derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Clock trait, state snapshot, and the 24-hour-internal [`ClockDisplay`].
pub mod clock;
/// Wrap-around bounded counter.
pub mod counter;
/// Error types for counters and clocks.
pub mod error;
/// Self-contained 1–12 hour type.
pub mod hour;
/// AM/PM indicator.
pub mod meridiem;
/// 12-hour clock with explicit meridiem.
pub mod meridiem_clock;

pub use clock::{Clock, ClockDisplay, ClockState, Tick};
pub use counter::BoundedCounter;
pub use error::{ClockError, CounterError};
pub use hour::HourOfHalfDay;
pub use meridiem::Meridiem;
pub use meridiem_clock::MeridiemClockDisplay;
