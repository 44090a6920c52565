//! One-period bodies of the demo's tasks
//!
//! The firmware wraps each of these in an endless embassy task with its
//! own cadence; keeping the bodies here lets the host tests drive them
//! with mock devices.

pub mod counter;
pub mod heartbeat;
pub mod temperature;

#[cfg(test)]
mod mock;

pub use counter::{run_counter_cycle, Counter};
pub use heartbeat::Heartbeat;
pub use temperature::{render_temperature, run_temperature_cycle};

use crate::traits::{DisplayError, SensorError};

/// Failure of one task period
///
/// Tasks log these and carry on at the next period; nothing is retried
/// within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError {
    /// Writing to the LCD failed
    Display(DisplayError),
    /// The sensor exchange failed; nothing was rendered
    Sensor(SensorError),
    /// The console report could not be sent
    Console,
}

impl From<DisplayError> for CycleError {
    fn from(e: DisplayError) -> Self {
        CycleError::Display(e)
    }
}

impl From<SensorError> for CycleError {
    fn from(e: SensorError) -> Self {
        CycleError::Sensor(e)
    }
}
