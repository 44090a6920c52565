//! Embassy async tasks
//!
//! Each task runs forever at its own cadence. The counter and
//! temperature tasks meet only at the shared display lock.

pub mod counter;
pub mod led;
pub mod temperature;

pub use counter::counter_task;
pub use led::led_task;
pub use temperature::temperature_task;
