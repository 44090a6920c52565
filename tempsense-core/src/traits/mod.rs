//! Device traits
//!
//! These traits define the interface between the task logic and the
//! concrete drivers in `tempsense-drivers`.

pub mod display;
pub mod sensor;

pub use display::{CharacterDisplay, CursorPosition, DisplayError};
pub use sensor::{SensorError, TemperatureSensor};
