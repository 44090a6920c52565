//! Temperature sensor trait

use crate::temperature::RawTemperature;

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The bus transfer to or from the sensor failed
    Communication,
}

/// Trait for sensors with a triggered, two-phase conversion
///
/// The caller starts a conversion, waits out the sensor's conversion time
/// on its own clock, then fetches the result. Splitting the exchange lets
/// an async task sleep through the wait instead of blocking the executor.
pub trait TemperatureSensor {
    /// Start a single temperature conversion
    fn start_conversion(&mut self) -> Result<(), SensorError>;

    /// Fetch the most recently converted value
    fn read_raw(&mut self) -> Result<RawTemperature, SensorError>;
}
