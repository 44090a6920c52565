//! DS1631 / DS1621 digital thermometer (I2C)
//!
//! The sensor converts on command and keeps the last result in a
//! two-byte register: the first byte is whole degrees, the second the
//! fraction in 1/256 steps (only the top bits are significant at the
//! chip's resolution).
//!
//! # Exchange
//!
//! 1. Write `START_CONVERT` (0x51)
//! 2. Wait for the conversion time (750 ms worst case at 12 bits; the
//!    demo uses 500 ms at the power-on resolution)
//! 3. Write `READ_TEMPERATURE` (0xAA), then read two bytes
//!
//! Completion is assumed after the wait rather than polled.

use tempsense_core::config::SensorStraps;
use tempsense_core::temperature::RawTemperature;
use tempsense_core::traits::{SensorError, TemperatureSensor};
use tempsense_hal::I2cBus;

/// 7-bit address with A2..A0 grounded (0x90 as an 8-bit write address)
pub const BASE_ADDRESS: u8 = 0x48;

/// DS1631 command bytes
pub mod cmd {
    /// Begin a temperature conversion
    pub const START_CONVERT: u8 = 0x51;
    /// Read the last converted temperature (2 bytes)
    pub const READ_TEMPERATURE: u8 = 0xAA;
}

/// 7-bit bus address for the given address pin wiring
pub const fn address(straps: SensorStraps) -> u8 {
    BASE_ADDRESS | ((straps.a2 as u8) << 2) | ((straps.a1 as u8) << 1) | straps.a0 as u8
}

/// DS1631 on an I2C bus
pub struct Ds1631<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cBus> Ds1631<I2C> {
    /// Create a driver for the sensor wired with the given address pins
    pub fn new(i2c: I2C, straps: SensorStraps) -> Self {
        Self {
            i2c,
            address: address(straps),
        }
    }

    /// The 7-bit bus address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cBus> TemperatureSensor for Ds1631<I2C> {
    fn start_conversion(&mut self) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[cmd::START_CONVERT])
            .map_err(|_| SensorError::Communication)
    }

    fn read_raw(&mut self) -> Result<RawTemperature, SensorError> {
        self.i2c
            .write(self.address, &[cmd::READ_TEMPERATURE])
            .map_err(|_| SensorError::Communication)?;

        let mut buf = [0u8; 2];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(|_| SensorError::Communication)?;

        Ok(RawTemperature::from_be_bytes(buf))
    }
}
