//! I2C master for the temperature sensor

use embassy_rp::i2c::{self, AbortReason, Blocking, I2c, Instance};
use tempsense_hal::i2c::I2cConfig;
use tempsense_hal::I2cBus;

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Device did not acknowledge
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Transfer aborted for another reason
    Abort,
    /// Zero-length or oversized buffer
    BufferLength,
    /// Address out of range or reserved
    Address,
    /// Other error
    Other,
}

impl From<i2c::Error> for I2cBusError {
    fn from(e: i2c::Error) -> Self {
        match e {
            i2c::Error::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            i2c::Error::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            i2c::Error::Abort(_) => I2cBusError::Abort,
            i2c::Error::InvalidReadBufferLength | i2c::Error::InvalidWriteBufferLength => {
                I2cBusError::BufferLength
            }
            i2c::Error::AddressOutOfRange(_) | i2c::Error::AddressReserved(_) => {
                I2cBusError::Address
            }
            #[allow(unreachable_patterns)]
            _ => I2cBusError::Other,
        }
    }
}

/// Convert the shared I2C configuration to embassy-rp's
pub fn i2c_config(config: &I2cConfig) -> i2c::Config {
    let mut cfg = i2c::Config::default();
    cfg.frequency = config.frequency;
    cfg
}

/// Blocking I2C peripheral
pub struct RpI2c<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2c<'d, T> {
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<T: Instance> I2cBus for RpI2c<'_, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.i2c.blocking_write(address, data)?;
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.i2c.blocking_read(address, buf)?;
        Ok(())
    }
}
