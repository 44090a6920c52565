//! SPI master (transmit only) for the LCD shift register

use embassy_rp::spi::{self, Blocking, Instance, Spi};
use tempsense_hal::spi::{Phase, Polarity, SpiConfig};
use tempsense_hal::SpiBus;

/// Error from SPI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError {
    /// Transfer failed
    Bus,
}

impl From<spi::Error> for SpiBusError {
    fn from(_: spi::Error) -> Self {
        SpiBusError::Bus
    }
}

/// Convert the shared SPI configuration to embassy-rp's
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let mut cfg = spi::Config::default();
    cfg.frequency = config.frequency;
    let (polarity, phase) = <(Polarity, Phase)>::from(config.mode);
    cfg.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    cfg.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    cfg
}

/// Blocking SPI peripheral
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = SpiBusError;

    fn write(&mut self, data: &[u8]) -> Result<(), SpiBusError> {
        self.spi.blocking_write(data)?;
        Ok(())
    }
}
