//! RP2040-specific HAL for the tempsense demo
//!
//! Thin wrappers that implement the shared `tempsense-hal` traits on top
//! of embassy-rp's blocking peripherals, plus the board's pin map:
//!
//! - [`gpio::RpOutput`] - LED and LCD chip-select
//! - [`spi::RpSpi`] - LCD shift register (TX only)
//! - [`i2c::RpI2c`] - temperature sensor bus
//! - [`uart::RpUartTx`] - diagnostic console
//!
//! Each module also converts the shared bus configuration into the
//! embassy-rp equivalent and maps embassy-rp errors into local enums.

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod pins;
pub mod spi;
pub mod uart;

// Re-export shared traits and configs from tempsense-hal for convenience
pub use tempsense_hal::i2c::I2cConfig;
pub use tempsense_hal::spi::SpiConfig;
pub use tempsense_hal::uart::UartConfig;
pub use tempsense_hal::{I2cBus, OutputPin, SpiBus, UartTx};
