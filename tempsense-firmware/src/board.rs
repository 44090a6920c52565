//! Concrete peripheral types for the Pico wiring
//!
//! Embassy tasks cannot be generic, so the task signatures name these.

use embassy_rp::peripherals::{I2C0, SPI0};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Delay;
use tempsense_core::SharedDisplay;
use tempsense_drivers::lcd::ShiftRegisterLcd;
use tempsense_drivers::sensor::Ds1631;
use tempsense_hal_rp2040::gpio::RpOutput;
use tempsense_hal_rp2040::i2c::RpI2c;
use tempsense_hal_rp2040::spi::RpSpi;
use tempsense_hal_rp2040::uart::RpUartTx;

pub type BoardLcd = ShiftRegisterLcd<RpSpi<'static, SPI0>, RpOutput<'static>, Delay>;

/// LCD behind the lock shared by the counter and temperature tasks
pub type BoardDisplay = SharedDisplay<CriticalSectionRawMutex, BoardLcd>;

pub type BoardSensor = Ds1631<RpI2c<'static, I2C0>>;

pub type BoardConsole = RpUartTx<'static>;

pub type BoardLed = RpOutput<'static>;
