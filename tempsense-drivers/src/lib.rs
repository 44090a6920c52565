//! Hardware driver implementations
//!
//! Concrete implementations of the device traits defined in
//! tempsense-core:
//!
//! - HD44780-compatible character LCD behind a serial shift register
//! - DS1631 / DS1621 digital thermometer on I2C

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod lcd;
pub mod sensor;
