//! Board-agnostic core logic for the tempsense demo
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller:
//!
//! - Device traits for the character LCD and the temperature sensor
//! - Fixed-point temperature conversion and formatting
//! - The shared-display coordinator (one lock around every LCD transaction)
//! - One-period bodies of the LED, counter and temperature tasks
//! - Compile-time configuration (periods, layout, lock scope)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod coordinator;
pub mod periodic;
pub mod temperature;
pub mod traits;

pub use config::{AppConfig, DisplayLayout, LockScope, TaskTimings};
pub use coordinator::SharedDisplay;
pub use temperature::{RawTemperature, TemperatureReading};
