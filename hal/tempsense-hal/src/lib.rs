//! Tempsense Hardware Abstraction Layer
//!
//! Traits for the handful of peripherals the demo touches. Drivers in
//! `tempsense-drivers` are written against these traits so they can be
//! exercised on the host with recording mocks, while
//! `tempsense-hal-rp2040` binds them to embassy-rp peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tempsense-firmware (embassy tasks)     │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │ tempsense-core / │   │ tempsense-hal-   │
//! │ tempsense-drivers│   │     rp2040       │
//! └──────────────────┘   └──────────────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tempsense-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - LED and LCD chip-select
//! - [`spi::SpiBus`] - LCD shift register
//! - [`i2c::I2cBus`] - Temperature sensor
//! - [`uart::UartTx`] - Diagnostic console

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod spi;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::I2cBus;
pub use spi::SpiBus;
pub use uart::UartTx;
